//! Scene JSON export and validated import
//!
//! A saved scene is a complete substitute for running the generation
//! passes: it carries the master seed, so watercolor layer stacks
//! regenerate identically from an imported scene.

use crate::algorithm::scene::Scene;
use crate::io::error::{GeneratorError, Result};
use std::fs;
use std::path::Path;

/// Write a scene as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the scene
/// cannot be serialized, or the file cannot be written.
pub fn save_scene(scene: &Scene, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(scene).map_err(|e| GeneratorError::SceneFormat {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, json).map_err(|e| GeneratorError::FileSystem {
        path: path.to_path_buf(),
        operation: "write scene",
        source: e,
    })
}

/// Read and validate a scene file
///
/// The scene is validated before being returned; a malformed file is
/// rejected whole with a descriptive error and never partially accepted.
///
/// # Errors
///
/// Returns [`GeneratorError::FileSystem`] when the file cannot be read,
/// [`GeneratorError::SceneFormat`] when it is not valid scene JSON, and
/// [`GeneratorError::MalformedScene`] when its contents are inconsistent.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path).map_err(|e| GeneratorError::FileSystem {
        path: path.to_path_buf(),
        operation: "read scene",
        source: e,
    })?;

    let scene: Scene = serde_json::from_str(&text).map_err(|e| GeneratorError::SceneFormat {
        path: path.to_path_buf(),
        source: e,
    })?;

    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::builder::{GeneratorParams, SceneBuilder};

    fn scene() -> Scene {
        SceneBuilder::new(GeneratorParams { seed: 42, width: 600, height: 300 })
            .build()
            .unwrap()
    }

    #[test]
    fn round_trip_preserves_the_scene_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let original = scene();
        save_scene(&original, &path).unwrap();
        let restored = load_scene(&path).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/scene.json");
        save_scene(&scene(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unparseable_file_reports_scene_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        match load_scene(&path) {
            Err(GeneratorError::SceneFormat { .. }) => {}
            other => unreachable!("expected SceneFormat error, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"seed": 1, "width": 100}"#).unwrap();
        assert!(load_scene(&path).is_err());
    }

    #[test]
    fn inconsistent_scene_is_rejected_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.json");
        let mut broken = scene();
        broken.height = 0;
        fs::write(&path, serde_json::to_string(&broken).unwrap()).unwrap();
        match load_scene(&path) {
            Err(GeneratorError::MalformedScene { .. }) => {}
            other => unreachable!("expected MalformedScene error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_file_system() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match load_scene(&path) {
            Err(GeneratorError::FileSystem { .. }) => {}
            other => unreachable!("expected FileSystem error, got {other:?}"),
        }
    }
}
