//! Command-line interface for generating and rendering paintings

use crate::algorithm::builder::{GeneratorParams, SceneBuilder};
use crate::algorithm::scene::Scene;
use crate::io::configuration::{DEFAULT_LINE_THICKNESS, DEFAULT_SEED, DEFAULT_SIZE_MULTIPLIER};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::{export_png, render_scene};
use crate::io::scene_file::{load_scene, save_scene};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquatile")]
#[command(
    author,
    version,
    about = "Generate Mondrian-style watercolor paintings"
)]
/// Command-line arguments for the painting generator
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas size multiplier over the 1200x600 base
    #[arg(short = 'm', long, default_value_t = DEFAULT_SIZE_MULTIPLIER)]
    pub size_multiplier: f64,

    /// Base line thickness in canvas units
    #[arg(short = 't', long, default_value_t = DEFAULT_LINE_THICKNESS)]
    pub line_thickness: f64,

    /// Explicit canvas width (overrides the multiplier)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Explicit canvas height (overrides the multiplier)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Write the generated scene as JSON for later reproduction
    #[arg(short = 'e', long, value_name = "SCENE")]
    pub export_scene: Option<PathBuf>,

    /// Render a previously exported scene instead of generating
    #[arg(short = 'i', long, value_name = "SCENE")]
    pub import_scene: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the generation parameters from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive multiplier or line thickness.
    pub fn params(&self) -> Result<GeneratorParams> {
        if !self.size_multiplier.is_finite() || self.size_multiplier <= 0.0 {
            return Err(invalid_parameter(
                "size-multiplier",
                &self.size_multiplier,
                &"must be a positive number",
            ));
        }
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(invalid_parameter(
                "line-thickness",
                &self.line_thickness,
                &"must be a positive number",
            ));
        }

        let mut params = GeneratorParams::scaled(self.seed, self.size_multiplier);
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        Ok(params)
    }
}

/// Orchestrates one generate-and-render run
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate or import a scene, render it, and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error for invalid parameters, a malformed imported
    /// scene, or any failed file operation.
    pub fn run(&mut self) -> Result<()> {
        let scene = self.obtain_scene()?;

        if let Some(path) = &self.cli.export_scene {
            save_scene(&scene, path)?;
        }

        let progress = ProgressManager::new(self.cli.should_show_progress());
        let img = render_scene(&scene, self.cli.line_thickness, &progress);
        export_png(&img, &self.cli.output)
    }

    // An imported scene replaces the generation passes entirely
    fn obtain_scene(&self) -> Result<Scene> {
        if let Some(path) = &self.cli.import_scene {
            load_scene(path)
        } else {
            SceneBuilder::new(self.cli.params()?).build()
        }
    }
}
