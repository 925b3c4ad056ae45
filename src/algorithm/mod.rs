//! Core generation algorithms
//!
//! Orchestration of the subdivision, coloring and line passes, plus the
//! watercolor polygon engine that turns painted blocks into layered,
//! organically edged shapes.

/// Scene construction from seed and parameters
pub mod builder;
/// Watercolor layer schedule and per-block paint plans
pub mod layers;
/// Stochastic line selection and trimming
pub mod lines;
/// The generated scene data model
pub mod scene;
/// Immutable watercolor polygon and its growth transform
pub mod watercolor;

pub use builder::{GeneratorParams, SceneBuilder};
pub use scene::Scene;
