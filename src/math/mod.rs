//! Mathematical utilities for the generator

/// Linear remapping between numeric ranges
pub mod mapping;
/// Seeded random stream feeding every generation pass
pub mod random;

pub use random::RandomStream;
