//! # Simulation Unit Tests



/// Source file loading.
pub mod loader;
