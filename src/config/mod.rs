//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{deserialize_optional_path, load_config};
pub use model::{Config, RunConfig};
