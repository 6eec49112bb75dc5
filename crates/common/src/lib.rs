//! Shared configuration for the terra viewer.
//!
//! # Invariants
//! - Every field has a default, so a partial YAML file is always valid input.
//! - `ViewerConfig::validate` is the only gate between a loaded file and the app.

mod config;

pub use config::{
    CameraConfig, ConfigError, InputConfig, ProjectionConfig, ViewerConfig, WindowConfig,
};
