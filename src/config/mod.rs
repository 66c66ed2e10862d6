//! # Configuration module
//!
//! Caller-facing settings for the render facade.

pub mod config;

pub use config::{ConfigError, RenderConfig};
