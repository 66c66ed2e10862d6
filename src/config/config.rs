//! # Configuration
//!
//! Caller-facing settings for a render or scale call: tile geometry, the
//! output gamma, and pyramid level preferences. Plain data plus validation:
//! a small struct with sane defaults and a `validate()` that rejects bad
//! numeric ranges before any work starts.

use std::fmt;

use render_core::Extent;

/// Caller-facing render configuration.
///
/// # Examples
///
/// ```rust
/// use pyramid_render::config::RenderConfig;
///
/// let config = RenderConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Tile shape `(height, width)` in pixels. Must be non-zero in both
    /// dimensions.
    pub tile_shape: (u32, u32),

    /// Gamma applied at finalization, `A' = clamp(A, 0, 1) ^ (1/gamma)`.
    /// Must be strictly positive.
    pub output_gamma: f64,

    /// When choosing a pyramid level for a full-resolution request, favor
    /// more detail (`true`) or a smaller transfer (`false`).
    pub prefer_higher_resolution: bool,

    /// If set, the composited region is additionally resized so its
    /// longest side is close to this value. `None` disables resizing
    /// beyond whatever pyramid level was chosen.
    pub target_longest_side: Option<u32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_shape: (1024, 1024),
            output_gamma: 2.2,
            prefer_higher_resolution: true,
            target_longest_side: None,
        }
    }
}

/// A `RenderConfig` field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroTileDimension,
    NonPositiveGamma(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTileDimension => write!(f, "tile_shape must be non-zero in both dimensions"),
            ConfigError::NonPositiveGamma(g) => write!(f, "output_gamma must be positive, got {g}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl RenderConfig {
    /// Validate field ranges, rejecting before any composition work
    /// begins rather than midway through.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_shape.0 == 0 || self.tile_shape.1 == 0 {
            return Err(ConfigError::ZeroTileDimension);
        }
        if !(self.output_gamma > 0.0) {
            return Err(ConfigError::NonPositiveGamma(self.output_gamma.to_string()));
        }
        Ok(())
    }

    /// The tile shape as the `render-core` geometry type.
    pub fn tile_extent(&self) -> Extent {
        Extent::new(self.tile_shape.0 as i64, self.tile_shape.1 as i64)
    }
}
