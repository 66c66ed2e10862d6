//! # Application-level error
//!
//! The boundary error type a caller of this crate (a future CLI, a web
//! handler, whatever embeds this renderer) matches on. It wraps
//! [`render_core::RenderError`] and adds the one failure mode `render-core`
//! doesn't know about: a bad [`crate::config::RenderConfig`].
//!
//! Written by hand rather than with `thiserror`, matching the manual
//! `impl From<X> for Y` style the rest of this tree uses for its error
//! conversions.

use std::fmt;

use render_core::RenderError;

use crate::config::ConfigError;

/// Errors this crate's facade functions can return.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A [`crate::config::RenderConfig`] failed validation.
    Config(ConfigError),
    /// The rendering core rejected the request or inputs.
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "invalid configuration: {e}"),
            AppError::Render(e) => write!(f, "render failed: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}

/// Result type alias using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_and_displays() {
        let err: AppError = ConfigError::ZeroTileDimension.into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn render_error_converts_and_displays() {
        let err: AppError = RenderError::NoChannels.into();
        assert!(matches!(err, AppError::Render(_)));
        assert!(err.to_string().contains("render failed"));
    }
}
