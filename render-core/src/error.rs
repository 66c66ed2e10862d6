// SPDX-License-Identifier: MIT
//! Error taxonomy for the rendering core.
//!
//! Every failure mode the core can produce is a variant here. There is no
//! retry and no partial commit: detection happens before any accumulator
//! mutation, and on error the caller is expected to discard whatever output
//! buffer it was holding.
//!
//! Kept as a plain enum with hand-written `Display`/`Error` impls rather than
//! `thiserror`, matching the style the rest of this tree uses for
//! library-internal error types (see `cpu::ScaleError` in the sibling
//! scaling crate this workspace grew out of).

use std::fmt;

/// Errors the core rendering pipeline can return.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Region origin/shape failed [`crate::geometry::validate_region`].
    InvalidRegion,
    /// Composition was requested with zero channels.
    NoChannels,
    /// Channel images in a whole-image (non-tiled) composition don't share
    /// a common `(height, width)`.
    ChannelShapeMismatch,
    /// A tile's declared bit width is not 8, 16, or 32, or it disagrees
    /// with a previously observed width for the same channel.
    TileWidthMismatch { expected: u32, got: u32 },
    /// Nearest-neighbor scale factor was <= 0.
    InvalidScale,
    /// Output gamma was <= 0.
    InvalidGamma(f32),
    /// `max_n <= min_n`, or either window bound fell outside `[0, 1]`.
    InvalidWindow { min_n: f32, max_n: f32 },
    /// A color component fell outside `[0, 1]`.
    InvalidColor { r: f32, g: f32, b: f32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidRegion => {
                write!(f, "region origin/shape is out of bounds or non-positive")
            }
            RenderError::NoChannels => write!(f, "composition requested with zero channels"),
            RenderError::ChannelShapeMismatch => {
                write!(f, "channel images do not all share the same shape")
            }
            RenderError::TileWidthMismatch { expected, got } => write!(
                f,
                "tile bit width mismatch: expected {expected}-bit, got {got}-bit"
            ),
            RenderError::InvalidScale => write!(f, "scale factor must be positive"),
            RenderError::InvalidGamma(g) => write!(f, "output gamma must be positive, got {g}"),
            RenderError::InvalidWindow { min_n, max_n } => write!(
                f,
                "invalid intensity window ({min_n}, {max_n}): require 0 <= min < max <= 1"
            ),
            RenderError::InvalidColor { r, g, b } => write!(
                f,
                "invalid color ({r}, {g}, {b}): components must lie in [0, 1]"
            ),
        }
    }
}

impl std::error::Error for RenderError {}
