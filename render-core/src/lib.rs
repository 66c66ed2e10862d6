// SPDX-License-Identifier: MIT
//! # render-core
//!
//! A deterministic, synchronous, dependency-free engine for rendering a
//! multi-channel microscopy image region as a pseudocolor RGB image.
//!
//! This crate does not fetch tiles, build pyramids, parse metadata, or
//! touch a filesystem or network socket. It answers four questions, in
//! order, for a caller that already has tile bytes in hand:
//!
//! 1. **[`geometry`]** — which tile grid cells does a region touch, and
//!    which sub-rectangle of each one?
//! 2. **[`driver`]** — in what order should those `(channel, grid)` pairs
//!    be resolved to tiles?
//! 3. **[`kernel`]** (via **[`sample`]**'s tagged bit-width dispatch) — how
//!    is one tile's contribution windowed, colorized, and accumulated?
//! 4. **[`finalize`]** / **[`scaler`]** — how does the finished accumulator
//!    become a displayable, correctly sized image?
//!
//! [`compositor`] wires the first three together behind a [`compositor::TileSource`]
//! seam; everything above that seam (fetching, caching, pyramid construction,
//! auto-contrast, CLI, logging) is deliberately someone else's problem.

pub mod compositor;
pub mod driver;
pub mod error;
pub mod finalize;
pub mod geometry;
pub mod kernel;
pub mod sample;
pub mod scaler;

pub use compositor::{composite, composite_channels_whole, ChannelImage, RgbImage, Tile, TileData, TileSource};
pub use driver::{plan_work_items, WorkItem};
pub use error::RenderError;
pub use geometry::{Extent, GridRef, Point};
pub use kernel::ChannelSettings;
