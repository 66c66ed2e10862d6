//! # pyramid_render
//!
//! The ambient facade around [`render_core`]: validated configuration, a
//! `tracing`-instrumented entry point, and an application-level error type.
//! The actual rendering math — tile selection, per-channel windowing,
//! additive pseudocolor compositing, gamma finalization, nearest-neighbor
//! scaling — lives in the pure, dependency-free `render-core` crate this
//! one depends on; nothing in that core knows this facade exists.
//!
//! This crate does not fetch tiles, build pyramids, parse metadata, or
//! provide a CLI. A caller supplies pyramid bytes through a
//! [`render_core::compositor::TileSource`] implementation and gets back a
//! finished RGB image.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pyramid_render::{config::RenderConfig, render::render_region};
//! use render_core::compositor::{Tile, TileData, TileSource};
//! use render_core::error::RenderError;
//! use render_core::geometry::{Extent, GridRef, Point};
//! use render_core::kernel::ChannelSettings;
//!
//! struct MySource;
//! impl TileSource for MySource {
//!     fn fetch(&mut self, _channel_index: usize, _grid: GridRef) -> Result<Tile, RenderError> {
//!         Ok(Tile::new(TileData::U8(vec![0; 1024 * 1024]), 1024, 1024))
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig::default();
//! let channels = vec![ChannelSettings::new([1.0, 0.0, 0.0], 0.0, 1.0)];
//! let mut source = MySource;
//! let image = render_region(
//!     &config,
//!     Point::new(0, 0),
//!     Extent::new(1024, 1024),
//!     Extent::new(1024, 1024),
//!     &channels,
//!     &mut source,
//! )?;
//! let rgb8 = image.to_u8_rgb();
//! # let _ = rgb8;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod render;

pub use config::RenderConfig;
pub use error::{AppError, AppResult};

/// Install a `tracing-subscriber` that reads its filter from
/// `RUST_LOG`, defaulting to `info`. Intended for binaries embedding this
/// crate; library consumers with their own subscriber should skip this.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
