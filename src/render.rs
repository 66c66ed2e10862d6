//! # Tracing facade
//!
//! Thin wrappers around [`render_core::compositor::composite`] and
//! [`render_core::scaler::scale`] that validate a [`RenderConfig`], emit an
//! advisory `tracing` span describing the call, and map
//! [`render_core::RenderError`] into [`crate::error::AppError`]. Logging
//! here is advisory only: it never changes what gets rendered, only what
//! gets observed.

use render_core::compositor::{composite, RgbImage, TileSource};
use render_core::geometry::{Extent, Point};
use render_core::kernel::ChannelSettings;
use render_core::scaler::scale;

use crate::config::RenderConfig;
use crate::error::AppResult;

/// Render a tiled region against `source`, gamma-finalize it per `config`,
/// and return the finished RGB image.
///
/// `image_shape` is the full extent of the pyramid level `region_origin`/
/// `region_shape` are cut from; a region that doesn't fit within it is
/// rejected before any tile is fetched.
pub fn render_region(
    config: &RenderConfig,
    region_origin: Point,
    region_shape: Extent,
    image_shape: Extent,
    channels: &[ChannelSettings],
    source: &mut dyn TileSource,
) -> AppResult<RgbImage> {
    config.validate()?;

    let span = tracing::debug_span!(
        "render_region",
        region.h = region_shape.h,
        region.w = region_shape.w,
        channel_count = channels.len(),
    );
    let _guard = span.enter();
    tracing::debug!("starting region composition");

    let mut image = composite(
        region_origin,
        region_shape,
        image_shape,
        config.tile_extent(),
        channels,
        source,
    )?;
    image.finalize(config.output_gamma as f32)?;

    tracing::debug!("region composition finished");
    Ok(image)
}

/// Resize an already-finalized image to `out_shape` via nearest-neighbor
/// sampling.
pub fn scale_region(
    data: &[f32],
    src_shape: Extent,
    channels: usize,
    out_shape: Extent,
) -> AppResult<Vec<f32>> {
    let span = tracing::debug_span!(
        "scale_region",
        src.h = src_shape.h,
        src.w = src_shape.w,
        out.h = out_shape.h,
        out.w = out_shape.w,
    );
    let _guard = span.enter();

    let out = scale(data, src_shape, channels, out_shape)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use render_core::compositor::{Tile, TileData};
    use render_core::error::RenderError;
    use render_core::geometry::GridRef;

    struct OneTileSource {
        tile: Option<Tile>,
    }

    impl TileSource for OneTileSource {
        fn fetch(&mut self, _channel_index: usize, _grid: GridRef) -> Result<Tile, RenderError> {
            self.tile.take().ok_or(RenderError::InvalidRegion)
        }
    }

    #[test]
    fn render_region_validates_config_first() {
        let mut config = RenderConfig::default();
        config.output_gamma = -1.0;
        let mut source = OneTileSource { tile: None };
        let channels = vec![ChannelSettings::new([1.0, 0.0, 0.0], 0.0, 1.0)];
        let err = render_region(
            &config,
            Point::new(0, 0),
            Extent::new(2, 2),
            Extent::new(2, 2),
            &channels,
            &mut source,
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::AppError::Config(_)));
    }

    #[test]
    fn render_region_composites_and_finalizes() {
        let mut config = RenderConfig::default();
        config.tile_shape = (2, 2);
        let mut source = OneTileSource {
            tile: Some(Tile::new(TileData::U8(vec![255, 255, 255, 255]), 2, 2)),
        };
        let channels = vec![ChannelSettings::new([1.0, 0.0, 0.0], 0.0, 1.0)];
        let image = render_region(
            &config,
            Point::new(0, 0),
            Extent::new(2, 2),
            Extent::new(2, 2),
            &channels,
            &mut source,
        )
        .unwrap();
        assert_eq!(image.height, 2);
        assert_eq!(image.width, 2);
        assert!(image.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn render_region_rejects_region_outside_image_bounds() {
        let config = RenderConfig::default();
        let mut source = OneTileSource { tile: None };
        let channels = vec![ChannelSettings::new([1.0, 0.0, 0.0], 0.0, 1.0)];
        let err = render_region(
            &config,
            Point::new(1, 0),
            Extent::new(2, 2),
            Extent::new(2, 2),
            &channels,
            &mut source,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Render(RenderError::InvalidRegion)
        ));
    }

    #[test]
    fn scale_region_resizes() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0];
        let out = scale_region(&data, Extent::new(2, 2), 1, Extent::new(4, 4)).unwrap();
        assert_eq!(out.len(), 16);
    }
}
