// SPDX-License-Identifier: MIT
//! # Region compositor
//!
//! The central entry point: turns a region request plus a source of tile
//! bitmaps into a finished, additively-composited RGB image. This module
//! owns no I/O itself — [`TileSource`] is the seam where a caller plugs in
//! whatever actually holds pyramid bytes (file, network, cache); the core
//! only knows how to ask for `(channel_index, grid_reference)` and combine
//! what comes back.
//!
//! [`composite_channels_whole`] is the non-tiled sibling entry point for
//! callers that already have whole per-channel images decoded (no pyramid,
//! no grid): same shape-checked additive blend, just over full images
//! rather than tiles.

use crate::driver::plan_work_items;
use crate::error::RenderError;
use crate::finalize;
use crate::geometry::{select_position, select_subregion, validate_region, Extent, GridRef, Point};
use crate::kernel::{ChannelSettings, TileBits, TileView};

/// Owned pixel data for one tile, tagged by sample width.
#[derive(Clone, Debug)]
pub enum TileData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl TileData {
    pub fn bits(&self) -> u32 {
        match self {
            TileData::U8(_) => 8,
            TileData::U16(_) => 16,
            TileData::U32(_) => 32,
        }
    }
}

/// One owned tile bitmap plus its declared dimensions.
#[derive(Clone, Debug)]
pub struct Tile {
    pub data: TileData,
    pub height: usize,
    pub width: usize,
}

impl Tile {
    pub fn new(data: TileData, height: usize, width: usize) -> Self {
        Self {
            data,
            height,
            width,
        }
    }

    fn as_tile_bits(&mut self) -> TileBits<'_> {
        match &mut self.data {
            TileData::U8(v) => TileBits::U8(TileView::new(v, self.height, self.width)),
            TileData::U16(v) => TileBits::U16(TileView::new(v, self.height, self.width)),
            TileData::U32(v) => TileBits::U32(TileView::new(v, self.height, self.width)),
        }
    }
}

/// The seam between this pure core and whatever actually stores pyramid
/// tiles. Implementors fetch and decode; this core never does either.
pub trait TileSource {
    fn fetch(&mut self, channel_index: usize, grid: GridRef) -> Result<Tile, RenderError>;
}

/// A finished, row-major `(height, width, 3)` RGB image in normalized
/// `[0, 1]` float, before or after gamma finalization.
#[derive(Clone, Debug)]
pub struct RgbImage {
    pub data: Vec<f32>,
    pub height: usize,
    pub width: usize,
}

impl RgbImage {
    /// Clamp and gamma-correct this image in place.
    pub fn finalize(&mut self, gamma: f32) -> Result<(), RenderError> {
        finalize::finalize(&mut self.data, gamma)
    }

    /// Quantize to 8-bit RGB. Should be called after [`Self::finalize`].
    pub fn to_u8_rgb(&self) -> Vec<u8> {
        finalize::to_u8_rgb(&self.data)
    }
}

/// A whole, already-decoded per-channel image (no tiling), for the
/// non-pyramid convenience path.
pub struct ChannelImage {
    pub data: TileData,
    pub height: usize,
    pub width: usize,
    pub settings: ChannelSettings,
}

/// Composite a tiled region: fetch every tile a region needs from `source`,
/// window and colorize each contributing sub-rectangle, and accumulate into
/// one output image.
///
/// `image_shape` is the full extent of the pyramid level the region is cut
/// from; the region must fit within it or this fails with
/// [`RenderError::InvalidRegion`] before any tile is fetched. Tiles are then
/// fetched in the deterministic order [`plan_work_items`] produces, and all
/// per-channel settings are validated before the first fetch, so a caller
/// never pays for partial I/O on a doomed request.
pub fn composite(
    region_origin: Point,
    region_shape: Extent,
    image_shape: Extent,
    tile_shape: Extent,
    channels: &[ChannelSettings],
    source: &mut dyn TileSource,
) -> Result<RgbImage, RenderError> {
    if !validate_region(region_origin, region_shape, image_shape) {
        return Err(RenderError::InvalidRegion);
    }
    let work_items = plan_work_items(region_origin, region_shape, tile_shape, channels)?;

    let width = region_shape.w as usize;
    let height = region_shape.h as usize;
    let mut accum = vec![0f32; height * width * 3];
    let mut expected_bits: Vec<Option<u32>> = vec![None; channels.len()];

    for item in work_items {
        let mut tile = source.fetch(item.channel_index, item.grid)?;
        let bits = tile.data.bits();
        match expected_bits[item.channel_index] {
            None => expected_bits[item.channel_index] = Some(bits),
            Some(expected) if expected != bits => {
                return Err(RenderError::TileWidthMismatch { expected, got: bits })
            }
            _ => {}
        }

        let (start, end) = select_subregion(item.grid, tile_shape, region_origin, region_shape);
        let pos = select_position(item.grid, tile_shape, region_origin);
        let mut tile_bits = tile.as_tile_bits();
        tile_bits.composite_subregion(
            &item.settings,
            start.y as usize,
            end.y as usize,
            start.x as usize,
            end.x as usize,
            &mut accum,
            width,
            pos.y as usize,
            pos.x as usize,
        );
    }

    Ok(RgbImage {
        data: accum,
        height,
        width,
    })
}

/// Composite whole, already-decoded per-channel images with no tiling.
///
/// Every channel must share the same `(height, width)` or this fails with
/// [`RenderError::ChannelShapeMismatch`] before any accumulation happens,
/// mirroring the shape check the reference blend routine performs up
/// front.
pub fn composite_channels_whole(mut channels: Vec<ChannelImage>) -> Result<RgbImage, RenderError> {
    if channels.is_empty() {
        return Err(RenderError::NoChannels);
    }
    let (height, width) = (channels[0].height, channels[0].width);
    for ch in &channels {
        if ch.height != height || ch.width != width {
            return Err(RenderError::ChannelShapeMismatch);
        }
        ch.settings.validate()?;
    }

    let mut accum = vec![0f32; height * width * 3];
    for ch in channels.iter_mut() {
        let mut tile = Tile::new(ch.data.clone(), height, width);
        let mut tile_bits = tile.as_tile_bits();
        tile_bits.composite_subregion(&ch.settings, 0, height, 0, width, &mut accum, width, 0, 0);
    }

    Ok(RgbImage {
        data: accum,
        height,
        width,
    })
}
