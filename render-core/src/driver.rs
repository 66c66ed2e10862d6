// SPDX-License-Identifier: MIT
//! # Tile iterator driver
//!
//! Turns a region request plus a list of channel settings into the ordered
//! sequence of work items a caller must fetch tiles for. This module makes
//! no I/O calls and holds no tile data — it is pure region-level
//! bookkeeping, separated from the tile-level combining work the
//! compositor does.

use crate::error::RenderError;
use crate::geometry::{select_grids, Extent, GridRef, Point};
use crate::kernel::ChannelSettings;

/// One `(channel_index, grid_reference, channel_rendering_settings)` tuple
/// the caller must resolve to an actual tile bitmap before handing it to
/// the compositor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkItem {
    pub channel_index: usize,
    pub grid: GridRef,
    pub settings: ChannelSettings,
}

/// Enumerate the work items for a region against a fixed set of channels.
///
/// Ordering is row-major by `(gy, gx)` and, within a grid cell, by
/// `channel_index` — this is what makes floating-point accumulation
/// observable-but-deterministic across runs (§4.3). Fails with
/// [`RenderError::NoChannels`] if `channels` is empty, or propagates the
/// first [`RenderError::InvalidWindow`]/[`RenderError::InvalidColor`] found.
pub fn plan_work_items(
    region_origin: Point,
    region_shape: Extent,
    tile_shape: Extent,
    channels: &[ChannelSettings],
) -> Result<Vec<WorkItem>, RenderError> {
    if channels.is_empty() {
        return Err(RenderError::NoChannels);
    }
    for ch in channels {
        ch.validate()?;
    }

    let grids = select_grids(tile_shape, region_origin, region_shape);
    let mut items = Vec::with_capacity(grids.len() * channels.len());
    for grid in grids {
        for (channel_index, settings) in channels.iter().enumerate() {
            items.push(WorkItem {
                channel_index,
                grid,
                settings: *settings,
            });
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_channel_list() {
        let err = plan_work_items(
            Point::new(0, 0),
            Extent::new(10, 10),
            Extent::new(256, 256),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, RenderError::NoChannels);
    }

    #[test]
    fn ordering_is_grid_major_then_channel_minor() {
        let channels = vec![
            ChannelSettings::new([1.0, 0.0, 0.0], 0.0, 1.0),
            ChannelSettings::new([0.0, 1.0, 0.0], 0.0, 1.0),
        ];
        let items = plan_work_items(
            Point::new(0, 0),
            Extent::new(300, 300),
            Extent::new(256, 256),
            &channels,
        )
        .unwrap();

        // 2x2 grids * 2 channels.
        assert_eq!(items.len(), 8);
        let mut prev_grid = (i64::MIN, i64::MIN);
        let mut seen_in_cell = 0usize;
        for item in &items {
            let key = (item.grid.gy, item.grid.gx);
            if key != prev_grid {
                prev_grid = key;
                seen_in_cell = 0;
            }
            assert_eq!(item.channel_index, seen_in_cell);
            seen_in_cell += 1;
        }
    }

    #[test]
    fn propagates_invalid_channel_settings() {
        let channels = vec![ChannelSettings::new([2.0, 0.0, 0.0], 0.0, 1.0)];
        let err = plan_work_items(
            Point::new(0, 0),
            Extent::new(10, 10),
            Extent::new(256, 256),
            &channels,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::InvalidColor { .. }));
    }
}
