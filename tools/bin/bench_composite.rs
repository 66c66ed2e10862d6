//! Benchmark: additive compositing throughput for a multi-channel region.
//!
//! Measures wall-clock time to composite a fixed region against an
//! in-memory tile source, at two tile granularities, to gauge the overhead
//! `select_grids`/`select_subregion` bookkeeping adds over a single giant
//! tile covering the whole region.

use std::collections::HashMap;
use std::time::Instant;

use render_core::compositor::{composite, Tile, TileData, TileSource};
use render_core::error::RenderError;
use render_core::geometry::{Extent, GridRef, Point};
use render_core::kernel::ChannelSettings;

struct MapSource {
    tiles: HashMap<(usize, i64, i64), Tile>,
}

impl TileSource for MapSource {
    fn fetch(&mut self, channel_index: usize, grid: GridRef) -> Result<Tile, RenderError> {
        self.tiles
            .get(&(channel_index, grid.gy, grid.gx))
            .cloned()
            .ok_or(RenderError::InvalidRegion)
    }
}

fn build_source(side: usize, tile_side: usize, channel_count: usize) -> MapSource {
    let mut tiles = HashMap::new();
    let grids_per_side = side.div_ceil(tile_side);
    for channel_index in 0..channel_count {
        for gy in 0..grids_per_side {
            for gx in 0..grids_per_side {
                let data = vec![12345u16; tile_side * tile_side];
                tiles.insert(
                    (channel_index, gy as i64, gx as i64),
                    Tile::new(TileData::U16(data), tile_side, tile_side),
                );
            }
        }
    }
    MapSource { tiles }
}

fn run(side: usize, tile_side: usize, channels: &[ChannelSettings]) -> std::time::Duration {
    let mut source = build_source(side, tile_side, channels.len());
    let start = Instant::now();
    let _image = composite(
        Point::new(0, 0),
        Extent::new(side as i64, side as i64),
        Extent::new(side as i64, side as i64),
        Extent::new(tile_side as i64, tile_side as i64),
        channels,
        &mut source,
    )
    .expect("composite failed");
    start.elapsed()
}

fn main() {
    let side = 2048usize;
    let channels = vec![
        ChannelSettings::new([1.0, 0.0, 0.0], 0.0, 1.0),
        ChannelSettings::new([0.0, 1.0, 0.0], 0.0, 1.0),
        ChannelSettings::new([0.0, 0.0, 1.0], 0.0, 1.0),
    ];

    println!("Additive compositing benchmark: {side}x{side}, {} channels", channels.len());
    println!("────────────────────────────────────────────────────");

    for tile_side in [256usize, 512, 1024, 2048] {
        let elapsed = run(side, tile_side, &channels);
        let megapixels = (side * side) as f64 / 1_000_000.0;
        println!(
            "tile {tile_side:>4}x{tile_side:<4}: {:>7.2} ms ({:>6.1} Mpx/s)",
            elapsed.as_secs_f64() * 1000.0,
            megapixels / elapsed.as_secs_f64(),
        );
    }
}
