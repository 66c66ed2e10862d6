// SPDX-License-Identifier: MIT
//! # Region, tile-grid and pyramid-level arithmetic
//!
//! This module answers "which tiles, and which part of each tile" for an
//! arbitrary axis-aligned region against a fixed tile grid, plus the
//! pyramid-level bookkeeping needed to pick a level and express a
//! full-resolution region in that level's coordinates.
//!
//! ## Coordinate convention
//!
//! Points and extents are always `(y, x)` / `(h, w)` — row before column —
//! matching the rest of the pipeline. All arithmetic here is performed on
//! `i64` (at least 64 bits, per the contract) to avoid overflow at large
//! pyramid extents; origins and shapes are expected to be non-negative,
//! which `validate_region` enforces before any tile is touched.
//!
//! ## Rounding conventions
//!
//! - Scaling a coordinate to a pyramid level rounds to the nearest integer.
//! - The first tile covering a region is found with `floor`.
//! - The tile past the end of a region is found with `ceil`.
//!
//! These three conventions are independent and are documented at each
//! function below; mixing them up is the most common source of off-by-one
//! tile coverage bugs.

use crate::error::RenderError;

/// A 2-D point or delta, row (`y`) before column (`x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub y: i64,
    pub x: i64,
}

impl Point {
    pub fn new(y: i64, x: i64) -> Self {
        Self { y, x }
    }
}

/// A 2-D extent (height, width).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Extent {
    pub h: i64,
    pub w: i64,
}

impl Extent {
    pub fn new(h: i64, w: i64) -> Self {
        Self { h, w }
    }

    fn positive(self) -> bool {
        self.h > 0 && self.w > 0
    }
}

/// A tile grid reference `(gy, gx)` within one channel at one pyramid level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridRef {
    pub gy: i64,
    pub gx: i64,
}

impl GridRef {
    pub fn new(gy: i64, gx: i64) -> Self {
        Self { gy, gx }
    }
}

/// Floor division that is correct for non-negative operands (the only case
/// this module is ever asked to handle, since `validate_region` rejects
/// negative origins before any of these helpers run).
fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0);
    a.div_euclid(b)
}

/// Ceil division, same non-negativity assumption as [`floor_div`].
fn ceil_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0);
    let q = a.div_euclid(b);
    let r = a.rem_euclid(b);
    if r == 0 {
        q
    } else {
        q + 1
    }
}

/// Choose a pyramid level for a full-resolution image so its longest side
/// is close to `target_longest_side`.
///
/// `r = log2(max(full_shape) / target_longest_side)`. When `prefer_higher`
/// is set the result favors more detail (`floor(r)`); otherwise it favors a
/// smaller transfer (`ceil(r)`). Either way the result is clamped to
/// `[0, level_count - 1]`.
pub fn choose_level(
    full_shape: Extent,
    level_count: u32,
    target_longest_side: i64,
    prefer_higher: bool,
) -> Result<u32, RenderError> {
    if level_count < 1 || target_longest_side <= 0 || !full_shape.positive() {
        return Err(RenderError::InvalidRegion);
    }
    let longest = full_shape.h.max(full_shape.w) as f64;
    let r = (longest / target_longest_side as f64).log2();
    let level = if prefer_higher { r.floor() } else { r.ceil() };
    let clamped = level.clamp(0.0, (level_count - 1) as f64);
    Ok(clamped as u32)
}

/// Express a point (origin or shape) at pyramid level `level`, rounding to
/// the nearest integer. Level 0 is the identity map.
pub fn scale_to_level(point: Point, level: u32) -> Point {
    if level == 0 {
        return point;
    }
    let factor = (2i64).pow(level) as f64;
    Point::new(
        (point.y as f64 / factor).round() as i64,
        (point.x as f64 / factor).round() as i64,
    )
}

/// The grid cell containing `region_origin`, via `floor(origin / tile_shape)`.
pub fn first_grid(tile_shape: Extent, region_origin: Point) -> GridRef {
    GridRef::new(
        floor_div(region_origin.y, tile_shape.h),
        floor_div(region_origin.x, tile_shape.w),
    )
}

/// Number of grid cells `(ny, nx)` covered by a region, such that
/// `first_grid + count` is the exclusive upper index.
pub fn grid_count(tile_shape: Extent, region_origin: Point, region_shape: Extent) -> (i64, i64) {
    let first = first_grid(tile_shape, region_origin);
    let end_y = region_origin.y + region_shape.h;
    let end_x = region_origin.x + region_shape.w;
    let last_y = ceil_div(end_y, tile_shape.h);
    let last_x = ceil_div(end_x, tile_shape.w);
    (last_y - first.gy, last_x - first.gx)
}

/// The ordered (row-major `(gy, gx)`) list of grid references covering a
/// region. This is the Cartesian product of the two index ranges implied by
/// [`first_grid`] and [`grid_count`].
pub fn select_grids(tile_shape: Extent, region_origin: Point, region_shape: Extent) -> Vec<GridRef> {
    let first = first_grid(tile_shape, region_origin);
    let (ny, nx) = grid_count(tile_shape, region_origin, region_shape);
    let mut grids = Vec::with_capacity((ny.max(0) * nx.max(0)) as usize);
    for dy in 0..ny {
        for dx in 0..nx {
            grids.push(GridRef::new(first.gy + dy, first.gx + dx));
        }
    }
    grids
}

/// The sub-rectangle of `grid`'s tile that intersects the region, in
/// tile-local coordinates: `(start, end)` such that
/// `0 <= start.y < end.y <= tile_shape.h` and likewise for `x`.
pub fn select_subregion(
    grid: GridRef,
    tile_shape: Extent,
    region_origin: Point,
    region_shape: Extent,
) -> (Point, Point) {
    let tile_start = Point::new(grid.gy * tile_shape.h, grid.gx * tile_shape.w);
    let tile_end = Point::new(tile_start.y + tile_shape.h, tile_start.x + tile_shape.w);
    let region_end = Point::new(
        region_origin.y + region_shape.h,
        region_origin.x + region_shape.w,
    );
    let start = Point::new(
        region_origin.y.max(tile_start.y) - tile_start.y,
        region_origin.x.max(tile_start.x) - tile_start.x,
    );
    let end = Point::new(
        tile_end.y.min(region_end.y) - tile_start.y,
        tile_end.x.min(region_end.x) - tile_start.x,
    );
    (start, end)
}

/// The output-local placement of `grid`'s contribution:
/// `max(origin, tile_start) - origin`.
pub fn select_position(grid: GridRef, tile_shape: Extent, region_origin: Point) -> Point {
    let tile_start = Point::new(grid.gy * tile_shape.h, grid.gx * tile_shape.w);
    Point::new(
        region_origin.y.max(tile_start.y) - region_origin.y,
        region_origin.x.max(tile_start.x) - region_origin.x,
    )
}

/// `true` iff `shape` is strictly positive, `origin` is non-negative, and
/// `origin + shape <= image_shape` componentwise.
pub fn validate_region(origin: Point, shape: Extent, image_shape: Extent) -> bool {
    if !shape.positive() {
        return false;
    }
    if origin.y < 0 || origin.x < 0 {
        return false;
    }
    origin.y + shape.h <= image_shape.h && origin.x + shape.w <= image_shape.w
}
