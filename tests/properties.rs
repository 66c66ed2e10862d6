//! Property tests that need more than one `render-core` module at once
//! (coverage-without-overlap across grid references). Properties that
//! belong to a single module are exercised as inline unit tests next to
//! the code they describe.

use render_core::geometry::{select_grids, select_position, select_subregion, Extent, Point};

// Coverage without overlap: the position rectangles of every grid
// reference covering a region must partition the output rectangle exactly.
#[test]
fn coverage_without_overlap_across_grids() {
    let tile_shape = Extent::new(37, 53); // deliberately not a divisor of the region
    let origin = Point::new(11, 5);
    let shape = Extent::new(200, 150);

    let mut covered = vec![false; (shape.h * shape.w) as usize];
    let mut total_area = 0i64;

    for grid in select_grids(tile_shape, origin, shape) {
        let (start, end) = select_subregion(grid, tile_shape, origin, shape);
        let pos = select_position(grid, tile_shape, origin);
        let h = end.y - start.y;
        let w = end.x - start.x;
        total_area += h * w;

        for dy in 0..h {
            for dx in 0..w {
                let out_y = pos.y + dy;
                let out_x = pos.x + dx;
                let idx = (out_y * shape.w + out_x) as usize;
                assert!(!covered[idx], "pixel ({out_y}, {out_x}) covered twice");
                covered[idx] = true;
            }
        }
    }

    assert_eq!(total_area, shape.h * shape.w);
    assert!(covered.iter().all(|&c| c), "every output pixel must be covered");
}
