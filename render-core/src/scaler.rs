// SPDX-License-Identifier: MIT
//! # Nearest-neighbor region scaling
//!
//! Resamples an already-composited image to a different pixel size.
//! Nearest-neighbor keeps the pipeline free of any interpolation kernel:
//! each destination pixel copies its nearest source pixel rather than
//! blending between neighbors.

use crate::error::RenderError;
use crate::geometry::Extent;

/// Map one destination coordinate back to a source coordinate by rounding a
/// point on the line from `0` to `src_len - 1` sampled at `out_len` evenly
/// spaced positions: `round(out_coord * (src_len - 1) / (out_len - 1))`.
/// A single-pixel destination axis always maps to source index `0`.
#[inline]
fn nearest_index(out_coord: i64, out_len: i64, src_len: i64) -> i64 {
    if out_len <= 1 {
        return 0;
    }
    let src_lim = (src_len - 1) as f64;
    let out_lim = (out_len - 1) as f64;
    ((out_coord as f64) * src_lim / out_lim).round() as i64
}

/// Resample a row-major `(h, w, channels)` buffer to `out_shape` via
/// nearest-neighbor sampling.
pub fn scale(
    src: &[f32],
    src_shape: Extent,
    channels: usize,
    out_shape: Extent,
) -> Result<Vec<f32>, RenderError> {
    if out_shape.h <= 0 || out_shape.w <= 0 {
        return Err(RenderError::InvalidScale);
    }
    if src_shape.h <= 0 || src_shape.w <= 0 {
        return Err(RenderError::InvalidRegion);
    }
    debug_assert_eq!(src.len(), (src_shape.h * src_shape.w) as usize * channels);

    let mut out = vec![0.0f32; (out_shape.h * out_shape.w) as usize * channels];
    for oy in 0..out_shape.h {
        let sy = nearest_index(oy, out_shape.h, src_shape.h);
        for ox in 0..out_shape.w {
            let sx = nearest_index(ox, out_shape.w, src_shape.w);
            let src_base = ((sy * src_shape.w + sx) as usize) * channels;
            let dst_base = ((oy * out_shape.w + ox) as usize) * channels;
            out[dst_base..dst_base + channels]
                .copy_from_slice(&src[src_base..src_base + channels]);
        }
    }
    Ok(out)
}

/// Resample by a uniform positive factor, rounding the resulting shape to
/// the nearest integer. Returns the scaled buffer and its new shape.
pub fn scale_by_factor(
    src: &[f32],
    src_shape: Extent,
    channels: usize,
    factor: f64,
) -> Result<(Vec<f32>, Extent), RenderError> {
    if !(factor > 0.0) {
        return Err(RenderError::InvalidScale);
    }
    let out_shape = Extent::new(
        ((src_shape.h as f64) * factor).round().max(1.0) as i64,
        ((src_shape.w as f64) * factor).round().max(1.0) as i64,
    );
    let out = scale(src, src_shape, channels, out_shape)?;
    Ok((out, out_shape))
}
