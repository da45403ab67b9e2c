//! Pixel classification primitive.
//!
//! Per-pixel color distance in a perceptually weighted YIQ space, with an
//! 8-neighbor anti-aliasing detector. This is the matching algorithm the
//! comparator runs over already-normalized canvases; thresholds are
//! normalized to the 0-1 range before entering this module.

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Largest possible YIQ delta between two opaque colors (black vs white).
const MAX_YIQ_DELTA: f64 = 35215.0;

#[derive(Debug, Error)]
pub enum PixelmatchError {
    #[error("image dimensions do not match: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(u32, u32, u32, u32),
}

/// Count pixels whose weighted color distance exceeds `threshold` (0-1).
///
/// When `detect_antialiasing` is set, pixels that look like anti-aliased
/// edges (brightness-consistent with a neighbor run in either image) are
/// excluded from the count even if they exceed the threshold.
pub fn count_diff_pixels(
    baseline: &RgbaImage,
    current: &RgbaImage,
    threshold: f64,
    detect_antialiasing: bool,
) -> Result<u64, PixelmatchError> {
    let (width, height) = baseline.dimensions();
    let (cur_width, cur_height) = current.dimensions();
    if (width, height) != (cur_width, cur_height) {
        return Err(PixelmatchError::DimensionMismatch(
            width, height, cur_width, cur_height,
        ));
    }

    let max_delta = MAX_YIQ_DELTA * threshold * threshold;
    let mut diff_count = 0u64;

    for y in 0..height {
        for x in 0..width {
            let delta =
                color_delta(*baseline.get_pixel(x, y), *current.get_pixel(x, y), false).abs();
            if delta <= max_delta {
                continue;
            }
            if detect_antialiasing
                && (antialiased(baseline, x, y, current) || antialiased(current, x, y, baseline))
            {
                continue;
            }
            diff_count += 1;
        }
    }

    Ok(diff_count)
}

/// Weighted YIQ distance between two RGBA pixels. Semi-transparent pixels
/// are blended onto white first. With `y_only` the signed brightness delta
/// is returned instead of the full distance.
fn color_delta(a: Rgba<u8>, b: Rgba<u8>, y_only: bool) -> f64 {
    if a == b {
        return 0.0;
    }

    let (r1, g1, b1) = blend_to_white(a);
    let (r2, g2, b2) = blend_to_white(b);

    let y1 = rgb2y(r1, g1, b1);
    let y2 = rgb2y(r2, g2, b2);
    let dy = y1 - y2;
    if y_only {
        return dy;
    }

    let di = rgb2i(r1, g1, b1) - rgb2i(r2, g2, b2);
    let dq = rgb2q(r1, g1, b1) - rgb2q(r2, g2, b2);

    0.5053 * dy * dy + 0.299 * di * di + 0.1957 * dq * dq
}

fn blend_to_white(px: Rgba<u8>) -> (f64, f64, f64) {
    let alpha = px[3] as f64 / 255.0;
    if alpha >= 1.0 {
        return (px[0] as f64, px[1] as f64, px[2] as f64);
    }
    let blend = |c: u8| 255.0 + (c as f64 - 255.0) * alpha;
    (blend(px[0]), blend(px[1]), blend(px[2]))
}

fn rgb2y(r: f64, g: f64, b: f64) -> f64 {
    r * 0.298_895_31 + g * 0.586_622_47 + b * 0.114_482_23
}

fn rgb2i(r: f64, g: f64, b: f64) -> f64 {
    r * 0.595_977_99 - g * 0.274_176_10 - b * 0.321_801_89
}

fn rgb2q(r: f64, g: f64, b: f64) -> f64 {
    r * 0.211_470_17 - g * 0.522_617_11 + b * 0.311_146_94
}

/// Whether the pixel at (x, y) looks like part of an anti-aliased edge:
/// among its 8 neighbors, at most two share its brightness, and the
/// darkest or brightest neighbor sits inside a flat run in both images.
fn antialiased(img: &RgbaImage, x: u32, y: u32, other: &RgbaImage) -> bool {
    let (width, height) = img.dimensions();
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x2 = (x + 1).min(width - 1);
    let y2 = (y + 1).min(height - 1);

    // A pixel on the canvas edge is short one or more neighbors; count
    // that as an identical neighbor the way a flat border would.
    let mut zeroes = u32::from(x == x0 || x == x2 || y == y0 || y == y2);
    let center = *img.get_pixel(x, y);

    let mut min = 0.0f64;
    let mut max = 0.0f64;
    let (mut min_x, mut min_y) = (0u32, 0u32);
    let (mut max_x, mut max_y) = (0u32, 0u32);

    for ny in y0..=y2 {
        for nx in x0..=x2 {
            if nx == x && ny == y {
                continue;
            }
            let delta = color_delta(center, *img.get_pixel(nx, ny), true);
            if delta == 0.0 {
                zeroes += 1;
                if zeroes > 2 {
                    return false;
                }
            } else if delta < min {
                min = delta;
                min_x = nx;
                min_y = ny;
            } else if delta > max {
                max = delta;
                max_x = nx;
                max_y = ny;
            }
        }
    }

    // No darker or no brighter neighbor means this is not an edge.
    if min == 0.0 || max == 0.0 {
        return false;
    }

    (has_many_siblings(img, min_x, min_y) && has_many_siblings(other, min_x, min_y))
        || (has_many_siblings(img, max_x, max_y) && has_many_siblings(other, max_x, max_y))
}

/// Whether the pixel has more than two identically colored neighbors.
fn has_many_siblings(img: &RgbaImage, x: u32, y: u32) -> bool {
    let (width, height) = img.dimensions();
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x2 = (x + 1).min(width - 1);
    let y2 = (y + 1).min(height - 1);

    let mut zeroes = u32::from(x == x0 || x == x2 || y == y0 || y == y2);
    let center = img.get_pixel(x, y);

    for ny in y0..=y2 {
        for nx in x0..=x2 {
            if nx == x && ny == y {
                continue;
            }
            if img.get_pixel(nx, ny) == center {
                zeroes += 1;
                if zeroes > 2 {
                    return true;
                }
            }
        }
    }

    false
}
