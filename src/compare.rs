//! Image comparison: dimension normalization, exclusion masking, and pixel
//! classification producing a [`CompareResult`].

use image::{Rgba, RgbaImage};

use crate::pixelmatch::count_diff_pixels;
use crate::render::{render_composite, render_flat_diff};
use crate::types::{CompareOptions, CompareResult, Rect};
use crate::{Result, VrshotError};

/// Fill color for canvas areas that exist in only one of the two images.
/// Solid magenta makes size mismatches visually obvious in the diff.
pub const CANVAS_FILL: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Fill color for masked ignore regions, applied to both images so masked
/// pixels never contribute to the diff count.
pub const MASK_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Compare two images and build the diff artifact.
///
/// Both images are expanded onto canvases of the larger dimensions (padded
/// with [`CANVAS_FILL`]), ignore regions are masked in both, and each pixel
/// is classified under the color threshold. The diff image is either the
/// labeled three-panel composite (`diff_overlay`) or a flat gray/red diff.
pub fn compare(
    baseline: &RgbaImage,
    current: &RgbaImage,
    opts: &CompareOptions,
) -> Result<CompareResult> {
    let width = baseline.width().max(current.width());
    let mut height = baseline.height().max(current.height());
    if opts.max_height > 0 {
        height = height.min(opts.max_height);
    }
    let total_pixels = u64::from(width) * u64::from(height);

    let mut baseline = normalize_canvas(baseline, width, height);
    let mut current = normalize_canvas(current, width, height);

    for region in &opts.ignore_regions {
        apply_mask(&mut baseline, region);
        apply_mask(&mut current, region);
    }

    let color_threshold = if opts.color_threshold == 0 {
        CompareOptions::default().color_threshold
    } else {
        opts.color_threshold
    };
    let threshold = f64::from(color_threshold) / 255.0;

    // Anti-aliased edge pixels are filtered out unless the caller asked to
    // count them; the detector is active when the flag is off.
    let detect_antialiasing = !opts.ignore_antialiasing;
    let pixel_diff_count = count_diff_pixels(&baseline, &current, threshold, detect_antialiasing)
        .map_err(|e| VrshotError::comparison(e.to_string()))?;

    let pixel_diff_ratio = if total_pixels == 0 {
        0.0
    } else {
        pixel_diff_count as f64 / total_pixels as f64
    };

    let diff_image = if opts.diff_overlay {
        render_composite(&baseline, &current, threshold, opts)
    } else {
        render_flat_diff(&baseline, &current, threshold)
    };

    Ok(CompareResult {
        pixel_diff_count,
        pixel_diff_ratio,
        total_pixels,
        diff_image,
    })
}

/// Copy `img` onto a new width x height canvas filled with [`CANVAS_FILL`];
/// content outside the canvas is clipped (maxHeight limiting).
fn normalize_canvas(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, CANVAS_FILL);
    let copy_width = img.width().min(width);
    let copy_height = img.height().min(height);
    for y in 0..copy_height {
        for x in 0..copy_width {
            canvas.put_pixel(x, y, *img.get_pixel(x, y));
        }
    }
    canvas
}

fn apply_mask(img: &mut RgbaImage, region: &Rect) {
    let Some(clipped) = region.clipped(img.width(), img.height()) else {
        return;
    };
    for y in clipped.y..clipped.y + clipped.height {
        for x in clipped.x..clipped.x + clipped.width {
            img.put_pixel(x, y, MASK_FILL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    fn flat_opts() -> CompareOptions {
        CompareOptions {
            diff_overlay: false,
            ..CompareOptions::default()
        }
    }

    #[test]
    fn identical_images_yield_zero_ratio() {
        let img = solid(100, 100, [180, 30, 30, 255]);
        let result = compare(&img, &img.clone(), &flat_opts()).expect("compare");
        assert_eq!(result.pixel_diff_count, 0);
        assert_eq!(result.total_pixels, 10_000);
        assert_eq!(result.pixel_diff_ratio, 0.0);
    }

    #[test]
    fn fully_different_images_yield_ratio_one() {
        let red = solid(100, 100, [255, 0, 0, 255]);
        let green = solid(100, 100, [0, 255, 0, 255]);
        let result = compare(&red, &green, &flat_opts()).expect("compare");
        assert_eq!(result.pixel_diff_count, 10_000);
        assert!((result.pixel_diff_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_equals_count_over_total() {
        let base = solid(50, 40, [255, 255, 255, 255]);
        let mut changed = base.clone();
        for y in 0..10 {
            for x in 0..10 {
                changed.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let result = compare(&base, &changed, &flat_opts()).expect("compare");
        assert_eq!(result.total_pixels, 2_000);
        let expected = result.pixel_diff_count as f64 / result.total_pixels as f64;
        assert!((result.pixel_diff_ratio - expected).abs() < 1e-12);
        assert!(result.pixel_diff_ratio > 0.0 && result.pixel_diff_ratio <= 1.0);
    }

    #[test]
    fn changed_block_counts_without_mask_and_not_with_mask() {
        let base = solid(100, 100, [255, 255, 255, 255]);
        let mut changed = base.clone();
        for y in 40..60 {
            for x in 40..60 {
                changed.put_pixel(x, y, Rgba([10, 10, 200, 255]));
            }
        }

        let unmasked = compare(&base, &changed, &flat_opts()).expect("compare");
        assert_eq!(unmasked.pixel_diff_count, 400);

        let masked_opts = CompareOptions {
            ignore_regions: vec![Rect::new(35, 35, 30, 30)],
            ..flat_opts()
        };
        let masked = compare(&base, &changed, &masked_opts).expect("compare");
        assert_eq!(masked.pixel_diff_count, 0);
    }

    #[test]
    fn mask_covering_every_difference_zeroes_the_count() {
        let red = solid(20, 20, [255, 0, 0, 255]);
        let green = solid(20, 20, [0, 255, 0, 255]);
        let opts = CompareOptions {
            ignore_regions: vec![Rect::new(0, 0, 20, 20)],
            ..flat_opts()
        };
        let result = compare(&red, &green, &opts).expect("compare");
        assert_eq!(result.pixel_diff_count, 0);
    }

    #[test]
    fn size_mismatch_uses_larger_dimensions_and_flags_padding() {
        // 30x20 vs 30x26: the six padded rows compare magenta against
        // white and register as differences.
        let small = solid(30, 20, [255, 255, 255, 255]);
        let tall = solid(30, 26, [255, 255, 255, 255]);
        let result = compare(&small, &tall, &flat_opts()).expect("compare");
        assert_eq!(result.total_pixels, 30 * 26);
        assert_eq!(result.pixel_diff_count, 30 * 6);

        // Masking the padded band removes the mismatch.
        let opts = CompareOptions {
            ignore_regions: vec![Rect::new(0, 20, 30, 6)],
            ..flat_opts()
        };
        let masked = compare(&small, &tall, &opts).expect("compare");
        assert_eq!(masked.pixel_diff_count, 0);
    }

    #[test]
    fn max_height_clamps_the_compared_area() {
        let base = solid(10, 50, [255, 255, 255, 255]);
        let mut changed = base.clone();
        // Change only the bottom rows, below the clamp.
        for y in 40..50 {
            for x in 0..10 {
                changed.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let opts = CompareOptions {
            max_height: 30,
            ..flat_opts()
        };
        let result = compare(&base, &changed, &opts).expect("compare");
        assert_eq!(result.total_pixels, 300);
        assert_eq!(result.pixel_diff_count, 0);
        assert_eq!(result.diff_image.dimensions(), (10, 30));
    }

    #[test]
    fn zero_sized_inputs_define_ratio_as_zero() {
        let empty = RgbaImage::new(0, 0);
        let result = compare(&empty, &empty.clone(), &flat_opts()).expect("compare");
        assert_eq!(result.total_pixels, 0);
        assert_eq!(result.pixel_diff_count, 0);
        assert_eq!(result.pixel_diff_ratio, 0.0);
        assert_eq!(result.diff_image.dimensions(), (0, 0));
    }

    #[test]
    fn zero_color_threshold_falls_back_to_default() {
        // Threshold 0 would otherwise flag sub-perceptual noise.
        let base = solid(10, 10, [100, 100, 100, 255]);
        let near = solid(10, 10, [101, 100, 100, 255]);
        let opts = CompareOptions {
            color_threshold: 0,
            ..flat_opts()
        };
        let result = compare(&base, &near, &opts).expect("compare");
        assert_eq!(result.pixel_diff_count, 0);
    }

    #[test]
    fn overlay_mode_produces_three_panel_composite() {
        let base = solid(40, 30, [255, 255, 255, 255]);
        let result = compare(&base, &base.clone(), &CompareOptions::default()).expect("compare");
        // Three panels wide, one 24px label bar tall at the default size.
        assert_eq!(result.diff_image.dimensions(), (120, 54));
    }
}
