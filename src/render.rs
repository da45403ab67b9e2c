//! Diff visualization: the red/faded overlay panel, the flat gray/red diff
//! image, and the labeled three-panel composite.

use image::{Rgba, RgbaImage};

use crate::font::{resolve_face, LabelFace};
use crate::types::CompareOptions;

const LABEL_BAR_BG: Rgba<u8> = Rgba([240, 240, 240, 255]);
const LABEL_BAR_BORDER: Rgba<u8> = Rgba([200, 200, 200, 255]);
const LABEL_TEXT: Rgba<u8> = Rgba([0, 0, 0, 255]);
const MIN_LABEL_BAR_HEIGHT: u32 = 24;

/// Build the center diff panel: the baseline faded toward white
/// (`c' = c/2 + 128`) with a muted red marker on differing pixels.
///
/// The fade transform and the per-pixel distance rule are fixed so diff
/// artifacts stay comparable across runs and platforms.
pub fn render_overlay(baseline: &RgbaImage, current: &RgbaImage, threshold: f64) -> RgbaImage {
    let (width, height) = baseline.dimensions();
    let mut overlay = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let b = baseline.get_pixel(x, y);
            let c = current.get_pixel(x, y);

            let diff = (channel_diff(b[0], c[0]) + channel_diff(b[1], c[1])
                + channel_diff(b[2], c[2]))
                / 3.0;

            let faded_r = b[0] / 2 + 128;
            let faded_g = b[1] / 2 + 128;
            let faded_b = b[2] / 2 + 128;

            let px = if diff > threshold {
                // Red marker, keeping a hint of the underlying structure.
                Rgba([255, faded_g / 2, faded_b / 2, 255])
            } else {
                Rgba([faded_r, faded_g, faded_b, 255])
            };
            overlay.put_pixel(x, y, px);
        }
    }

    overlay
}

/// Build a flat diff image: differing pixels solid red, matching pixels
/// rendered as the baseline's gray luminance. The distance here includes
/// the alpha channel.
pub fn render_flat_diff(baseline: &RgbaImage, current: &RgbaImage, threshold: f64) -> RgbaImage {
    let (width, height) = baseline.dimensions();
    let mut diff = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let b = baseline.get_pixel(x, y);
            let c = current.get_pixel(x, y);

            let delta = (channel_diff(b[0], c[0])
                + channel_diff(b[1], c[1])
                + channel_diff(b[2], c[2])
                + channel_diff(b[3], c[3]))
                / 4.0;

            let px = if delta > threshold {
                Rgba([255, 0, 0, 255])
            } else {
                let gray = ((u16::from(b[0]) + u16::from(b[1]) + u16::from(b[2])) / 3) as u8;
                Rgba([gray, gray, gray, 255])
            };
            diff.put_pixel(x, y, px);
        }
    }

    diff
}

/// Build the side-by-side composite: baseline | diff overlay | current,
/// with a labeled bar above the panels.
pub fn render_composite(
    baseline: &RgbaImage,
    current: &RgbaImage,
    threshold: f64,
    opts: &CompareOptions,
) -> RgbaImage {
    let overlay = render_overlay(baseline, current, threshold);
    let labels = [
        opts.baseline_label.as_str(),
        opts.diff_label.as_str(),
        opts.current_label.as_str(),
    ];
    let face = resolve_face(opts.label_font_path.as_deref(), opts.label_font_size);
    compose_panels(baseline, &overlay, current, &labels, &face, opts.label_font_size)
}

fn compose_panels(
    baseline: &RgbaImage,
    overlay: &RgbaImage,
    current: &RgbaImage,
    labels: &[&str; 3],
    face: &LabelFace,
    font_size: f32,
) -> RgbaImage {
    let (width, height) = baseline.dimensions();
    let label_height = label_bar_height(font_size);

    let mut composite = RgbaImage::new(width * 3, height + label_height);

    for y in 0..label_height {
        for x in 0..width * 3 {
            composite.put_pixel(x, y, LABEL_BAR_BG);
        }
    }

    for (i, label) in labels.iter().enumerate() {
        draw_centered_text(
            &mut composite,
            label,
            i as u32 * width,
            0,
            width,
            label_height,
            face,
        );
    }

    // 1px separator between the label bar and the panels.
    if label_height > 0 {
        for x in 0..width * 3 {
            composite.put_pixel(x, label_height - 1, LABEL_BAR_BORDER);
        }
    }

    copy_panel(&mut composite, baseline, 0, label_height);
    copy_panel(&mut composite, overlay, width, label_height);
    copy_panel(&mut composite, current, width * 2, label_height);

    composite
}

fn label_bar_height(font_size: f32) -> u32 {
    if font_size > 14.0 {
        font_size as u32 + 10
    } else {
        MIN_LABEL_BAR_HEIGHT
    }
}

fn copy_panel(composite: &mut RgbaImage, panel: &RgbaImage, offset_x: u32, offset_y: u32) {
    for y in 0..panel.height() {
        for x in 0..panel.width() {
            composite.put_pixel(offset_x + x, offset_y + y, *panel.get_pixel(x, y));
        }
    }
}

/// Draw text centered in the given bar segment. Vertical centering uses the
/// face's ascent/descent, not just the bounding box height.
fn draw_centered_text(
    img: &mut RgbaImage,
    text: &str,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    face: &LabelFace,
) {
    let text_width = face.measure(text);
    let text_height = face.ascent() + face.descent();

    let pos_x = x as f32 + (width as f32 - text_width) / 2.0;
    let baseline_y = y as f32 + (height as f32 + text_height) / 2.0 - face.descent();

    face.draw(img, text, pos_x, baseline_y, LABEL_TEXT);
}

fn channel_diff(a: u8, b: u8) -> f64 {
    (f64::from(a) - f64::from(b)).abs() / 255.0
}
