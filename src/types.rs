use std::path::PathBuf;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// A rectangular region in image coordinates.
///
/// Used both as an ignore region (masked out before comparison) and as a
/// panel placement when building the composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip this region to a canvas of the given dimensions. Returns `None`
    /// when the region lies entirely outside the canvas.
    pub fn clipped(&self, canvas_width: u32, canvas_height: u32) -> Option<Rect> {
        if self.x >= canvas_width || self.y >= canvas_height {
            return None;
        }
        let width = self.width.min(canvas_width - self.x);
        let height = self.height.min(canvas_height - self.y);
        if width == 0 || height == 0 {
            return None;
        }
        Some(Rect::new(self.x, self.y, width, height))
    }
}

/// Options consumed by the pixel comparator and diff renderer.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Per-pixel color difference threshold (0-255).
    pub color_threshold: u8,

    /// When true, the anti-aliasing detector is disabled and every pixel
    /// over the color threshold counts as a difference.
    pub ignore_antialiasing: bool,

    /// Regions masked out of both images before classification.
    pub ignore_regions: Vec<Rect>,

    /// Limit comparison to the top N pixel rows (0 = no limit).
    pub max_height: u32,

    /// Render the labeled three-panel composite instead of the flat diff.
    pub diff_overlay: bool,

    /// Outline font for panel labels; falls back to system fonts, then to
    /// the built-in bitmap face.
    pub label_font_path: Option<PathBuf>,

    /// Label font size in points.
    pub label_font_size: f32,

    pub baseline_label: String,
    pub diff_label: String,
    pub current_label: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            color_threshold: 10,
            ignore_antialiasing: false,
            ignore_regions: Vec::new(),
            max_height: 0,
            diff_overlay: true,
            label_font_path: None,
            label_font_size: 14.0,
            baseline_label: "baseline".to_string(),
            diff_label: "diff".to_string(),
            current_label: "current".to_string(),
        }
    }
}

/// Outcome of a single comparison call.
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub pixel_diff_count: u64,
    /// `pixel_diff_count / total_pixels`; 0 when `total_pixels` is 0.
    pub pixel_diff_ratio: f64,
    pub total_pixels: u64,
    pub diff_image: RgbaImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_documented_values() {
        let opts = CompareOptions::default();
        assert_eq!(opts.color_threshold, 10);
        assert!(!opts.ignore_antialiasing);
        assert!(opts.ignore_regions.is_empty());
        assert_eq!(opts.max_height, 0);
        assert!(opts.diff_overlay);
        assert!(opts.label_font_path.is_none());
        assert!((opts.label_font_size - 14.0).abs() < f32::EPSILON);
        assert_eq!(opts.baseline_label, "baseline");
        assert_eq!(opts.diff_label, "diff");
        assert_eq!(opts.current_label, "current");
    }

    #[test]
    fn rect_clips_to_canvas_bounds() {
        let rect = Rect::new(35, 35, 30, 30);
        assert_eq!(rect.clipped(100, 100), Some(Rect::new(35, 35, 30, 30)));
        assert_eq!(rect.clipped(50, 50), Some(Rect::new(35, 35, 15, 15)));
        assert_eq!(rect.clipped(35, 35), None);
        assert_eq!(rect.clipped(0, 0), None);
    }

    #[test]
    fn rect_deserializes_from_json_object() {
        let rect: Rect = serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#)
            .expect("parse rect");
        assert_eq!(rect, Rect::new(1, 2, 3, 4));
    }
}
