//! Built-in fixed-width bitmap face: 5x7 pixel glyphs with no external
//! data, the guaranteed last resort for label rendering. Coverage is
//! ASCII-oriented; lowercase folds to uppercase, unknown characters render
//! as a box.

use image::{Rgba, RgbaImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Glyph width plus 1px spacing.
pub const ADVANCE: u32 = 6;
/// Rows reserved below the baseline (comma/period tails).
pub const DESCENT: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFace;

impl BuiltinFace {
    pub fn ascent(&self) -> f32 {
        GLYPH_HEIGHT as f32
    }

    pub fn descent(&self) -> f32 {
        DESCENT as f32
    }

    pub fn measure(&self, text: &str) -> f32 {
        (text.chars().count() as u32 * ADVANCE) as f32
    }

    /// Draw `text` with its baseline at `baseline_y`. Pixels outside the
    /// image are skipped.
    pub fn draw(&self, img: &mut RgbaImage, text: &str, x: f32, baseline_y: f32, color: Rgba<u8>) {
        let (img_w, img_h) = img.dimensions();
        let top = baseline_y - GLYPH_HEIGHT as f32;
        let mut cursor = x;

        for c in text.chars() {
            let pattern = glyph_pattern(c);
            for (row, &bits) in pattern.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let px = cursor + col as f32;
                    let py = top + row as f32;
                    if px >= 0.0 && py >= 0.0 && (px as u32) < img_w && (py as u32) < img_h {
                        img.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
            cursor += ADVANCE as f32;
        }
    }
}

/// 5-wide bitmask rows for one glyph, top to bottom.
fn glyph_pattern(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        ' ' => [0b00000; 7],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100],
        ':' => [0b00000, 0b00110, 0b00110, 0b00000, 0b00110, 0b00110, 0b00000],
        ';' => [0b00000, 0b00110, 0b00110, 0b00000, 0b00110, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '%' => [0b11001, 0b11010, 0b00100, 0b00100, 0b01000, 0b01011, 0b10011],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '[' => [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        // Box for unmapped characters.
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_is_fixed_width() {
        let face = BuiltinFace;
        assert_eq!(face.measure("diff") as u32, 4 * ADVANCE);
        assert_eq!(face.measure("") as u32, 0);
    }

    #[test]
    fn draw_stays_inside_image_bounds() {
        let face = BuiltinFace;
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        // Baseline beyond the right/bottom edges must not panic.
        face.draw(&mut img, "WWWW", 4.0, 12.0, Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn draw_leaves_ink_for_known_glyphs() {
        let face = BuiltinFace;
        let mut img = RgbaImage::from_pixel(40, 12, Rgba([255, 255, 255, 255]));
        face.draw(&mut img, "OK", 2.0, 9.0, Rgba([0, 0, 0, 255]));
        let dark = img.pixels().filter(|px| px[0] == 0).count();
        assert!(dark > 10, "expected glyph pixels, got {dark}");
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        assert_eq!(glyph_pattern('a'), glyph_pattern('A'));
        assert_eq!(glyph_pattern('z'), glyph_pattern('Z'));
    }
}
