//! Label face resolution: explicit font path, system font search, then the
//! built-in bitmap face. Resolution never fails; the renderer can always
//! draw labels, possibly with reduced glyph coverage.

mod builtin;
mod catalog;

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use walkdir::WalkDir;

pub use builtin::BuiltinFace;
pub use catalog::{candidate_files, default_faces, font_dirs};

pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A drawable face for panel labels.
pub enum LabelFace {
    Outline(OutlineFace),
    Bitmap(BuiltinFace),
}

impl LabelFace {
    /// Advance width of `text` in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        match self {
            LabelFace::Outline(face) => face.measure(text),
            LabelFace::Bitmap(face) => face.measure(text),
        }
    }

    pub fn ascent(&self) -> f32 {
        match self {
            LabelFace::Outline(face) => face.ascent(),
            LabelFace::Bitmap(face) => face.ascent(),
        }
    }

    /// Distance from baseline to the lowest glyph extent, as a positive
    /// value.
    pub fn descent(&self) -> f32 {
        match self {
            LabelFace::Outline(face) => face.descent(),
            LabelFace::Bitmap(face) => face.descent(),
        }
    }

    pub fn draw(&self, img: &mut RgbaImage, text: &str, x: f32, baseline_y: f32, color: Rgba<u8>) {
        match self {
            LabelFace::Outline(face) => face.draw(img, text, x, baseline_y, color),
            LabelFace::Bitmap(face) => face.draw(img, text, x, baseline_y, color),
        }
    }
}

/// An outline font scaled to a fixed pixel size.
pub struct OutlineFace {
    font: FontVec,
    scale: PxScale,
}

impl OutlineFace {
    fn measure(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut last: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = last {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            last = Some(id);
        }
        width
    }

    fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }

    fn descent(&self) -> f32 {
        -self.font.as_scaled(self.scale).descent()
    }

    fn draw(&self, img: &mut RgbaImage, text: &str, x: f32, baseline_y: f32, color: Rgba<u8>) {
        let scaled = self.font.as_scaled(self.scale);
        let (img_w, img_h) = img.dimensions();
        let mut caret = x;
        let mut last: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = last {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline_y));
            caret += scaled.h_advance(id);
            last = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    if coverage <= 0.0 {
                        return;
                    }
                    let px = bounds.min.x as i32 + gx as i32;
                    let py = bounds.min.y as i32 + gy as i32;
                    if px < 0 || py < 0 || px as u32 >= img_w || py as u32 >= img_h {
                        return;
                    }
                    let dst = img.get_pixel_mut(px as u32, py as u32);
                    *dst = blend(*dst, color, coverage.min(1.0));
                });
            }
        }
    }
}

fn blend(bg: Rgba<u8>, fg: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let mix =
        |b: u8, f: u8| (f32::from(b) * (1.0 - coverage) + f32::from(f) * coverage).round() as u8;
    Rgba([
        mix(bg[0], fg[0]),
        mix(bg[1], fg[1]),
        mix(bg[2], fg[2]),
        255,
    ])
}

/// A face-provisioning strategy. Providers are tried in a fixed order and
/// the last one (the built-in bitmap face) always succeeds.
pub trait FaceProvider {
    fn provide(&self, size: f32) -> Option<LabelFace>;
}

/// Strategy 1: a font file named explicitly by the caller.
pub struct ExplicitPathProvider<'a> {
    pub path: Option<&'a Path>,
}

impl FaceProvider for ExplicitPathProvider<'_> {
    fn provide(&self, size: f32) -> Option<LabelFace> {
        let path = self.path?;
        load_outline_face(path, size).map(LabelFace::Outline)
    }
}

/// Strategy 2: known faces searched across platform font directories.
pub struct SystemFontProvider;

impl FaceProvider for SystemFontProvider {
    fn provide(&self, size: f32) -> Option<LabelFace> {
        let path = resolve_font_path(default_faces())?;
        load_outline_face(&path, size).map(LabelFace::Outline)
    }
}

/// Strategy 3: the built-in bitmap face. Never fails.
pub struct BuiltinFaceProvider;

impl FaceProvider for BuiltinFaceProvider {
    fn provide(&self, _size: f32) -> Option<LabelFace> {
        Some(LabelFace::Bitmap(BuiltinFace))
    }
}

/// Resolve a drawable face: explicit path, then system search, then the
/// built-in fallback. A size of zero or less is coerced to the default.
pub fn resolve_face(explicit_path: Option<&Path>, size: f32) -> LabelFace {
    let size = if size <= 0.0 { DEFAULT_FONT_SIZE } else { size };

    let explicit = ExplicitPathProvider {
        path: explicit_path,
    };
    let providers: [&dyn FaceProvider; 3] =
        [&explicit, &SystemFontProvider, &BuiltinFaceProvider];

    for provider in providers {
        if let Some(face) = provider.provide(size) {
            return face;
        }
    }

    LabelFace::Bitmap(BuiltinFace)
}

/// Parse a font file as a single face, or as a collection using its first
/// entry. Any read or parse failure yields `None`.
fn load_outline_face(path: &Path, size: f32) -> Option<OutlineFace> {
    let data = fs::read(path).ok()?;
    let font = FontVec::try_from_vec(data.clone())
        .or_else(|_| FontVec::try_from_vec_and_index(data, 0))
        .ok()?;
    Some(OutlineFace {
        font,
        scale: PxScale::from(size),
    })
}

/// Find the first font file matching any of the given face names in the
/// platform font directories. Direct paths are tried before a recursive,
/// case-insensitive walk; the walk stops on the first hit and treats
/// unreadable directories as "not found".
pub fn resolve_font_path(faces: &[&str]) -> Option<PathBuf> {
    let dirs = font_dirs();
    if dirs.is_empty() {
        return None;
    }

    for face in faces {
        let file_names = candidate_files(face);
        if file_names.is_empty() {
            continue;
        }

        for dir in &dirs {
            for file_name in file_names {
                let direct = dir.join(file_name);
                if direct.is_file() {
                    return Some(direct);
                }

                if let Some(found) = search_font_file(dir, file_name) {
                    return Some(found);
                }
            }
        }
    }

    None
}

fn search_font_file(dir: &Path, target: &str) -> Option<PathBuf> {
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .eq_ignore_ascii_case(target)
        {
            return Some(entry.into_path());
        }
    }
    None
}
