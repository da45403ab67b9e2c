use std::fs;
use std::path::Path;

use image::{ImageError, RgbaImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] ImageError),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Load an image from disk as an RGBA buffer.
pub fn load_image(path: &Path) -> Result<RgbaImage, ImageIoError> {
    if !path.exists() {
        return Err(ImageIoError::NotFound(path.display().to_string()));
    }
    Ok(image::open(path)?.to_rgba8())
}

/// Save an image to disk, creating parent directories as needed. The format
/// is chosen from the file extension (PNG for diff artifacts).
pub fn save_image(path: &Path, img: &RgbaImage) -> Result<(), ImageIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ImageIoError::Encode(e.to_string()))?;
        }
    }
    img.save(path).map_err(|e| ImageIoError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_file_reports_not_found() {
        let result = load_image(Path::new("/nonexistent/path/image.png"));
        assert!(matches!(result.unwrap_err(), ImageIoError::NotFound(_)));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("out").join("diff.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));

        save_image(&path, &img).expect("save image");
        assert!(path.exists());
    }

    #[test]
    fn round_trips_pixel_content() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("probe.png");
        let img = RgbaImage::from_pixel(3, 2, Rgba([12, 34, 56, 255]));

        save_image(&path, &img).expect("save image");
        let loaded = load_image(&path).expect("load image");
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1), &Rgba([12, 34, 56, 255]));
    }
}
