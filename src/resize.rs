//! Resize an arbitrary source image into the required icon dimensions.

use crate::{Canvas, Emitted, ExportOptions, Rgba, write_png};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// File names and pixel sizes an icon update produces
pub const RESIZE_OUTPUTS: &[(&str, usize)] = &[
    ("icon.png", 1024),
    ("adaptive-icon.png", 1024),
    ("favicon.png", 48),
];

#[derive(Debug)]
pub enum ResizeError {
    /// The source path does not exist
    MissingSource(PathBuf),
    /// The source exists but cannot be decoded
    Decode(image::ImageError),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::MissingSource(path) => {
                write!(f, "source image not found: {}", path.display())
            }
            ResizeError::Decode(error) => write!(f, "failed to decode source image: {}", error),
        }
    }
}

impl std::error::Error for ResizeError {}

impl From<image::ImageError> for ResizeError {
    fn from(error: image::ImageError) -> Self {
        ResizeError::Decode(error)
    }
}

/// Decode the source image. Missing or undecodable sources are fatal for
/// the whole update, nothing is emitted.
pub fn open_source(path: &Path) -> Result<image::DynamicImage, ResizeError> {
    if !path.exists() {
        return Err(ResizeError::MissingSource(path.to_path_buf()));
    }
    Ok(image::open(path)?)
}

/// Resample the source to exactly `size` by `size` pixels.
///
/// The aspect ratio is intentionally not preserved: icon slots are square
/// and the output dimensions always match the request.
pub fn resize_to(source: &image::DynamicImage, size: usize) -> Canvas {
    let resized = source
        .resize_exact(size as u32, size as u32, image::imageops::FilterType::Lanczos3)
        .to_rgba8();
    Canvas::new_with(size, size, |row, col| {
        let pixel = resized.get_pixel(col as u32, row as u32);
        Rgba::new(pixel[0], pixel[1], pixel[2], pixel[3])
    })
}

/// Emit the full resized icon set into `dir`. Per-file failures are
/// recorded and do not stop the remaining outputs.
pub fn update_icons(source: &image::DynamicImage, dir: &Path) -> Vec<Emitted> {
    RESIZE_OUTPUTS
        .iter()
        .map(|(name, size)| {
            let canvas = resize_to(source, *size);
            let path = dir.join(name);
            let result = write_png(&canvas, &path, ExportOptions { optimize: true });
            Emitted {
                path,
                size: *size,
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Image;
    use std::path::PathBuf;

    fn checker_source(width: u32, height: u32) -> image::DynamicImage {
        let buffer = image::RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        });
        image::DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn test_exact_dimensions_regardless_of_source() {
        for (width, height) in [(10, 10), (300, 100), (17, 1000)] {
            let source = checker_source(width, height);
            let canvas = resize_to(&source, 64);
            assert_eq!(canvas.width(), 64);
            assert_eq!(canvas.height(), 64);
        }
    }

    #[test]
    fn test_solid_source_stays_solid() {
        let buffer = image::RgbaImage::from_pixel(33, 7, image::Rgba([10, 200, 30, 255]));
        let source = image::DynamicImage::ImageRgba8(buffer);
        let canvas = resize_to(&source, 16);
        assert!(canvas
            .iter()
            .all(|px| *px == Rgba::new(10, 200, 30, 255)));
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let path = PathBuf::from("/no/such/source-image.png");
        match open_source(&path) {
            Err(ResizeError::MissingSource(reported)) => assert_eq!(reported, path),
            other => panic!("expected missing source error, got {:?}", other.map(|_| ())),
        }
    }
}
