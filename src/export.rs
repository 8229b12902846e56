use crate::{Color, Image, Rgba};
use std::{
    fmt, fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Encode(png::EncodingError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(error) => write!(f, "failed to write image: {}", error),
            ExportError::Encode(error) => write!(f, "failed to encode PNG: {}", error),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::Io(error)
    }
}

impl From<png::EncodingError> for ExportError {
    fn from(error: png::EncodingError) -> Self {
        ExportError::Encode(error)
    }
}

/// PNG encoding knobs
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Spend more time compressing (best compression, adaptive filtering)
    pub optimize: bool,
}

/// Result of emitting one file of a batch
#[derive(Debug)]
pub struct Emitted {
    pub path: PathBuf,
    pub size: usize,
    pub result: Result<(), ExportError>,
}

/// Serialize the canvas as an RGBA PNG at `path`.
///
/// The encoding goes to a sibling temp file which is renamed over `path`
/// once complete, so a failed write never leaves a partial file behind.
pub fn write_png(
    img: &impl Image<Pixel = Rgba>,
    path: &Path,
    options: ExportOptions,
) -> Result<(), ExportError> {
    let span = tracing::debug_span!("[save]", path = %path.display());
    let _guard = span.enter();

    let tmp = tmp_path(path);
    match encode_to(img, &tmp, options) {
        Ok(()) => fs::rename(&tmp, path).map_err(|error| {
            let _ = fs::remove_file(&tmp);
            ExportError::Io(error)
        }),
        Err(error) => {
            let _ = fs::remove_file(&tmp);
            Err(error)
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn encode_to(
    img: &impl Image<Pixel = Rgba>,
    path: &Path,
    options: ExportOptions,
) -> Result<(), ExportError> {
    let file = fs::File::create(path)?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        img.width() as u32,
        img.height() as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    if options.optimize {
        encoder.set_compression(png::Compression::Best);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
    }

    let mut data = Vec::with_capacity(img.width() * img.height() * 4);
    for pixel in img.iter() {
        data.extend_from_slice(&pixel.to_rgba());
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Canvas, ImageMut};
    use std::env;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("icondraw-test-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let mut canvas = Canvas::filled(3, Rgba::opaque(10, 20, 30));
        *canvas.get_mut(1, 2).unwrap() = Rgba::new(1, 2, 3, 4);
        let path = scratch_path("roundtrip.png");
        write_png(&canvas, &path, ExportOptions::default())?;

        let decoder = png::Decoder::new(fs::File::open(&path)?);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        assert_eq!(info.width, 3);
        assert_eq!(info.height, 3);
        assert_eq!(info.color_type, png::ColorType::Rgba);
        // row 1, col 2
        assert_eq!(&buf[(3 + 2) * 4..(3 + 2) * 4 + 4], &[1, 2, 3, 4]);
        assert_eq!(&buf[0..4], &[10, 20, 30, 255]);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_optimized_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let canvas = Canvas::filled(16, Rgba::opaque(200, 100, 50));
        let path = scratch_path("optimized.png");
        write_png(&canvas, &path, ExportOptions { optimize: true })?;

        let decoder = png::Decoder::new(fs::File::open(&path)?);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        assert_eq!((info.width, info.height), (16, 16));

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_failed_write_leaves_nothing() {
        let canvas = Canvas::filled(2, Rgba::opaque(0, 0, 0));
        let mut path = scratch_path("no-such-dir");
        path.push("icon.png");
        let result = write_png(&canvas, &path, ExportOptions::default());
        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!tmp_path(&path).exists());
    }
}
