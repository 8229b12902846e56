use crate::{Color, ImageMut, Rgba, Scalar};
use std::fs;

/// Candidate bold fonts, tried in order: macOS locations first, then the
/// common Linux ones.
const BOLD_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

/// Text renderer backed by the first system font that loads, with a
/// built-in 5x7 bitmap font as the guaranteed fallback
pub struct FontBook {
    kind: FontKind,
}

enum FontKind {
    System(fontdue::Font),
    Builtin,
}

impl FontBook {
    /// Walk the candidate font paths, the first one that reads and parses
    /// wins. Never fails: the built-in bitmap font is the tail of the chain.
    pub fn load() -> Self {
        for path in BOLD_FONT_PATHS {
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(_) => continue,
            };
            match fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) {
                Ok(font) => {
                    tracing::debug!(%path, "loaded system font");
                    return Self {
                        kind: FontKind::System(font),
                    };
                }
                Err(error) => tracing::debug!(%path, error, "failed to parse font"),
            }
        }
        tracing::warn!("no system font available, using built-in glyphs");
        Self::builtin()
    }

    /// Renderer that only uses the built-in bitmap font
    pub fn builtin() -> Self {
        Self {
            kind: FontKind::Builtin,
        }
    }

    /// Approximate size of the rendered text box. With the built-in font the
    /// width degrades to a character-count heuristic.
    pub fn measure(&self, text: &str, px: f32) -> (Scalar, Scalar) {
        match &self.kind {
            FontKind::System(font) => {
                let width: f32 = text
                    .chars()
                    .map(|ch| font.metrics(ch, px).advance_width)
                    .sum();
                let height = font
                    .horizontal_line_metrics(px)
                    .map(|metrics| metrics.ascent - metrics.descent)
                    .unwrap_or(px * 1.2);
                (width as Scalar, height as Scalar)
            }
            FontKind::Builtin => (
                (text.chars().count() as f32 * px * 0.6) as Scalar,
                px as Scalar,
            ),
        }
    }

    /// Draw `text` with the top-left corner of its box at `(x, y)`
    pub fn draw(
        &self,
        img: &mut impl ImageMut<Pixel = Rgba>,
        text: &str,
        x: Scalar,
        y: Scalar,
        px: f32,
        color: Rgba,
    ) {
        match &self.kind {
            FontKind::System(font) => draw_system(img, font, text, x, y, px, color),
            FontKind::Builtin => draw_builtin(img, text, x, y, px, color),
        }
    }
}

fn draw_system(
    img: &mut impl ImageMut<Pixel = Rgba>,
    font: &fontdue::Font,
    text: &str,
    x: Scalar,
    y: Scalar,
    px: f32,
    color: Rgba,
) {
    let ascent = font
        .horizontal_line_metrics(px)
        .map(|metrics| metrics.ascent as Scalar)
        .unwrap_or((px * 0.8) as Scalar);
    let baseline = y + ascent;
    let mut pen = x;
    for ch in text.chars() {
        let (metrics, bitmap) = font.rasterize(ch, px);
        let left = pen + metrics.xmin as Scalar;
        let top = baseline - metrics.ymin as Scalar - metrics.height as Scalar;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col];
                if coverage == 0 {
                    continue;
                }
                let img_row = top + row as Scalar;
                let img_col = left + col as Scalar;
                if img_row < 0.0 || img_col < 0.0 {
                    continue;
                }
                let alpha = (coverage as f32 / 255.0) * (color.alpha() as f32 / 255.0);
                if let Some(pixel) = img.get_mut(img_row.round() as usize, img_col.round() as usize)
                {
                    *pixel = pixel.blend_over(color.with_alpha(alpha));
                }
            }
        }
        pen += metrics.advance_width as Scalar;
    }
}

fn draw_builtin(
    img: &mut impl ImageMut<Pixel = Rgba>,
    text: &str,
    x: Scalar,
    y: Scalar,
    px: f32,
    color: Rgba,
) {
    let cell = (px * 0.6) as Scalar;
    let glyph_width = (px * 0.5) as Scalar;
    let glyph_height = (px * 0.7) as Scalar;
    let top = y + (px as Scalar - glyph_height) / 2.0;
    let scale_x = glyph_width / 5.0;
    let scale_y = glyph_height / 7.0;
    let mut pen = x;
    for ch in text.chars() {
        if let Some(rows) = builtin_glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..5u32 {
                    if bits & (0b10000 >> col) == 0 {
                        continue;
                    }
                    fill_cell(
                        img,
                        pen + col as Scalar * scale_x,
                        top + row as Scalar * scale_y,
                        scale_x,
                        scale_y,
                        color,
                    );
                }
            }
        }
        pen += cell;
    }
}

/// Fill one scaled font pixel. Cells tile without overlap so blending a
/// semi-transparent color stays single-pass.
fn fill_cell(
    img: &mut impl ImageMut<Pixel = Rgba>,
    x: Scalar,
    y: Scalar,
    width: Scalar,
    height: Scalar,
    color: Rgba,
) {
    let col0 = x.round().max(0.0) as usize;
    let col1 = ((x + width).round().max(0.0) as usize).min(img.width());
    let row0 = y.round().max(0.0) as usize;
    let row1 = ((y + height).round().max(0.0) as usize).min(img.height());
    for row in row0..row1 {
        for col in col0..col1 {
            if let Some(pixel) = img.get_mut(row, col) {
                *pixel = pixel.blend_over(color);
            }
        }
    }
}

/// 5x7 bitmap glyphs, one byte per row, bit 4 is the leftmost column
#[rustfmt::skip]
const LETTERS: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const UNKNOWN: [u8; 7] = [0b11111; 7];

fn builtin_glyph(ch: char) -> Option<[u8; 7]> {
    match ch.to_ascii_uppercase() {
        ' ' => None,
        ch @ 'A'..='Z' => Some(LETTERS[(ch as u8 - b'A') as usize]),
        ch @ '0'..='9' => Some(DIGITS[(ch as u8 - b'0') as usize]),
        _ => Some(UNKNOWN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Canvas, Image};

    #[test]
    fn test_load_never_fails() {
        let fonts = FontBook::load();
        let (width, height) = fonts.measure("AI", 20.0);
        assert!(width > 0.0);
        assert!(height > 0.0);
    }

    #[test]
    fn test_builtin_measure_heuristic() {
        let fonts = FontBook::builtin();
        let (width, height) = fonts.measure("AI", 40.0);
        assert_eq!(width, 48.0);
        assert_eq!(height, 40.0);
        let (empty, _) = fonts.measure("", 40.0);
        assert_eq!(empty, 0.0);
    }

    #[test]
    fn test_builtin_draw_marks_pixels() {
        let background = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);
        let mut img = Canvas::filled(64, background);
        let fonts = FontBook::builtin();
        fonts.draw(&mut img, "I", 10.0, 10.0, 40.0, white);
        let painted = img.iter().filter(|px| **px == white).count();
        assert!(painted > 0, "glyph left no pixels");
        // nothing outside the glyph cell is touched
        assert_eq!(img.get(5, 5), Some(&background));
    }

    #[test]
    fn test_space_advances_without_drawing() {
        let background = Rgba::opaque(0, 0, 0);
        let mut img = Canvas::filled(32, background);
        let fonts = FontBook::builtin();
        fonts.draw(&mut img, " ", 0.0, 0.0, 20.0, Rgba::opaque(255, 0, 0));
        assert!(img.iter().all(|px| *px == background));
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(builtin_glyph('a'), builtin_glyph('A'));
        assert_eq!(builtin_glyph(' '), None);
        assert_eq!(builtin_glyph('@'), Some(UNKNOWN));
    }
}
