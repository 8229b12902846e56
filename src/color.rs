use crate::utils::clamp;
use std::{fmt, str::FromStr};

/// Common interface to color representations
pub trait Color: Copy {
    /// Blend other color on top of this color
    fn blend_over(self, other: Self) -> Self;

    /// Override alpha component of the color, `alpha` in [0, 1]
    fn with_alpha(self, alpha: f32) -> Self;

    /// Convert color to sRGBA list
    fn to_rgba(self) -> [u8; 4];

    /// Convert color to sRGB list (alpha is discarded)
    fn to_rgb(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba();
        [r, g, b]
    }

    /// Calculate LUMA of the color.
    fn luma(self) -> f32 {
        let [r, g, b] = self.to_rgb();
        0.2126 * (r as f32 / 255.0) + 0.7152 * (g as f32 / 255.0) + 0.0722 * (b as f32 / 255.0)
    }

    /// Pick color that produces the best contrast with self
    fn best_contrast(self, c0: Self, c1: Self) -> Self {
        let luma = self.luma();
        if (luma - c0.luma()).abs() < (luma - c1.luma()).abs() {
            c1
        } else {
            c0
        }
    }

    /// Linear interpolation between self and other colors.
    fn lerp(self, other: Self, t: f32) -> Self;
}

/// ABGR color packed as u32 value (most of the platforms are little-endian)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgba(u32);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    /// Fully opaque color from RGB channels
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl Color for Rgba {
    fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    fn blend_over(self, other: Self) -> Self {
        if other.alpha() == 255 {
            return other;
        }
        if other.alpha() == 0 {
            return self;
        }
        // plain source-over in normalized sRGB space, rounded per channel
        let src_a = other.alpha() as f32 / 255.0;
        let dst_a = self.alpha() as f32 / 255.0;
        let channel = |src: u8, dst: u8| -> u8 {
            let value = (src as f32 / 255.0) * src_a + (dst as f32 / 255.0) * (1.0 - src_a);
            (value * 255.0 + 0.5) as u8
        };
        let out_a = src_a + dst_a * (1.0 - src_a);
        Rgba::new(
            channel(other.red(), self.red()),
            channel(other.green(), self.green()),
            channel(other.blue(), self.blue()),
            (out_a * 255.0 + 0.5) as u8,
        )
    }

    fn with_alpha(self, alpha: f32) -> Self {
        let alpha = (clamp(alpha, 0.0, 1.0) * 255.0 + 0.5) as u8;
        Rgba::new(self.red(), self.green(), self.blue(), alpha)
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        let t = clamp(t, 0.0, 1.0);
        let channel = |c0: u8, c1: u8| -> u8 {
            let value = c0 as f32 + (c1 as f32 - c0 as f32) * t;
            (value + 0.5) as u8
        };
        Rgba::new(
            channel(self.red(), other.red()),
            channel(self.green(), other.green()),
            channel(self.blue(), other.blue()),
            channel(self.alpha(), other.alpha()),
        )
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [bg_r, bg_g, bg_b] = self.to_rgb();
        let [fg_r, fg_g, fg_b] = self
            .best_contrast(Rgba::opaque(255, 255, 255), Rgba::opaque(0, 0, 0))
            .to_rgb();
        write!(
            fmt,
            "\x1b[38;2;{};{};{};48;2;{};{};{}m",
            fg_r, fg_g, fg_b, bg_r, bg_g, bg_b
        )?;
        write!(fmt, "{}", self)?;
        write!(fmt, "\x1b[m")
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if a != 255 {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        if color.starts_with('#') && (color.len() == 7 || color.len() == 9) {
            // #RRGGBB(AA)
            let bytes: &[u8] = color[1..].as_ref();
            let digit = |byte| match byte {
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'0'..=b'9' => Ok(byte - b'0'),
                _ => Err(ColorError::HexExpected),
            };
            let mut hex = bytes
                .chunks(2)
                .map(|pair| Ok((digit(pair[0])? << 4) | digit(pair[1])?));
            Ok(Rgba::new(
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(255))?,
            ))
        } else {
            Err(ColorError::HexExpected)
        }
    }
}

#[derive(Debug, Clone)]
pub enum ColorError {
    HexExpected,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RRGGBB(AA) in hexadecimal format")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!([1, 2, 3, 4], c.to_rgba());
        assert_eq!(1, c.red());
        assert_eq!(2, c.green());
        assert_eq!(3, c.blue());
        assert_eq!(4, c.alpha());
    }

    #[test]
    fn test_parse() -> Result<(), ColorError> {
        assert_eq!(Rgba::new(1, 2, 3, 4), "#01020304".parse::<Rgba>()?);
        assert_eq!(Rgba::new(170, 187, 204, 255), "#aabbcc".parse::<Rgba>()?);
        assert_eq!(Rgba::new(0, 0, 0, 255), "#000000".parse::<Rgba>()?);
        assert!("red".parse::<Rgba>().is_err());
        Ok(())
    }

    #[test]
    fn test_display_parse() -> Result<(), ColorError> {
        let c: Rgba = "#01020304".parse()?;
        assert_eq!(c, Rgba::new(1, 2, 3, 4));
        assert_eq!(c.to_string(), "#01020304");

        let c: Rgba = "#010203".parse()?;
        assert_eq!(c, Rgba::new(1, 2, 3, 255));
        assert_eq!(c.to_string(), "#010203");

        Ok(())
    }

    #[test]
    fn test_blend_opaque_replaces() {
        // blending a fully opaque color leaves no residue of the background
        let bg = Rgba::opaque(13, 127, 211);
        let fg = Rgba::opaque(255, 0, 64);
        assert_eq!(bg.blend_over(fg), fg);
    }

    #[test]
    fn test_blend_semi_transparent() {
        let bg = Rgba::opaque(0, 0, 0);
        let fg = Rgba::new(255, 255, 255, 128);
        let out = bg.blend_over(fg);
        // 255 * (128 / 255) rounds to 128
        assert_eq!(out.to_rgb(), [128, 128, 128]);
        assert_eq!(out.alpha(), 255);

        // fully transparent source leaves the background untouched
        assert_eq!(bg.blend_over(Rgba::new(9, 9, 9, 0)), bg);
    }

    #[test]
    fn test_lerp() {
        let c0 = Rgba::opaque(0, 100, 200);
        let c1 = Rgba::opaque(100, 200, 0);
        assert_eq!(c0.lerp(c1, 0.0), c0);
        assert_eq!(c0.lerp(c1, 1.0), c1);
        assert_eq!(c0.lerp(c1, 0.5), Rgba::opaque(50, 150, 100));
    }

    #[test]
    fn test_with_alpha() {
        let c = Rgba::opaque(10, 20, 30);
        assert_eq!(c.with_alpha(0.0).alpha(), 0);
        assert_eq!(c.with_alpha(1.0).alpha(), 255);
        assert_eq!(c.with_alpha(0.5).to_rgb(), [10, 20, 30]);
    }
}
