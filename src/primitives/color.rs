//! HexColor - sRGB color parsed from `#rgb` / `#rrggbb`

use std::fmt;
use std::str::FromStr;

use crate::error::{GalleryError, GalleryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::from_rgb(0x000000);
    pub const WHITE: Self = Self::from_rgb(0xffffff);

    /// Packed `0xRRGGBB`, for const color tables.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub fn parse(input: &str) -> GalleryResult<Self> {
        let invalid = || GalleryError::InvalidColor(input.to_string());
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = match hex.len() {
            6 => u32::from_str_radix(hex, 16).map_err(|_| invalid())?,
            3 => {
                // #abc -> #aabbcc
                let short = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
                (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)
            }
            _ => return Err(invalid()),
        };
        Ok(Self::from_rgb(rgb))
    }

    /// Relative luminance in [0, 1], good enough to tell "near-black".
    pub fn luminance(&self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }

    /// Black or white, whichever reads better on top of this color
    pub fn ink(&self) -> Self {
        if self.luminance() < 0.5 { Self::WHITE } else { Self::BLACK }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form_case_insensitive() {
        let c = HexColor::parse("#FF9933").unwrap();
        assert_eq!(c, HexColor::from_rgb(0xff9933));
        assert_eq!(c.to_string(), "#ff9933");
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(HexColor::parse("#1a3").unwrap().to_string(), "#11aa33");
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "ff9933", "#ff99", "#gg0000", "red", "#ff99331"] {
            assert_eq!(
                HexColor::parse(bad),
                Err(GalleryError::InvalidColor(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn luminance_orders_black_below_white() {
        assert!(HexColor::from_rgb(0x111111).luminance() < 0.1);
        assert!(HexColor::WHITE.luminance() > 0.99);
    }

    #[test]
    fn ink_contrasts_with_backdrop() {
        assert_eq!(HexColor::from_rgb(0x1e293b).ink(), HexColor::WHITE);
        assert_eq!(HexColor::from_rgb(0xe0e5ec).ink(), HexColor::BLACK);
    }
}
