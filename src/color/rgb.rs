//! Hex colour values
//!
//! This module contains the `Rgb` value type, its `#RRGGBB` parsing and
//! formatting, and the channel arithmetic used to lighten colours.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, invalid_color_error};

/// An opaque 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Builds a colour from a `0xRRGGBB` literal, ignoring the top byte
    pub const fn from_hex(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Moves every channel towards 255 by `amount`
    ///
    /// `amount` is clamped to `0.0..=1.0`. Each channel becomes
    /// `floor(c + (255 - c) * amount)`, so `0.0` keeps the colour and `1.0`
    /// yields white.
    pub fn lighten(self, amount: f64) -> Rgb {
        let amount = if amount.is_nan() {
            0.0
        } else {
            amount.clamp(0.0, 1.0)
        };
        let channel = |c: u8| -> u8 {
            let value = f64::from(c) + (255.0 - f64::from(c)) * amount;
            value.floor().clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_color_error(s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid_color_error(s))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lightens a `#RRGGBB` colour string
///
/// # Arguments
/// * `color` - The base colour
/// * `amount` - Fraction between 0 and 1 each channel moves towards white
///
/// # Returns
/// * `Result<String>` - The lightened colour as lowercase `#rrggbb`
///
/// # Errors
/// Returns an error if `color` is not a six digit hex colour
pub fn lighten(color: &str, amount: f64) -> Result<String> {
    let rgb: Rgb = color.parse()?;
    Ok(rgb.lighten(amount).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let rgb: Rgb = "#1565c0".parse().unwrap();
        assert_eq!(rgb, Rgb::new(0x15, 0x65, 0xc0));
        assert_eq!(rgb.to_string(), "#1565c0");

        let upper: Rgb = "1565C0".parse().unwrap();
        assert_eq!(upper, rgb);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex(0x1565c0), Rgb::new(0x15, 0x65, 0xc0));
        assert_eq!(Rgb::from_hex(0xffffff), Rgb::WHITE);
    }

    #[test]
    fn test_parse_rejects_malformed_values() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#12345g".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert!("#1565c0ff".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_lighten_bounds() {
        assert_eq!(lighten("#1565c0", 0.0).unwrap(), "#1565c0");
        assert_eq!(lighten("#1565c0", 1.0).unwrap(), "#ffffff");
        assert_eq!(Rgb::new(0, 0, 0).lighten(1.0), Rgb::WHITE);
    }

    #[test]
    fn test_lighten_fill_amount() {
        // 0x15 = 21 -> 21 + 234 * 0.85 = 219.9 -> 219 (0xdb)
        // 0x65 = 101 -> 101 + 154 * 0.85 = 231.9 -> 231 (0xe7)
        // 0xc0 = 192 -> 192 + 63 * 0.85 = 245.55 -> 245 (0xf5)
        assert_eq!(lighten("#1565c0", 0.85).unwrap(), "#dbe7f5");
    }

    #[test]
    fn test_lighten_is_monotonic() {
        let base: Rgb = "#4e342e".parse().unwrap();
        let mut previous = base;
        for step in 1..=20 {
            let next = base.lighten(f64::from(step) / 20.0);
            assert!(next.r >= previous.r);
            assert!(next.g >= previous.g);
            assert!(next.b >= previous.b);
            previous = next;
        }
        assert_eq!(previous, Rgb::WHITE);
    }

    #[test]
    fn test_lighten_clamps_amount() {
        let base: Rgb = "#00695c".parse().unwrap();
        assert_eq!(base.lighten(-0.5), base);
        assert_eq!(base.lighten(3.0), Rgb::WHITE);
        assert_eq!(base.lighten(f64::NAN), base);
    }

    #[test]
    fn test_lighten_rejects_bad_input() {
        assert!(lighten("blue", 0.5).is_err());
    }
}
