//! RGB colors and the truncating shade operator used for outlines and trailing chains.

use crate::foundation::math::truncate_wrap_u8;
use serde::{Deserialize, Serialize};

/// Opaque 8-bit RGB color.
///
/// Derived colors are new values; nothing is shaded in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure red, used for bird legs and beaks.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Frog green.
    pub const GREEN: Self = Self::new(0, 128, 0);

    /// Color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`.
    ///
    /// Each product is truncated toward zero and then stored in 8 bits without clamping, so a
    /// channel pushed past 255 wraps around (`266 -> 10`) and a negative one wraps from the top.
    /// Repeated shading therefore drifts deterministically: `c.shade(a).shade(b)` is
    /// `trunc(trunc(c * a) * b)`, not `c * (a * b)`.
    pub fn shade(self, factor: f64) -> Self {
        let ch = |c: u8| truncate_wrap_u8(f64::from(c) * factor);
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }

    /// Apply [`Rgb::shade`] `times` times in a row.
    pub fn shade_n(self, factor: f64, times: usize) -> Self {
        (0..times).fold(self, |c, _| c.shade(factor))
    }

    /// Packed `0x00BBGGRR` word.
    pub fn pack(self) -> u32 {
        u32::from(self.r) | (u32::from(self.g) << 8) | (u32::from(self.b) << 16)
    }

    /// Inverse of [`Rgb::pack`]; the top byte is ignored.
    pub fn from_packed(word: u32) -> Self {
        Self {
            r: (word & 0xff) as u8,
            g: ((word >> 8) & 0xff) as u8,
            b: ((word >> 16) & 0xff) as u8,
        }
    }

    /// Channels as an opaque RGBA quadruple.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::new(r, g, b)),
                _ => Err(serde::de::Error::custom(
                    "rgb array must have len 3 ([r,g,b])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    Ok(Rgb::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/color/shade.rs"]
mod tests;
