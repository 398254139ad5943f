use serde::Serialize;

use crate::foundation::core::Rgba8Premul;

/// Upper bound of every component of the integer HSL domain.
pub const HSL_MAX: i32 = 240;

const BAND: i32 = 40;

/// Straight 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Black, returned for out-of-domain input.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Opaque premultiplied pixel of this color.
    pub fn to_opaque(self) -> Rgba8Premul {
        Rgba8Premul::opaque(self.r, self.g, self.b)
    }
}

/// Convert integer HSL, each component in `0..=240`, to RGB.
///
/// This is the 240-domain wheel used by wavatar, not the 360-degree model. All arithmetic
/// is truncating integer division in a fixed order; output is part of the reproducibility
/// contract, so the expressions must not be rearranged. Out-of-domain input yields black.
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> Rgb8 {
    let in_domain = |v: i32| (0..=HSL_MAX).contains(&v);
    if !(in_domain(h) && in_domain(s) && in_domain(l)) {
        return Rgb8::BLACK;
    }

    let [r, g, b] = hue_channels(h).map(|c| lighten(desaturate(c, s), l));
    Rgb8 {
        r: clamp_u8(r),
        g: clamp_u8(g),
        b: clamp_u8(b),
    }
}

fn hue_channels(h: i32) -> [i32; 3] {
    let rising = |offset: i32| offset / BAND * 256;
    let falling = |offset: i32| (1 - offset / BAND) * 256;

    if h <= 40 {
        [255, rising(h), 0]
    } else if h <= 80 {
        [falling(h - 40), 255, 0]
    } else if h <= 120 {
        [0, 255, rising(h - 80)]
    } else if h <= 160 {
        [0, falling(h - 120), 255]
    } else if h <= 200 {
        [rising(h - 160), 0, 255]
    } else {
        [255, 0, falling(h - 200)]
    }
}

fn desaturate(c: i32, s: i32) -> i32 {
    c + (HSL_MAX - s) / HSL_MAX * (128 - c)
}

fn lighten(c: i32, l: i32) -> i32 {
    if l < 120 {
        (c / 120) * l
    } else {
        l * ((256 - c) / 120) + 2 * c - 256
    }
}

fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
