//! Per-channel color tolerance matching.
//!
//! A candidate pixel belongs to the fill region when each of its red,
//! green and blue channels lies within `tolerance` of the reference
//! channel. Channels are tested independently (a box in RGB space, not a
//! Euclidean distance) and alpha never takes part in the comparison.

/// An RGB triple, alpha excluded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Extract the color channels of an `0xAARRGGBB` pixel.
    #[inline]
    pub const fn from_argb(color: u32) -> Self {
        Self {
            r: (color >> 16) as u8,
            g: (color >> 8) as u8,
            b: color as u8,
        }
    }

    #[inline]
    pub const fn to_argb(self, alpha: u8) -> u32 {
        argb(alpha, self.r, self.g, self.b)
    }
}

/// Pack channels into an `0xAARRGGBB` pixel.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Maximum allowed absolute difference per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tolerance {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tolerance {
    /// Only identical RGB values match.
    pub const EXACT: Tolerance = Tolerance::uniform(0);

    pub const fn uniform(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    pub const fn per_channel(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<u8> for Tolerance {
    fn from(value: u8) -> Self {
        Tolerance::uniform(value)
    }
}

/// Check if `pixel` lies within `tolerance` of `reference` on every color channel.
#[inline]
pub fn matches(pixel: u32, reference: Rgb, tolerance: Tolerance) -> bool {
    let px = Rgb::from_argb(pixel);
    channel_within(px.r, reference.r, tolerance.r)
        && channel_within(px.g, reference.g, tolerance.g)
        && channel_within(px.b, reference.b, tolerance.b)
}

#[inline]
fn channel_within(value: u8, reference: u8, tolerance: u8) -> bool {
    (value as i16 - reference as i16).abs() <= tolerance as i16
}

/// A reference color and tolerance captured once per fill call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMatcher {
    reference: Rgb,
    tolerance: Tolerance,
}

impl ColorMatcher {
    pub fn new(reference: Rgb, tolerance: Tolerance) -> Self {
        Self {
            reference,
            tolerance,
        }
    }

    #[inline]
    pub fn matches(&self, pixel: u32) -> bool {
        matches(pixel, self.reference, self.tolerance)
    }
}
