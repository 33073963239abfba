#![no_std]
//! # Pigment
//!
//! Solid color values for the Watercolor engine.
//!
//! The only color space here is sRGB, stored as three `f32` components in the
//! 0.0 to 1.0 range. That is all a solid fill or stroke needs; anything
//! fancier (wide gamut, opacity, theming) belongs to a richer color pipeline
//! than this crate provides.
//!
//! Colors can be written out as component values, parsed from hex strings
//! (at compile time via [`Srgb::from_hex`] or fallibly at runtime via
//! [`Srgb::try_from_hex`]), or picked from the built-in Material palette
//! constants such as [`Srgb::RED`] and [`Srgb::BLUE`].

use core::fmt::{self, Display};

mod parse;
mod srgb;
pub use srgb::Srgb;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The provided string does not have the expected 6 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    InvalidDigit(usize),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected exactly 6 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
        }
    }
}

impl core::error::Error for HexColorError {}
