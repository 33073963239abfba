use core::str::FromStr;

use crate::{
    HexColorError,
    parse::{parse_hex_rgb, try_parse_hex_rgb},
};

/// A color in the sRGB color space.
///
/// sRGB is the standard RGB color space used by most displays and web
/// content. Component values are in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
}

impl Srgb {
    /// Material red.
    pub const RED: Self = Self::from_hex("#F44336");
    /// Material pink.
    pub const PINK: Self = Self::from_hex("#E91E63");
    /// Material purple.
    pub const PURPLE: Self = Self::from_hex("#9C27B0");
    /// Material indigo.
    pub const INDIGO: Self = Self::from_hex("#3F51B5");
    /// Material blue.
    pub const BLUE: Self = Self::from_hex("#2196F3");
    /// Material cyan.
    pub const CYAN: Self = Self::from_hex("#00BCD4");
    /// Material teal.
    pub const TEAL: Self = Self::from_hex("#009688");
    /// Material green.
    pub const GREEN: Self = Self::from_hex("#4CAF50");
    /// Material yellow.
    pub const YELLOW: Self = Self::from_hex("#FFEB3B");
    /// Material amber.
    pub const AMBER: Self = Self::from_hex("#FFC107");
    /// Material orange.
    pub const ORANGE: Self = Self::from_hex("#FF9800");
    /// Material brown.
    pub const BROWN: Self = Self::from_hex("#795548");
    /// Material grey.
    pub const GREY: Self = Self::from_hex("#9E9E9E");
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");

    /// Creates a new sRGB color from red, green, and blue components.
    ///
    /// # Arguments
    /// * `red` - Red component (0.0 to 1.0)
    /// * `green` - Green component (0.0 to 1.0)
    /// * `blue` - Blue component (0.0 to 1.0)
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new sRGB color from 8-bit red, green, and blue components.
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Creates a new sRGB color from a hexadecimal color string.
    ///
    /// # Arguments
    /// * `hex` - Hex color string (e.g., "#FF5722" or "0xFF5722")
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let (red, green, blue) = parse_hex_rgb(hex);
        Self::new_u8(red, green, blue)
    }

    /// Attempts to create a new sRGB color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six hexadecimal
    /// digits or contains invalid characters.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let (red, green, blue) = try_parse_hex_rgb(hex)?;
        Ok(Self::new_u8(red, green, blue))
    }

    /// Creates a new sRGB color from a packed 0xRRGGBB value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new_u8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Quantizes to 8-bit RGBA with a fully opaque alpha channel.
    ///
    /// Components outside 0.0 to 1.0 are clamped first.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        // Clamped to non-negative, so adding 0.5 and truncating rounds
        // half-up.
        fn quantize(component: f32) -> u8 {
            (component.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        }
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            0xFF,
        ]
    }
}

impl From<(u8, u8, u8)> for Srgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new_u8(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new_u8(value[0], value[1], value[2])
    }
}

impl From<(f32, f32, f32)> for Srgb {
    fn from(value: (f32, f32, f32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<[f32; 3]> for Srgb {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}
