use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{Color: r={:02X}, g={:02X}, b={:02X}}}",
            self.r, self.g, self.b
        )
    }
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn get_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The color packed as `0x00RR_GGBB`.
    pub fn get_rgb_value(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color {
            r: value.0,
            g: value.1,
            b: value.2,
        }
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(value: Color) -> (u8, u8, u8) {
        (value.r, value.g, value.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color {
            r: value[0],
            g: value[1],
            b: value[2],
        }
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> [u8; 3] {
        [value.r, value.g, value.b]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> u32 {
        value.get_rgb_value()
    }
}

pub const DOS_DEFAULT_PALETTE: [Color; 16] = [
    Color {
        r: 0x00,
        g: 0x00,
        b: 0x00,
    }, // black
    Color {
        r: 0x00,
        g: 0x00,
        b: 0xAA,
    }, // blue
    Color {
        r: 0x00,
        g: 0xAA,
        b: 0x00,
    }, // green
    Color {
        r: 0x00,
        g: 0xAA,
        b: 0xAA,
    }, // cyan
    Color {
        r: 0xAA,
        g: 0x00,
        b: 0x00,
    }, // red
    Color {
        r: 0xAA,
        g: 0x00,
        b: 0xAA,
    }, // magenta
    Color {
        r: 0xAA,
        g: 0x55,
        b: 0x00,
    }, // brown
    Color {
        r: 0xAA,
        g: 0xAA,
        b: 0xAA,
    }, // lightgray
    Color {
        r: 0x55,
        g: 0x55,
        b: 0x55,
    }, // darkgray
    Color {
        r: 0x55,
        g: 0x55,
        b: 0xFF,
    }, // lightblue
    Color {
        r: 0x55,
        g: 0xFF,
        b: 0x55,
    }, // lightgreen
    Color {
        r: 0x55,
        g: 0xFF,
        b: 0xFF,
    }, // lightcyan
    Color {
        r: 0xFF,
        g: 0x55,
        b: 0x55,
    }, // lightred
    Color {
        r: 0xFF,
        g: 0x55,
        b: 0xFF,
    }, // lightmagenta
    Color {
        r: 0xFF,
        g: 0xFF,
        b: 0x55,
    }, // yellow
    Color {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    }, // white
];

/// Read access to an indexed color source with per-index transparency.
/// Implemented by [`Palette`] and by [`crate::PaletteSlice`], so a slice
/// adapter can be built from a plain palette or from another adapter.
pub trait PaletteSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn color_at(&self, index: usize) -> Color;

    fn transparent_at(&self, index: usize) -> bool;
}

/// A fixed-capacity indexed color palette with a per-index transparency
/// flag. Freshly constructed instances are zero-initialized (all black)
/// and fully opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
    transparent: Vec<bool>,
}

impl Palette {
    /// The 16-color DOS default palette, all opaque.
    pub fn new() -> Self {
        Palette {
            colors: DOS_DEFAULT_PALETTE.to_vec(),
            transparent: vec![false; DOS_DEFAULT_PALETTE.len()],
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Palette {
            colors: vec![Color::default(); capacity],
            transparent: vec![false; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_color(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_color(&mut self, index: usize, color: Color) {
        self.colors[index] = color;
    }

    pub fn set_color_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set_color(index, Color { r, g, b });
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn is_transparent(&self, index: usize) -> bool {
        self.transparent[index]
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn make_transparent(&mut self, index: usize) {
        self.transparent[index] = true;
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn make_opaque(&mut self, index: usize) {
        self.transparent[index] = false;
    }
}

impl PaletteSource for Palette {
    fn len(&self) -> usize {
        self.colors.len()
    }

    fn color_at(&self, index: usize) -> Color {
        self.colors[index]
    }

    fn transparent_at(&self, index: usize) -> bool {
        self.transparent[index]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
