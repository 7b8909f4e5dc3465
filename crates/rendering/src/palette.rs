//! Colours for the scene roles.
//!
//! Shapes carry a `Paint` role rather than a colour; the `Palette` resource
//! resolves roles to sRGB swatches for both the SVG writer and the Bevy
//! sprites.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What a shape depicts. Resolved to a colour by `Palette`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paint {
    /// An ordinary column.
    Column,
    /// A synthesized boundary tower.
    Boundary,
    /// Trapped water.
    Water,
    /// Grid line.
    Grid,
}

/// An sRGB colour with opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub opacity: f32,
}

impl Swatch {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            opacity: 1.0,
        }
    }

    /// `#RRGGBB`, as written into SVG attributes.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }

    pub fn to_color(&self) -> Color {
        Color::srgba(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.opacity,
        )
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Palette {
    pub column: Swatch,
    pub boundary: Swatch,
    pub water: Swatch,
    pub grid: Swatch,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // gold
            column: Swatch::opaque(0xFF, 0xD7, 0x00),
            // tomato
            boundary: Swatch::opaque(0xFF, 0x63, 0x47),
            // sky blue, translucent so the grid shows through
            water: Swatch {
                r: 0x87,
                g: 0xCE,
                b: 0xEB,
                opacity: 0.7,
            },
            grid: Swatch::opaque(0x00, 0x00, 0x00),
        }
    }
}

impl Palette {
    pub fn swatch(&self, paint: Paint) -> Swatch {
        match paint {
            Paint::Column => self.column,
            Paint::Boundary => self.boundary,
            Paint::Water => self.water,
            Paint::Grid => self.grid,
        }
    }

    pub fn color(&self, paint: Paint) -> Color {
        self.swatch(paint).to_color()
    }
}
