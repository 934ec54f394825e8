use educafric_types::Color;
use serde::{Deserialize, Serialize};

/// Named color schemes of the master sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Standard,
    Green,
    Blue,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] =
        [ColorScheme::Standard, ColorScheme::Green, ColorScheme::Blue];

    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Standard => Palette {
                primary: Color::rgb(30, 58, 138),
                header_fill: Color::rgb(30, 58, 138),
                header_text: Color::WHITE,
                alternate_row: Color::rgb(241, 245, 249),
                border: Color::gray(160),
            },
            ColorScheme::Green => Palette {
                primary: Color::rgb(21, 128, 61),
                header_fill: Color::rgb(22, 101, 52),
                header_text: Color::WHITE,
                alternate_row: Color::rgb(240, 253, 244),
                border: Color::rgb(134, 187, 151),
            },
            ColorScheme::Blue => Palette {
                primary: Color::rgb(29, 78, 216),
                header_fill: Color::rgb(37, 99, 235),
                header_text: Color::WHITE,
                alternate_row: Color::rgb(239, 246, 255),
                border: Color::rgb(147, 178, 230),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Standard => "standard",
            ColorScheme::Green => "green",
            ColorScheme::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Titles and section captions.
    pub primary: Color,
    pub header_fill: Color,
    pub header_text: Color,
    /// Shading of every other student row.
    pub alternate_row: Color,
    pub border: Color,
}
