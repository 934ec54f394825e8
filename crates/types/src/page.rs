use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Paper formats supported by the document generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFormat {
    #[default]
    A4,
    #[serde(alias = "letter", alias = "LETTER")]
    Letter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl PageFormat {
    /// Portrait dimensions in points.
    pub fn portrait_size(self) -> Size {
        match self {
            PageFormat::A4 => Size::new(595.28, 841.89),
            PageFormat::Letter => Size::new(612.0, 792.0),
        }
    }

    pub fn size(self, orientation: Orientation) -> Size {
        let portrait = self.portrait_size();
        match orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => Size::new(portrait.height, portrait.width),
        }
    }
}
