pub mod color;
pub mod geometry;
pub mod page;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use page::{Orientation, PageFormat};
