//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the fundamental traits and types used by PDF rendering backends:
//! - `Canvas` trait for abstracting page drawing operations
//! - `FontFace` with the width metrics of the standard faces
//! - Error types for rendering operations
//! - Shared utility functions for text encoding and alignment

mod error;
pub mod fonts;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use fonts::FontFace;
pub use traits::Canvas;
pub use utils::TextAlign;
