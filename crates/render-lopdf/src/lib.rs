//! PDF backend using lopdf.
//!
//! This crate turns [`Canvas`](educafric_render_core::Canvas) drawing calls into
//! content streams and writes them out as a classic, uncompressed PDF with a
//! cross-reference table (no object streams) for maximum reader compatibility.

mod canvas;
mod document;
mod writer;

pub use canvas::LopdfCanvas;
pub use document::{DocumentInfo, PdfDocument};
pub use writer::{PDF_VERSION, StreamingPdfWriter};
