//! brailleprint: lay out text as six-dot Braille cells and render them.
//! Formats: SVG documents, PNG images (feature `png`), Unicode Braille text.

mod cell;
mod error;
pub mod format;
pub mod layout;
mod metrics;
#[cfg(feature = "png")]
pub mod png;
pub mod svg;
mod table;
pub mod text;

pub use cell::{DotCell, Glyph, Indicator, CELL_COLS, CELL_ROWS};
pub use error::{BrailleError, Result};
pub use format::{convert, Artifact, Output, OutputFormat};
pub use layout::{Extent, Layout, LayoutEngine, LayoutSink, LayoutState, Placement, Symbol};
pub use metrics::{CanvasSpec, Metrics};
pub use table::CharTable;

// Test utilities
pub mod test_support;
