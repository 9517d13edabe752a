//! Fixed spacing constants per output format and the canvas sizes derived from them.
use crate::{
    error::{BrailleError, Result},
    layout::Extent,
};

/// Spacing constants of one output format, in that format's unit.
///
/// A cell occupies a `cell_width` x `cell_height` box whose top-left corner
/// sits at `column_pitch` / `row_pitch` multiples. Dots inside the box are
/// `dot_spacing` apart, origin to origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub diameter: u32,
    pub dot_spacing: u32,
    pub column_pitch: u32,
    pub row_pitch: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Metrics {
    /// Vector output in pixels. Every cell box includes its trailing gap,
    /// so the document is `columns * 24` wide and `rows * 40` high.
    pub const SVG: Metrics = Metrics {
        diameter: 4,
        dot_spacing: 7,   // floor(1.8 * diameter)
        column_pitch: 24, // floor(6 * diameter)
        row_pitch: 40,    // floor(10 * diameter)
        cell_width: 24,
        cell_height: 40,
    };

    /// Raster output in pixels, sized around 16px dot sprites.
    pub const PNG: Metrics = Metrics {
        diameter: 16,
        dot_spacing: 29,       // floor(1.85 * diameter)
        column_pitch: 45 + 47, // symbol width + floor(2.97 * diameter)
        row_pitch: 74 + 144,   // symbol height + floor(9 * diameter)
        cell_width: 45,        // diameter + dot_spacing
        cell_height: 74,       // diameter + 2 * dot_spacing
    };

    /// Unicode Braille output, one character per cell.
    pub const TEXT: Metrics = Metrics {
        diameter: 1,
        dot_spacing: 0,
        column_pitch: 1,
        row_pitch: 1,
        cell_width: 1,
        cell_height: 1,
    };

    /// Top-left corner of the cell at 1-based `(column, row)`.
    pub fn cell_origin(&self, column: u32, row: u32) -> (u32, u32) {
        (
            column.saturating_sub(1) * self.column_pitch,
            row.saturating_sub(1) * self.row_pitch,
        )
    }

    /// Offset of dot `(row, col)` inside a cell box.
    pub fn dot_offset(&self, row: usize, col: usize) -> (u32, u32) {
        (col as u32 * self.dot_spacing, row as u32 * self.dot_spacing)
    }

    fn span(count: u32, pitch: u32, size: u32) -> u64 {
        match count {
            0 => 0,
            n => (n as u64 - 1) * pitch as u64 + size as u64,
        }
    }
}

/// Output dimensions, fixed before anything is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSpec {
    pub columns: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    /// A text without cells still gets a canvas one unit wide, so raster
    /// encoders never see a zero-width image.
    pub fn from_extent(extent: &Extent, metrics: &Metrics) -> Result<Self> {
        let width = Metrics::span(extent.columns, metrics.column_pitch, metrics.cell_width).max(1);
        let height = Metrics::span(extent.rows, metrics.row_pitch, metrics.cell_height);
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self {
                columns: extent.columns,
                rows: extent.rows,
                width: w,
                height: h,
            }),
            _ => Err(BrailleError::CanvasTooLarge { width, height }),
        }
    }

    /// Whether a cell at `(column, row)` lies inside the declared grid.
    pub fn contains(&self, column: u32, row: u32) -> bool {
        (1..=self.columns).contains(&column) && (1..=self.rows).contains(&row)
    }
}
