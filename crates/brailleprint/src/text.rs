//! Unicode Braille output (U+2800 block), handy for terminals.
use crate::{
    cell::DotCell,
    error::Result,
    format::OutputFormat,
    metrics::{CanvasSpec, Metrics},
};

const BLANK: char = '\u{2800}';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextCell {
    pub ch: char,
    pub column: u32,
    pub row: u32,
}

#[derive(Clone, Debug)]
pub struct TextFormat {
    metrics: Metrics,
}

impl TextFormat {
    pub fn new() -> Self {
        Self {
            metrics: Metrics::TEXT,
        }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormat for TextFormat {
    type Fragment = TextCell;
    type Artifact = String;

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn render_cell(&self, cell: DotCell, column: u32, row: u32) -> TextCell {
        TextCell {
            ch: cell.to_unicode(),
            column,
            row,
        }
    }

    /// One line per row, every line padded with blank cells to the canvas width.
    fn assemble<I>(&self, canvas: &CanvasSpec, fragments: I) -> Result<String>
    where
        I: IntoIterator<Item = TextCell>,
    {
        let mut grid = vec![vec![BLANK; canvas.width as usize]; canvas.height as usize];
        for cell in fragments {
            let (x, y) = self.metrics.cell_origin(cell.column, cell.row);
            if let Some(slot) = grid
                .get_mut(y as usize)
                .and_then(|line| line.get_mut(x as usize))
            {
                *slot = cell.ch;
            }
        }
        Ok(grid
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
