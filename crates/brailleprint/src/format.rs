//! Output formats: a cell renderer plus an assembler per format, and the
//! pipeline tying them to the layout engine.
use crate::{
    cell::DotCell,
    error::Result,
    layout::LayoutEngine,
    metrics::{CanvasSpec, Metrics},
    svg::{SvgDocument, SvgFormat},
    table::CharTable,
    text::TextFormat,
};
#[cfg(feature = "png")]
use crate::png::PngFormat;

/// Everything the pipeline needs to know about one output format.
pub trait OutputFormat {
    /// Rendered output for a single cell, carrying its own position.
    type Fragment;
    /// Finished document or image.
    type Artifact;

    fn metrics(&self) -> &Metrics;

    fn render_cell(&self, cell: DotCell, column: u32, row: u32) -> Self::Fragment;

    /// Allocate a canvas of exactly `canvas` size and apply `fragments` in order.
    fn assemble<I>(&self, canvas: &CanvasSpec, fragments: I) -> Result<Self::Artifact>
    where
        I: IntoIterator<Item = Self::Fragment>;
}

/// Lay out `text` and render it with `format`.
///
/// Fails without producing anything when a character is missing from `table`.
pub fn convert<F: OutputFormat>(text: &str, table: &CharTable, format: &F) -> Result<F::Artifact> {
    let layout = LayoutEngine::new(table).layout(text, format.metrics())?;
    let fragments = layout.placements.iter().map(|p| {
        log::trace!("cell {:?} at {}:{}", p.symbol, p.column, p.row);
        format.render_cell(p.cell, p.column, p.row)
    });
    format.assemble(&layout.canvas, fragments)
}

/// Tagged union over the built-in formats.
pub enum Output {
    Svg(SvgFormat),
    #[cfg(feature = "png")]
    Png(PngFormat),
    Text(TextFormat),
}

pub enum Artifact {
    Svg(SvgDocument),
    #[cfg(feature = "png")]
    Png(image::RgbaImage),
    Text(String),
}

impl Output {
    pub fn name(&self) -> &'static str {
        match self {
            Output::Svg(_) => "svg",
            #[cfg(feature = "png")]
            Output::Png(_) => "png",
            Output::Text(_) => "text",
        }
    }

    pub fn metrics(&self) -> &Metrics {
        match self {
            Output::Svg(f) => f.metrics(),
            #[cfg(feature = "png")]
            Output::Png(f) => f.metrics(),
            Output::Text(f) => f.metrics(),
        }
    }

    pub fn convert(&self, text: &str, table: &CharTable) -> Result<Artifact> {
        Ok(match self {
            Output::Svg(f) => Artifact::Svg(convert(text, table, f)?),
            #[cfg(feature = "png")]
            Output::Png(f) => Artifact::Png(convert(text, table, f)?),
            Output::Text(f) => Artifact::Text(convert(text, table, f)?),
        })
    }
}

impl Artifact {
    /// Width and height in the format's unit (characters for text).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Artifact::Svg(doc) => (doc.width(), doc.height()),
            #[cfg(feature = "png")]
            Artifact::Png(img) => img.dimensions(),
            Artifact::Text(s) => {
                let height = s.split('\n').count() as u32;
                let width = s.split('\n').map(|l| l.chars().count()).max().unwrap_or(0) as u32;
                (width, height)
            }
        }
    }

    /// Encoded bytes ready to be written to a file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Artifact::Svg(doc) => Ok(doc.as_str().as_bytes().to_vec()),
            #[cfg(feature = "png")]
            Artifact::Png(img) => {
                let mut buf = std::io::Cursor::new(Vec::new());
                img.write_to(&mut buf, image::ImageFormat::Png)?;
                Ok(buf.into_inner())
            }
            Artifact::Text(s) => {
                let mut bytes = s.clone().into_bytes();
                bytes.push(b'\n');
                Ok(bytes)
            }
        }
    }
}
