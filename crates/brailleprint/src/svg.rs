//! Vector output.
use crate::{
    cell::{DotCell, CELL_COLS, CELL_ROWS},
    error::Result,
    format::OutputFormat,
    metrics::{CanvasSpec, Metrics},
};
use std::fmt::{self, Write};

const SVG_HEADER: &str = concat!(
    "<?xml version=\"1.0\" standalone=\"no\"?>\n",
    "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 20010904//EN\" ",
    "\"http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd\">\n",
);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke-width=\"0\" stroke=\"none\" fill=\"#000000\" fill-opacity=\"1\"/>",
            self.cx, self.cy, self.r
        )
    }
}

/// Raised dots of one cell. Flat dots produce no circle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgFragment {
    pub circles: Vec<Circle>,
}

/// A complete SVG document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    source: String,
}

impl SvgDocument {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[derive(Clone, Debug)]
pub struct SvgFormat {
    metrics: Metrics,
}

impl SvgFormat {
    pub fn new() -> Self {
        Self {
            metrics: Metrics::SVG,
        }
    }
}

impl Default for SvgFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormat for SvgFormat {
    type Fragment = SvgFragment;
    type Artifact = SvgDocument;

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn render_cell(&self, cell: DotCell, column: u32, row: u32) -> SvgFragment {
        let m = &self.metrics;
        let r = m.diameter / 2;
        let (x0, y0) = m.cell_origin(column, row);
        let mut circles = Vec::new();
        for i in 0..CELL_ROWS {
            for j in 0..CELL_COLS {
                if cell.is_raised(i, j) {
                    let (dx, dy) = m.dot_offset(i, j);
                    circles.push(Circle {
                        cx: x0 + r + dx,
                        cy: y0 + r + dy,
                        r,
                    });
                }
            }
        }
        SvgFragment { circles }
    }

    fn assemble<I>(&self, canvas: &CanvasSpec, fragments: I) -> Result<SvgDocument>
    where
        I: IntoIterator<Item = SvgFragment>,
    {
        let mut source = String::from(SVG_HEADER);
        writeln!(
            source,
            "<svg width=\"{}px\" height=\"{}px\" xmlns=\"http://www.w3.org/2000/svg\">",
            canvas.width, canvas.height
        )?;
        source.push_str("<desc>Braille</desc>\n");
        for fragment in fragments {
            for circle in &fragment.circles {
                writeln!(source, "{circle}")?;
            }
        }
        source.push_str("</svg>\n");
        Ok(SvgDocument {
            width: canvas.width,
            height: canvas.height,
            source,
        })
    }
}
