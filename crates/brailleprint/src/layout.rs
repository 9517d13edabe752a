//! Two-pass layout of text onto a grid of Braille cells.
//!
//! Both passes walk the same bookkeeping code and differ only in the
//! [`LayoutSink`] they feed: [`LayoutEngine::measure`] keeps per-row maxima,
//! [`LayoutEngine::place`] collects every [`Placement`].
use crate::{
    cell::{DotCell, Indicator},
    error::Result,
    metrics::{CanvasSpec, Metrics},
    table::CharTable,
};

/// Cursor position, 1-based. Each bookkeeping step consumes a state and
/// returns the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub column: u32,
    pub row: u32,
}

impl LayoutState {
    pub const START: LayoutState = LayoutState { column: 1, row: 1 };

    pub fn advance(self, columns: u32) -> Self {
        Self {
            column: self.column + columns,
            ..self
        }
    }

    pub fn next_row(self) -> Self {
        Self {
            column: 1,
            row: self.row + 1,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::START
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    Indicator(Indicator),
    /// Cell `index` of the glyph for `ch`.
    Char { ch: char, index: usize },
}

/// One cell resolved to its grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub symbol: Symbol,
    pub cell: DotCell,
    pub column: u32,
    pub row: u32,
}

/// Grid size touched by a text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// Widest row, in columns.
    pub columns: u32,
    pub rows: u32,
    /// Last occupied column of every row; 0 for a row without cells.
    pub row_widths: Vec<u32>,
}

/// Receives the cells produced while walking a text.
pub trait LayoutSink {
    fn place(&mut self, placement: Placement);
    fn next_row(&mut self) {}
}

impl LayoutSink for Vec<Placement> {
    fn place(&mut self, placement: Placement) {
        self.push(placement);
    }
}

struct Measure {
    row_widths: Vec<u32>,
}

impl LayoutSink for Measure {
    fn place(&mut self, placement: Placement) {
        if let Some(width) = self.row_widths.last_mut() {
            *width = (*width).max(placement.column);
        }
    }

    fn next_row(&mut self) {
        self.row_widths.push(0);
    }
}

impl From<Measure> for Extent {
    fn from(m: Measure) -> Self {
        Extent {
            columns: m.row_widths.iter().copied().max().unwrap_or(0),
            rows: m.row_widths.len() as u32,
            row_widths: m.row_widths,
        }
    }
}

/// Result of a full layout: placements plus the canvas they fit in.
#[derive(Clone, Debug)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub extent: Extent,
    pub canvas: CanvasSpec,
}

pub const LINE_BREAK: char = '\n';

pub struct LayoutEngine<'t> {
    table: &'t CharTable,
}

impl<'t> LayoutEngine<'t> {
    pub fn new(table: &'t CharTable) -> Self {
        Self { table }
    }

    /// Pass 1: grid size only.
    pub fn measure(&self, text: &str) -> Result<Extent> {
        let mut measure = Measure {
            row_widths: vec![0],
        };
        self.walk(text, &mut measure)?;
        let extent = Extent::from(measure);
        log::debug!(
            "measured {} columns x {} rows",
            extent.columns,
            extent.rows
        );
        Ok(extent)
    }

    /// Pass 2: every cell at its resolved position.
    pub fn place(&self, text: &str) -> Result<Vec<Placement>> {
        let mut placements = Vec::new();
        self.walk(text, &mut placements)?;
        log::debug!("placed {} cells", placements.len());
        Ok(placements)
    }

    pub fn layout(&self, text: &str, metrics: &Metrics) -> Result<Layout> {
        let extent = self.measure(text)?;
        let canvas = CanvasSpec::from_extent(&extent, metrics)?;
        let placements = self.place(text)?;
        debug_assert!(placements
            .iter()
            .all(|p| canvas.contains(p.column, p.row)));
        Ok(Layout {
            placements,
            extent,
            canvas,
        })
    }

    /// Walk `text` into `sink`, returning the final cursor.
    ///
    /// On error the sink may hold a prefix of the cells; callers drop it.
    pub fn walk<S: LayoutSink>(&self, text: &str, sink: &mut S) -> Result<LayoutState> {
        text.split(LINE_BREAK)
            .enumerate()
            .try_fold(LayoutState::START, |state, (i, line)| {
                let state = if i > 0 {
                    sink.next_row();
                    state.next_row()
                } else {
                    state
                };
                self.walk_line(line, state, sink)
            })
    }

    // Every whitespace character is one blank column, so consecutive words
    // get exactly one spacer and nothing trails the last word.
    fn walk_line<S: LayoutSink>(
        &self,
        line: &str,
        state: LayoutState,
        sink: &mut S,
    ) -> Result<LayoutState> {
        line.split(char::is_whitespace)
            .enumerate()
            .try_fold(state, |state, (i, word)| {
                let state = if i > 0 { state.advance(1) } else { state };
                self.walk_word(word, state, sink)
            })
    }

    fn walk_word<S: LayoutSink>(
        &self,
        word: &str,
        state: LayoutState,
        sink: &mut S,
    ) -> Result<LayoutState> {
        let mut pending = classify(word);
        word.chars().try_fold(state, |mut state, ch| {
            if ch.is_alphabetic() {
                if let Some(indicator) = pending.take() {
                    sink.place(Placement {
                        symbol: Symbol::Indicator(indicator),
                        cell: indicator.cell(),
                        column: state.column,
                        row: state.row,
                    });
                    state = state.advance(1);
                }
            }
            let (ch, glyph) = self.table.lookup(ch)?;
            for (index, cell) in glyph.cells().iter().enumerate() {
                sink.place(Placement {
                    symbol: Symbol::Char { ch, index },
                    cell: *cell,
                    column: state.column + index as u32,
                    row: state.row,
                });
            }
            Ok(state.advance(glyph.width()))
        })
    }
}

/// Which capital indicator, if any, a word needs.
///
/// Only alphabetic characters count. A word whose first letter is the only
/// capital is capitalized (this includes a lone capital letter); a word with
/// several letters and no lowercase one is fully upper; anything else is
/// written without an indicator.
pub fn classify(word: &str) -> Option<Indicator> {
    let mut letters = word.chars().filter(|c| c.is_alphabetic());
    let first = letters.next()?;
    if !first.is_uppercase() {
        return None;
    }
    let (mut upper, mut lower) = (false, false);
    for c in letters {
        upper |= c.is_uppercase();
        lower |= c.is_lowercase();
    }
    match (upper, lower) {
        (false, _) => Some(Indicator::Capital),
        (true, false) => Some(Indicator::Uppercase),
        (true, true) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_threaded_by_value() {
        let s = LayoutState::START.advance(3);
        assert_eq!(s, LayoutState { column: 4, row: 1 });
        assert_eq!(s.next_row(), LayoutState { column: 1, row: 2 });
        assert_eq!(LayoutState::START, LayoutState::default());
    }

    #[test]
    fn classify_words() {
        assert_eq!(classify("Ab"), Some(Indicator::Capital));
        assert_eq!(classify("A"), Some(Indicator::Capital));
        assert_eq!(classify("Hello,"), Some(Indicator::Capital));
        assert_eq!(classify("AB"), Some(Indicator::Uppercase));
        assert_eq!(classify("NASA's"), None);
        assert_eq!(classify("1AB"), Some(Indicator::Uppercase));
        assert_eq!(classify("McDonald"), None);
        assert_eq!(classify("abc"), None);
        assert_eq!(classify("123"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn measure_sink_tracks_rows() {
        let mut m = Measure {
            row_widths: vec![0],
        };
        let at = |column, row| Placement {
            symbol: Symbol::Indicator(Indicator::Capital),
            cell: Indicator::Capital.cell(),
            column,
            row,
        };
        m.place(at(4, 1));
        m.place(at(2, 1));
        m.next_row();
        m.next_row();
        m.place(at(7, 3));
        let e = Extent::from(m);
        assert_eq!(e.row_widths, vec![4, 0, 7]);
        assert_eq!((e.columns, e.rows), (7, 3));
    }
}
