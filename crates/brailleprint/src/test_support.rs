//! Test support utilities for brailleprint.
//!
//! Synthetic tables and a recording sink that are handy in tests but are not
//! part of the stable API.

use crate::{CharTable, DotCell, Glyph, LayoutSink, Placement};

/// A small table: `a`, `b`, `c` as single cells, `w` spanning three cells
/// and `.` as a single cell. Nothing else is mapped.
pub fn sample_table() -> CharTable {
    let cell = |dots: &[u8]| DotCell::from_dots(dots).unwrap_or(DotCell::EMPTY);
    let mut table = CharTable::new();
    table.insert('a', Glyph::single(cell(&[1])));
    table.insert('b', Glyph::single(cell(&[1, 2])));
    table.insert('c', Glyph::single(cell(&[1, 4])));
    table.insert('.', Glyph::single(cell(&[2, 5, 6])));
    if let Ok(wide) = Glyph::new(vec![cell(&[4, 5, 6]), cell(&[2, 4, 5, 6]), cell(&[3])]) {
        table.insert('w', wide);
    }
    table
}

/// Events seen by a [`LayoutSink`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkEvent {
    Place(Placement),
    NextRow,
}

/// A sink that keeps every event for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.events.iter().filter_map(|e| match e {
            SinkEvent::Place(p) => Some(p),
            SinkEvent::NextRow => None,
        })
    }
}

impl LayoutSink for RecordingSink {
    fn place(&mut self, placement: Placement) {
        self.events.push(SinkEvent::Place(placement));
    }

    fn next_row(&mut self) {
        self.events.push(SinkEvent::NextRow);
    }
}
