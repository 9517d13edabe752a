use crate::error::{BrailleError, Result};

/// One six-dot Braille cell.
///
/// Dots are stored as a bit set in Unicode Braille order, so dot `n` is bit
/// `n - 1`:
///
/// ```text
/// +---+---+
/// | 1 | 4 |
/// | 2 | 5 |
/// | 3 | 6 |
/// +---+---+
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DotCell(u8);

pub const CELL_ROWS: usize = 3;
pub const CELL_COLS: usize = 2;

impl DotCell {
    pub const EMPTY: DotCell = DotCell(0);

    /// Build a cell from dot numbers (1..=6).
    pub fn from_dots(dots: &[u8]) -> Result<Self> {
        let mut bits = 0u8;
        for &dot in dots {
            if !(1..=6).contains(&dot) {
                return Err(BrailleError::InvalidCell);
            }
            bits |= 1 << (dot - 1);
        }
        Ok(DotCell(bits))
    }

    /// Build a cell from a 3x2 matrix of `0`/`1` entries, rows top to bottom.
    pub fn from_matrix(matrix: &[[u8; CELL_COLS]; CELL_ROWS]) -> Result<Self> {
        let mut bits = 0u8;
        for (row, line) in matrix.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                match value {
                    0 => {}
                    1 => bits |= Self::bit(row, col),
                    _ => return Err(BrailleError::InvalidCell),
                }
            }
        }
        Ok(DotCell(bits))
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        DotCell(bits & 0x3F)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    const fn bit(row: usize, col: usize) -> u8 {
        1 << (col * CELL_ROWS + row)
    }

    pub fn is_raised(self, row: usize, col: usize) -> bool {
        row < CELL_ROWS && col < CELL_COLS && self.0 & Self::bit(row, col) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn matrix(self) -> [[bool; CELL_COLS]; CELL_ROWS] {
        let mut out = [[false; CELL_COLS]; CELL_ROWS];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, dot) in line.iter_mut().enumerate() {
                *dot = self.is_raised(row, col);
            }
        }
        out
    }

    /// Raised dot numbers in ascending order.
    pub fn dots(self) -> impl Iterator<Item = u8> {
        (1..=6u8).filter(move |d| self.0 & (1 << (d - 1)) != 0)
    }

    /// The matching character from the Unicode Braille Patterns block.
    pub fn to_unicode(self) -> char {
        char::from_u32(0x2800 + self.0 as u32).unwrap_or(' ')
    }
}

/// Ordered cells representing one input character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    cells: Vec<DotCell>,
}

impl Glyph {
    pub fn new(cells: Vec<DotCell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(BrailleError::InvalidCell);
        }
        Ok(Self { cells })
    }

    pub fn single(cell: DotCell) -> Self {
        Self { cells: vec![cell] }
    }

    pub(crate) fn from_cells<const N: usize>(cells: [DotCell; N]) -> Self {
        debug_assert!(N > 0);
        Self {
            cells: cells.to_vec(),
        }
    }

    pub fn cells(&self) -> &[DotCell] {
        &self.cells
    }

    /// Number of columns the glyph occupies.
    pub fn width(&self) -> u32 {
        self.cells.len() as u32
    }
}

/// Synthetic cells announcing capital letters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Single capital letter: dot 6.
    Capital,
    /// Whole word in capitals: dots 4 and 6.
    Uppercase,
}

impl Indicator {
    pub const fn cell(self) -> DotCell {
        match self {
            Indicator::Capital => DotCell::from_bits(0b10_0000),
            Indicator::Uppercase => DotCell::from_bits(0b10_1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_and_dots_agree() {
        let cell = DotCell::from_matrix(&[[1, 1], [0, 1], [1, 0]]).unwrap();
        assert_eq!(cell.dots().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
        assert_eq!(cell, DotCell::from_dots(&[5, 4, 3, 1]).unwrap());
        assert!(cell.is_raised(2, 0));
        assert!(!cell.is_raised(2, 1));
        assert!(!cell.is_raised(3, 0));
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(DotCell::from_matrix(&[[2, 0], [0, 0], [0, 0]]).is_err());
        assert!(DotCell::from_dots(&[7]).is_err());
        assert!(DotCell::from_dots(&[0]).is_err());
        assert!(Glyph::new(Vec::new()).is_err());
    }

    #[test]
    fn indicator_cells() {
        assert_eq!(
            Indicator::Capital.cell().matrix(),
            [[false, false], [false, false], [false, true]]
        );
        assert_eq!(
            Indicator::Uppercase.cell().matrix(),
            [[false, true], [false, false], [false, true]]
        );
    }

    #[test]
    fn unicode_mapping() {
        assert_eq!(DotCell::EMPTY.to_unicode(), '\u{2800}');
        assert_eq!(DotCell::from_dots(&[1]).unwrap().to_unicode(), '⠁');
        assert_eq!(DotCell::from_dots(&[1, 2, 3, 4, 5, 6]).unwrap().to_unicode(), '⠿');
        assert_eq!(Indicator::Capital.cell().to_unicode(), '⠠');
    }
}
