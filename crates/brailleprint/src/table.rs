//! Character tables mapping characters to Braille glyphs.
use crate::{
    cell::{DotCell, Glyph, CELL_COLS, CELL_ROWS},
    error::{BrailleError, Result},
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
#[cfg(feature = "json")]
use std::path::Path;

/// Read-only mapping from a (lowercase) character to its glyph.
///
/// A table is filled once through [`CharTable::insert`] or one of the loaders
/// and afterwards only read. It holds no interior mutability, so a single
/// instance can be shared between threads by reference.
#[derive(Clone, Debug, Default)]
pub struct CharTable {
    glyphs: HashMap<char, Glyph>,
}

impl CharTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }

    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.glyphs.iter().map(|(ch, g)| (*ch, g))
    }

    /// Case-insensitive lookup. Tables are keyed on lowercase letters, so the
    /// lowercase form is tried first, then the character as given. Returns
    /// the key that matched together with its glyph.
    pub fn lookup(&self, ch: char) -> Result<(char, &Glyph)> {
        let mut lower = ch.to_lowercase();
        let folded = match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => ch,
        };
        [folded, ch]
            .into_iter()
            .find_map(|key| self.get(key).map(|glyph| (key, glyph)))
            .ok_or(BrailleError::CharacterNotFound(ch))
    }

    /// Built-in uncontracted English table.
    pub fn english() -> &'static CharTable {
        &ENGLISH
    }

    /// Parse the JSON resource format: an object whose keys are single
    /// characters and whose values are lists of 3x2 `0`/`1` matrices.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Vec<Vec<u8>>>> = serde_json::from_str(json)
            .map_err(|e| BrailleError::TableParse(format!("json: {e}")))?;
        let mut table = CharTable::new();
        for (key, cells) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(BrailleError::TableParse(format!(
                        "key {key:?} is not a single character"
                    )))
                }
            };
            let cells = cells
                .iter()
                .map(|m| parse_matrix(m).map_err(|e| table_error(ch, e)))
                .collect::<Result<Vec<_>>>()?;
            let glyph = Glyph::new(cells).map_err(|e| table_error(ch, e))?;
            table.insert(ch, glyph);
        }
        log::debug!("loaded character table with {} entries", table.len());
        Ok(table)
    }

    #[cfg(feature = "json")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let json = std::str::from_utf8(bytes)
            .map_err(|e| BrailleError::TableParse(format!("utf8 error: {e}")))?;
        Self::from_json_str(json)
    }

    #[cfg(feature = "json")]
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(feature = "json")]
fn parse_matrix(rows: &[Vec<u8>]) -> Result<DotCell> {
    if rows.len() != CELL_ROWS || rows.iter().any(|r| r.len() != CELL_COLS) {
        return Err(BrailleError::InvalidCell);
    }
    let mut matrix = [[0u8; CELL_COLS]; CELL_ROWS];
    for (dst, src) in matrix.iter_mut().zip(rows) {
        dst.copy_from_slice(src);
    }
    DotCell::from_matrix(&matrix)
}

#[cfg(feature = "json")]
fn table_error(ch: char, err: BrailleError) -> BrailleError {
    BrailleError::TableParse(format!("entry {ch:?}: {err}"))
}

const LETTERS: [(char, &[u8]); 26] = [
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
    ('k', &[1, 3]),
    ('l', &[1, 2, 3]),
    ('m', &[1, 3, 4]),
    ('n', &[1, 3, 4, 5]),
    ('o', &[1, 3, 5]),
    ('p', &[1, 2, 3, 4]),
    ('q', &[1, 2, 3, 4, 5]),
    ('r', &[1, 2, 3, 5]),
    ('s', &[2, 3, 4]),
    ('t', &[2, 3, 4, 5]),
    ('u', &[1, 3, 6]),
    ('v', &[1, 2, 3, 6]),
    ('w', &[2, 4, 5, 6]),
    ('x', &[1, 3, 4, 6]),
    ('y', &[1, 3, 4, 5, 6]),
    ('z', &[1, 3, 5, 6]),
];

const PUNCTUATION: [(char, &[u8]); 8] = [
    (',', &[2]),
    (';', &[2, 3]),
    (':', &[2, 5]),
    ('.', &[2, 5, 6]),
    ('!', &[2, 3, 5]),
    ('?', &[2, 3, 6]),
    ('\'', &[3]),
    ('-', &[3, 6]),
];

const NUMBER_SIGN: &[u8] = &[3, 4, 5, 6];

static ENGLISH: Lazy<CharTable> = Lazy::new(|| {
    // Every dot list above is within 1..=6.
    let cell = |dots: &[u8]| DotCell::from_dots(dots).unwrap_or(DotCell::EMPTY);
    let mut table = CharTable::new();
    for (ch, dots) in LETTERS.iter().chain(PUNCTUATION.iter()) {
        table.insert(*ch, Glyph::single(cell(*dots)));
    }
    // Digits 1-9 and 0 reuse the cells of a-j behind the number sign.
    for (digit, (_, dots)) in "1234567890".chars().zip(LETTERS.iter()) {
        table.insert(
            digit,
            Glyph::from_cells([cell(NUMBER_SIGN), cell(*dots)]),
        );
    }
    table
});
