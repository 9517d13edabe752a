use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrailleError {
    #[error("character not found in table: {0:?}")]
    CharacterNotFound(char),
    #[error("invalid dot cell data")]
    InvalidCell,
    #[error("character table error: {0}")]
    TableParse(String),
    #[error("canvas too large: {width}x{height}")]
    CanvasTooLarge { width: u64, height: u64 },
    #[error("formatting error")]
    Fmt(#[from] std::fmt::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, BrailleError>;
