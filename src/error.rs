use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotmapError {
    /// Typed word has no exact match in the wordlist.
    #[error("word not found: {0}")]
    WordNotFound(String),

    /// Index falls outside `0..2048`.
    #[error("index {0} is outside the wordlist")]
    IndexOutOfWordlist(i128),

    /// A bit sequence that is not exactly eleven entries long.
    #[error("expected 11 bits, got {0}")]
    InvalidBitLength(usize),

    /// Binary text containing something other than `0` and `1`.
    #[error("invalid binary string: {0}")]
    InvalidBinary(String),

    /// Bit position outside `0..11`.
    #[error("bit {0} is out of range")]
    BitOutOfRange(usize),

    /// Wordlist that is not 2048 unique lowercase ASCII words.
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    /// Unparseable front-end command line.
    #[error("command error: {0}")]
    Command(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
