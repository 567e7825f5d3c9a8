use std::fmt;
use std::io;
use std::path::Path;

use crate::DotmapError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file must be UTF-8 text with one command per line.",
        _ => "Scripts are plain text files with one dotmap command per line.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn dotmap_cli_error(context: &str, err: DotmapError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &DotmapError) -> String {
    use DotmapError::*;
    match err {
        WordNotFound(word) => format!("{word:?} is not in the wordlist. Check the spelling."),
        IndexOutOfWordlist(i) => format!("{i} is outside 0..=2047."),
        InvalidBitLength(n) => format!("expected 11 bits but got {n}."),
        InvalidBinary(s) => format!("{s:?} must contain only 0 and 1."),
        BitOutOfRange(i) => format!("bit {i} does not exist. Use 0 to 10."),
        InvalidWordlist(msg) => format!("{msg}. This is a bug."),
        Command(msg) => format!("{msg}. Type `help` for the command list."),
        Io(io) => format!("{io}"),
        Json(e) => format!("{e}. This is a bug."),
    }
}
