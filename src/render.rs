//! Plain text rendering of a session for terminal front-ends.

use std::fmt::Write;

use crate::bits::BIT_WIDTH;
use crate::session::SelectionSession;

/// Shown once when a front-end starts.
pub const SAFETY_NOTICE: &str = "This tool is for learning only. Never enter your actual wallet seed \
phrase. For your safety, clone the project from GitHub and run it offline on your own machine.";

/// Position labels above the dotmap row followed by one `0`/`1` per bit.
pub fn render_dotmap(session: &SelectionSession) -> String {
    let mut out = String::new();
    for i in 0..BIT_WIDTH {
        let _ = write!(out, "{i:>3}");
    }
    out.push('\n');
    for bit in session.bits().iter() {
        let _ = write!(out, "{:>3}", if bit { '1' } else { '0' });
    }
    out
}

/// The derived values: decimal index, resolved word and binary string.
pub fn render_summary(session: &SelectionSession) -> String {
    format!(
        "Decimal index: {}\nBIP39 Word:    {}\nBinary:        {}\nTyped word:    {}",
        session.word_index(),
        session.display_word(),
        session.binary_string(),
        session.input_word()
    )
}

/// Committed words as a numbered list, or the empty-state text.
pub fn render_word_list(session: &SelectionSession) -> String {
    let words = session.committed_words();
    if words.is_empty() {
        return "Word List\n  No items added yet\n  Type something in the field above and click \"+\"".to_string();
    }
    let mut out = format!("Word List ({})", words.len());
    for (i, word) in words.iter().enumerate() {
        let _ = write!(out, "\n{:>4} - {}", i + 1, word);
    }
    out
}

/// Full screen: dotmap, summary and list.
pub fn render_screen(session: &SelectionSession) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        render_dotmap(session),
        render_summary(session),
        render_word_list(session)
    )
}
