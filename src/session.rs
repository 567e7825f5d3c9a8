//! Selection session: the mutable state behind the dotmap screen.
//!
//! A session owns the current [`BitVector`], the raw text the user typed, and
//! the ordered list of committed words. The index and the resolved word are
//! never stored; they are recomputed from the bits on every read, so a view
//! taken after any transition is always current.
//!
//! Typed text and bits are only synchronised at the moment one of them is
//! edited. Editing bits directly leaves the typed text alone unless
//! [`Config::sync_input_on_toggle`] is set.

use serde::{Deserialize, Serialize};

use crate::bits::{to_bits, to_index, BitVector};
use crate::config::Config;
use crate::wordlist::Wordlist;

/// One user-triggered transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    ToggleBit(usize),
    SetInputWord(String),
    Clear,
    Commit,
    RemoveAt(usize),
}

/// Snapshot of everything a front-end displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub bits: BitVector,
    pub binary: String,
    pub word_index: u16,
    /// Resolved word, `None` when the index has no entry.
    pub word: Option<String>,
    pub input_word: String,
    pub committed_words: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SelectionSession {
    bits: BitVector,
    input_word: String,
    committed_words: Vec<String>,
    wordlist: Wordlist,
    config: Config,
}

impl SelectionSession {
    /// Fresh session over the English list: all bits clear, no text, no words.
    pub fn new() -> Self {
        Self::with_config(Wordlist::english(), Config::default())
    }

    pub fn with_config(wordlist: Wordlist, config: Config) -> Self {
        SelectionSession {
            bits: BitVector::zero(),
            input_word: String::new(),
            committed_words: Vec::new(),
            wordlist,
            config,
        }
    }

    /// Dispatch a single [`Action`].
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleBit(i) => self.toggle_bit(i),
            Action::SetInputWord(raw) => {
                self.set_input_word(&raw);
            }
            Action::Clear => self.clear(),
            Action::Commit => {
                self.commit();
            }
            Action::RemoveAt(i) => {
                self.remove_at(i);
            }
        }
    }

    /// Flip bit `i`.
    ///
    /// Panics if `i` is not a dotmap position; front-ends only emit `0..11`.
    pub fn toggle_bit(&mut self, i: usize) {
        self.bits.toggle(i);
        tracing::debug!(bit = i, index = self.word_index(), "toggled bit");
        self.sync_input();
    }

    fn sync_input(&mut self) {
        if self.config.sync_input_on_toggle {
            self.input_word = self
                .wordlist
                .word_at(self.word_index())
                .unwrap_or_default()
                .to_string();
        }
    }

    /// Store the lowercased text and, on an exact match, move the bits to it.
    ///
    /// Returns the matched index. On a miss the bits keep their previous value.
    pub fn set_input_word(&mut self, raw: &str) -> Option<u16> {
        self.input_word = raw.to_lowercase();
        let found = self.wordlist.index_of(&self.input_word);
        match found {
            Some(index) => {
                self.bits = to_bits(index);
                tracing::debug!(word = %self.input_word, index, "input word matched");
            }
            None => {
                tracing::debug!(word = %self.input_word, "input word not in wordlist");
            }
        }
        found
    }

    /// Replace all bits at once. Typed text follows the same rule as
    /// [`SelectionSession::toggle_bit`].
    pub fn set_bits(&mut self, bits: BitVector) {
        self.bits = bits;
        tracing::debug!(index = self.word_index(), "bits replaced");
        self.sync_input();
    }

    /// Jump straight to `index` (clamped to the dotmap range).
    pub fn set_index(&mut self, index: u16) {
        self.set_bits(to_bits(index));
    }

    /// Reset bits and typed text. Committed words survive.
    pub fn clear(&mut self) {
        self.bits = BitVector::zero();
        self.input_word.clear();
        tracing::debug!("cleared bits and input");
    }

    /// Append the current word, or the `N/A` sentinel if the index has none.
    pub fn commit(&mut self) -> &str {
        let word = self.display_word().to_string();
        tracing::debug!(word = %word, position = self.committed_words.len(), "committed word");
        self.committed_words.push(word);
        &self.committed_words[self.committed_words.len() - 1]
    }

    /// Remove the committed word at `i`. Out of range positions remove nothing.
    pub fn remove_at(&mut self, i: usize) -> Option<String> {
        if i >= self.committed_words.len() {
            tracing::debug!(position = i, len = self.committed_words.len(), "remove ignored");
            return None;
        }
        let removed = self.committed_words.remove(i);
        tracing::debug!(position = i, word = %removed, "removed word");
        Some(removed)
    }

    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    pub fn word_index(&self) -> u16 {
        to_index(&self.bits)
    }

    pub fn word(&self) -> Option<&'static str> {
        self.wordlist.word_at(self.word_index())
    }

    pub fn display_word(&self) -> &'static str {
        self.wordlist.display_word(self.word_index())
    }

    /// Bits as a string of `0` and `1`.
    pub fn binary_string(&self) -> String {
        self.bits.to_string()
    }

    pub fn input_word(&self) -> &str {
        &self.input_word
    }

    pub fn committed_words(&self) -> &[String] {
        &self.committed_words
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            bits: self.bits,
            binary: self.binary_string(),
            word_index: self.word_index(),
            word: self.word().map(str::to_string),
            input_word: self.input_word.clone(),
            committed_words: self.committed_words.clone(),
        }
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_routes_actions() {
        let mut session = SelectionSession::new();
        session.apply(Action::SetInputWord("Ability".into()));
        assert_eq!(session.word_index(), 1);
        session.apply(Action::Commit);
        session.apply(Action::ToggleBit(9));
        assert_eq!(session.word_index(), 3);
        session.apply(Action::Commit);
        session.apply(Action::RemoveAt(0));
        assert_eq!(session.committed_words(), ["about"]);
        session.apply(Action::Clear);
        assert_eq!(session.word_index(), 0);
        assert_eq!(session.input_word(), "");
        assert_eq!(session.committed_words().len(), 1);
    }

    #[test]
    fn sync_flag_mirrors_toggles_into_input() {
        let config = Config {
            sync_input_on_toggle: true,
        };
        let mut session = SelectionSession::with_config(Wordlist::english(), config);
        session.toggle_bit(10);
        assert_eq!(session.input_word(), "ability");
        session.set_input_word("zoo");
        session.set_index(1);
        assert_eq!(session.input_word(), "ability");
        session.set_bits("00000000011".parse().unwrap());
        assert_eq!(session.input_word(), "about");
    }

    #[test]
    fn view_reflects_current_bits() {
        let mut session = SelectionSession::new();
        session.set_index(5);
        let view = session.view();
        assert_eq!(view.word_index, 5);
        assert_eq!(view.binary, "00000000101");
        assert_eq!(view.word.as_deref(), session.word());
    }
}
