//! Fixed 2048-entry vocabulary where a word's position is its dotmap value.

use std::collections::HashSet;
use std::fmt;

use crate::bits::MAX_INDEX;
use crate::DotmapError;

mod english;

pub use english::ENGLISH;

/// Number of entries in every wordlist.
pub const WORDLIST_LEN: usize = MAX_INDEX as usize + 1;
/// Text shown in place of a word when an index has no entry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Read-only view over a static wordlist.
#[derive(Clone, Copy)]
pub struct Wordlist {
    words: &'static [&'static str],
    sorted: bool,
}

impl Wordlist {
    /// The canonical English list ("abandon" .. "zoo").
    pub fn english() -> Self {
        Self {
            words: &ENGLISH,
            sorted: true,
        }
    }

    /// Wrap a caller supplied list after checking it holds exactly
    /// [`WORDLIST_LEN`] unique, non-empty, lowercase ASCII words.
    pub fn from_static(words: &'static [&'static str]) -> Result<Self, DotmapError> {
        if words.len() != WORDLIST_LEN {
            return Err(DotmapError::InvalidWordlist(format!(
                "expected {WORDLIST_LEN} words, got {}",
                words.len()
            )));
        }
        let mut seen = HashSet::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(DotmapError::InvalidWordlist(format!(
                    "entry {i} ({word:?}) is not a lowercase ascii word"
                )));
            }
            if !seen.insert(*word) {
                return Err(DotmapError::InvalidWordlist(format!(
                    "entry {i} ({word:?}) is a duplicate"
                )));
            }
        }
        let sorted = words.windows(2).all(|w| w[0] < w[1]);
        Ok(Self { words, sorted })
    }

    /// Word stored at `index`, or `None` when the index is negative or past
    /// the end.
    pub fn word_at<I>(&self, index: I) -> Option<&'static str>
    where
        I: TryInto<usize>,
    {
        let index = index.try_into().ok()?;
        self.words.get(index).copied()
    }

    /// Like [`Wordlist::word_at`] but falls back to [`NOT_AVAILABLE`].
    pub fn display_word<I>(&self, index: I) -> &'static str
    where
        I: TryInto<usize>,
    {
        self.word_at(index).unwrap_or(NOT_AVAILABLE)
    }

    /// Position of `word`, compared case-insensitively and exactly.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        let needle = word.to_lowercase();
        let found = if self.sorted {
            self.words
                .binary_search_by(|w| (*w).cmp(needle.as_str()))
                .ok()
        } else {
            self.words.iter().position(|w| *w == needle)
        };
        tracing::trace!(word = %needle, index = ?found, "wordlist lookup");
        found.map(|i| i as u16)
    }

    /// Strict variant of [`Wordlist::index_of`] for callers that want an error.
    pub fn require_index(&self, word: &str) -> Result<u16, DotmapError> {
        self.index_of(word)
            .ok_or_else(|| DotmapError::WordNotFound(word.to_lowercase()))
    }

    /// Strict variant of [`Wordlist::word_at`].
    pub fn require_word(&self, index: i128) -> Result<&'static str, DotmapError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.word_at(i))
            .ok_or(DotmapError::IndexOutOfWordlist(index))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("len", &self.words.len())
            .field("first", &self.words.first())
            .field("sorted", &self.sorted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_sorted_and_unique() {
        assert_eq!(ENGLISH.len(), WORDLIST_LEN);
        assert!(ENGLISH.windows(2).all(|w| w[0] < w[1]));
        let checked = Wordlist::from_static(&ENGLISH).unwrap();
        assert!(checked.sorted);
    }

    #[test]
    fn from_static_rejects_short_lists() {
        static SHORT: [&str; 2] = ["alpha", "beta"];
        assert!(matches!(
            Wordlist::from_static(&SHORT),
            Err(DotmapError::InvalidWordlist(_))
        ));
    }

    #[test]
    fn require_helpers_report_misses() {
        let list = Wordlist::english();
        assert_eq!(list.require_index("ZOO").unwrap(), 2047);
        assert!(matches!(
            list.require_index("Nope"),
            Err(DotmapError::WordNotFound(w)) if w == "nope"
        ));
        assert!(matches!(
            list.require_word(-1),
            Err(DotmapError::IndexOutOfWordlist(-1))
        ));
        assert_eq!(list.require_word(0).unwrap(), "abandon");
    }
}
