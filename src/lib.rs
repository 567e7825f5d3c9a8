//! Core logic for the BIP-39 dotmap explorer.
//!
//! An 11-position dotmap encodes an index in `0..=2047`, and the index picks a
//! word from a fixed 2048-entry wordlist. [`bits`] converts between the two
//! representations, [`wordlist`] resolves words in both directions, and
//! [`session`] holds the state a front-end mutates.

pub mod bits;
pub mod command;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod render;
pub mod session;
pub mod wordlist;

pub use bits::{to_bits, to_index, BitVector, BIT_WIDTH, MAX_INDEX};
pub use command::Command;
pub use config::Config;
pub use error::DotmapError;
pub use session::{Action, SelectionSession, SessionView};
pub use wordlist::{Wordlist, NOT_AVAILABLE, WORDLIST_LEN};
