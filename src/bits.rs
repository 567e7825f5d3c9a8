//! Conversion between the 11-position dotmap and its word index.
//!
//! Bit `0` is the most significant position (weight `2^10`) and bit `10` the
//! least significant (weight `2^0`). Every one of the `2^11` patterns maps to
//! exactly one index in `0..=2047` and back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DotmapError;

/// Number of positions in a dotmap.
pub const BIT_WIDTH: usize = 11;
/// Largest index representable in [`BIT_WIDTH`] bits.
pub const MAX_INDEX: u16 = (1 << BIT_WIDTH) - 1;

/// Fixed-length dotmap, most significant bit first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVector([bool; BIT_WIDTH]);

impl BitVector {
    /// All positions cleared (index 0).
    pub const fn zero() -> Self {
        Self([false; BIT_WIDTH])
    }

    pub const fn from_array(bits: [bool; BIT_WIDTH]) -> Self {
        Self(bits)
    }

    /// Build from a slice, rejecting anything that is not exactly eleven long.
    pub fn from_slice(bits: &[bool]) -> Result<Self, DotmapError> {
        let array: [bool; BIT_WIDTH] = bits
            .try_into()
            .map_err(|_| DotmapError::InvalidBitLength(bits.len()))?;
        Ok(Self(array))
    }

    /// Value of position `i`, or `None` past the last bit.
    pub fn get(&self, i: usize) -> Option<bool> {
        self.0.get(i).copied()
    }

    /// Flip position `i`.
    ///
    /// Panics if `i >= BIT_WIDTH`.
    pub fn toggle(&mut self, i: usize) {
        assert!(i < BIT_WIDTH, "bit index {i} out of range");
        self.0[i] = !self.0[i];
    }

    pub fn as_array(&self) -> &[bool; BIT_WIDTH] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Index encoded by this pattern.
    pub fn index(&self) -> u16 {
        to_index(self)
    }
}

impl From<[bool; BIT_WIDTH]> for BitVector {
    fn from(bits: [bool; BIT_WIDTH]) -> Self {
        Self(bits)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitVector {
    type Err = DotmapError;

    /// Parse an eleven character string of `0` and `1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(BIT_WIDTH);
        for c in s.trim().chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(DotmapError::InvalidBinary(s.to_string())),
            }
        }
        Self::from_slice(&bits)
    }
}

/// Unsigned value of `bits`, reading position 0 as the high bit.
pub fn to_index(bits: &BitVector) -> u16 {
    bits.iter().fold(0u16, |value, bit| (value << 1) | bit as u16)
}

/// Eleven bit representation of `index`, high bit first.
///
/// Values above [`MAX_INDEX`] are clamped to [`MAX_INDEX`].
pub fn to_bits(index: u16) -> BitVector {
    let index = if index > MAX_INDEX {
        tracing::warn!(index, max = MAX_INDEX, "index above dotmap range, clamping");
        MAX_INDEX
    } else {
        index
    };
    let mut bits = [false; BIT_WIDTH];
    for (i, bit) in bits.iter_mut().enumerate() {
        let shift = BIT_WIDTH - 1 - i;
        *bit = (index >> shift) & 1 == 1;
    }
    BitVector(bits)
}
