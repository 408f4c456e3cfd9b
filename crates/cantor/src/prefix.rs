//! Finite bit strings.
//!
//! A [`Prefix`] is the finite part of a sequence: the bits handed to
//! [`Cantor::prepend`](crate::Cantor::prepend) and the bits read back by
//! [`Cantor::take`](crate::Cantor::take). Its textual form uses `X` for `true`
//! and `_` for `false`, so `"X_X"` is `[true, false, true]`.

use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character rendered for a `true` bit.
pub const TRUE_CHAR: char = 'X';

/// Character rendered for a `false` bit.
pub const FALSE_CHAR: char = '_';

/// A finite, ordered string of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Prefix(Vec<bool>);

impl Prefix {
    /// The empty prefix.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of bits in the prefix.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Appends one bit, taking ownership and returning `self` for chaining.
    pub fn with(mut self, bit: bool) -> Self {
        self.0.push(bit);
        self
    }
}

impl From<Vec<bool>> for Prefix {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl From<&[bool]> for Prefix {
    fn from(bits: &[bool]) -> Self {
        Self(bits.to_vec())
    }
}

impl<const N: usize> From<[bool; N]> for Prefix {
    fn from(bits: [bool; N]) -> Self {
        Self(bits.to_vec())
    }
}

impl From<Prefix> for Vec<bool> {
    fn from(prefix: Prefix) -> Self {
        prefix.0
    }
}

impl FromIterator<bool> for Prefix {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            let c = if bit { TRUE_CHAR } else { FALSE_CHAR };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, found)| match found {
                TRUE_CHAR => Ok(true),
                FALSE_CHAR => Ok(false),
                _ => Err(PrefixError::InvalidBit { position, found }),
            })
            .collect()
    }
}

impl TryFrom<String> for Prefix {
    type Error = PrefixError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.to_string()
    }
}

/// Errors that can occur when parsing a textual prefix.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// A character other than `X` or `_` appeared in the input.
    #[error("invalid bit {found:?} at position {position}, expected 'X' or '_'")]
    InvalidBit { position: usize, found: char },
}
