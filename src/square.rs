//! Defines the `Square` type and its textual form.

use std::{fmt, str::FromStr};

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::BoardBounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSquare {
    #[error("square `{text}` must be exactly two characters")]
    WrongLength { text: String },

    #[error("file `{file}` of square `{text}` is not in A-{last}")]
    FileOutOfRange { text: String, file: char, last: char },

    #[error("rank `{rank}` of square `{text}` is not in 1-{last}")]
    RankOutOfRange { text: String, rank: char, last: u8 },
}

/// A square on the board, stored as zero-based file and rank indices.
///
/// A `Square` can only be obtained through [`BoardBounds`] (or the [`FromStr`] impl, which uses
/// [`BoardBounds::STANDARD`]), so both indices are always inside the bounds it was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Only called by `BoardBounds` after checking the indices.
    pub(crate) const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Zero-based file index, `A` is 0.
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index, `1` is 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn file_char(self) -> char {
        char::from(b'A' + self.file)
    }

    #[must_use]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank)
    }

    /// Packs the square into the key used by the search registry.
    pub(crate) fn key(self) -> u64 {
        (u64::from(self.file) << 8) | u64::from(self.rank)
    }

    /// Returns the square `(file_delta, rank_delta)` away from this one, or `None` if it would
    /// leave `bounds`.
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8, bounds: BoardBounds) -> Option<Self> {
        let file = self.file.checked_add_signed(file_delta)?;
        let rank = self.rank.checked_add_signed(rank_delta)?;
        bounds.square(file, rank)
    }

    /// Returns true if a knight can move from `self` to `other` in one move.
    #[must_use]
    pub fn is_knight_move(self, other: Self) -> bool {
        let df = self.file.abs_diff(other.file);
        let dr = self.rank.abs_diff(other.rank);
        matches!((df, dr), (1, 2) | (2, 1))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardBounds::STANDARD.parse_square(s)
    }
}

impl TryFrom<String> for Square {
    type Error = InvalidSquare;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}
