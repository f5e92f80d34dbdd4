//! Defines the result types of a search.

use std::fmt;

use itertools::Itertools;
use serde_derive::Serialize;

use crate::square::Square;

/// A sequence of squares from the source square to the destination square. Always contains at
/// least one square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KnightPath {
    squares: Vec<Square>,
}

impl KnightPath {
    /// Only called by the search, which never produces an empty path.
    pub(crate) fn new(squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        Self { squares }
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[must_use]
    pub fn source(&self) -> Square {
        self.squares[0]
    }

    #[must_use]
    pub fn destination(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// The number of squares on the path, including both endpoints.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// The number of knight moves on the path.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    /// Iterates over each move as a `(from, to)` pair.
    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares.iter().copied().tuple_windows()
    }

    /// Returns true if every step is a legal knight move.
    #[must_use]
    pub fn is_knight_path(&self) -> bool {
        self.steps().all(|(from, to)| from.is_knight_move(to))
    }
}

impl fmt::Display for KnightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.squares.iter().join(" "))
    }
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The source square was reached. The path starts at the source square.
    Found(KnightPath),

    /// Every square reachable from the destination was expanded without reaching the source.
    Exhausted,
}

impl SearchOutcome {
    #[must_use]
    pub fn path(&self) -> Option<&KnightPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub fn into_path(self) -> Option<KnightPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
