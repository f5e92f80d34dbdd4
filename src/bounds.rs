//! Defines the `BoardBounds` type, the extent of the board the search runs on.

use std::fmt;

use thiserror::Error;

use crate::square::{InvalidSquare, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardBoundsError {
    #[error("Number of files ({files}) must be between 1 and {}", BoardBounds::MAX_FILES)]
    FilesOutOfRange { files: u8 },

    #[error("Number of ranks ({ranks}) must be between 1 and {}", BoardBounds::MAX_RANKS)]
    RanksOutOfRange { ranks: u8 },
}

/// The number of files and ranks on the board.
///
/// Files are named by a single letter and ranks by a single digit, so every square on any valid
/// board is written as exactly two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardBounds {
    files: u8,
    ranks: u8,
}

impl BoardBounds {
    pub const MAX_FILES: u8 = 26;
    pub const MAX_RANKS: u8 = 9;

    /// The standard 8x8 chessboard.
    pub const STANDARD: Self = Self { files: 8, ranks: 8 };

    pub fn new(files: u8, ranks: u8) -> Result<Self, BoardBoundsError> {
        if files == 0 || files > Self::MAX_FILES {
            return Err(BoardBoundsError::FilesOutOfRange { files });
        }
        if ranks == 0 || ranks > Self::MAX_RANKS {
            return Err(BoardBoundsError::RanksOutOfRange { ranks });
        }

        Ok(Self { files, ranks })
    }

    #[must_use]
    pub const fn files(self) -> u8 {
        self.files
    }

    #[must_use]
    pub const fn ranks(self) -> u8 {
        self.ranks
    }

    #[must_use]
    pub const fn num_squares(self) -> usize {
        self.files as usize * self.ranks as usize
    }

    /// Returns the square with zero-based indices `(file, rank)`, or `None` if it is off the board.
    #[must_use]
    pub fn square(self, file: u8, rank: u8) -> Option<Square> {
        (file < self.files && rank < self.ranks).then(|| Square::new_unchecked(file, rank))
    }

    #[must_use]
    pub fn contains(self, square: Square) -> bool {
        square.file() < self.files && square.rank() < self.ranks
    }

    /// Iterates over every square on the board, file by file.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.files)
            .flat_map(move |file| (0..self.ranks).map(move |rank| Square::new_unchecked(file, rank)))
    }

    fn last_file(self) -> char {
        char::from(b'A' + self.files - 1)
    }

    /// Parses a two-character token such as `"E4"` into a square on this board.
    pub fn parse_square(self, text: &str) -> Result<Square, InvalidSquare> {
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InvalidSquare::WrongLength {
                text: text.to_owned(),
            });
        };

        let last_file = self.last_file();
        if !('A'..=last_file).contains(&file) {
            return Err(InvalidSquare::FileOutOfRange {
                text: text.to_owned(),
                file,
                last: last_file,
            });
        }

        let last_rank = char::from(b'0' + self.ranks);
        if !('1'..=last_rank).contains(&rank) {
            return Err(InvalidSquare::RankOutOfRange {
                text: text.to_owned(),
                rank,
                last: self.ranks,
            });
        }

        // Both characters are ASCII at this point
        Ok(Square::new_unchecked(file as u8 - b'A', rank as u8 - b'1'))
    }
}

impl fmt::Display for BoardBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.files, self.ranks)
    }
}
