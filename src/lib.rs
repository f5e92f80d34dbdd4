//! Shortest knight paths on an empty chessboard.
//!
//! The search runs breadth-first from the destination square back to the source square. Squares
//! are discovered lazily, one expansion per square, and each square is registered at most once so
//! the first square to reach it stays its parent.
//!
//! ```
//! use knight_paths::{shortest_path, Square};
//!
//! let source: Square = "A1".parse().unwrap();
//! let destination: Square = "H8".parse().unwrap();
//!
//! let path = shortest_path(source, destination).into_path().unwrap();
//! assert_eq!(path.moves(), 6);
//! assert_eq!(path.to_string(), "A1 B3 C1 E2 F4 G6 H8");
//! ```

#![warn(clippy::must_use_candidate)]
#![deny(clippy::use_self)]
#![deny(clippy::if_not_else)]
#![deny(clippy::inconsistent_struct_constructor)]
#![deny(clippy::map_unwrap_or)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::similar_names)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::partialeq_to_none)]
#![deny(clippy::flat_map_option)]
#![deny(clippy::doc_markdown)]
#![deny(clippy::double_must_use)]
#![deny(clippy::iter_not_returning_iterator)]
#![deny(clippy::mod_module_files)]
#![deny(clippy::explicit_iter_loop)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::iter_with_drain)]
#![deny(clippy::branches_sharing_code)]
#![deny(clippy::redundant_clone)]

pub mod bounds;
pub mod builder;
pub mod callback;
pub mod expander;
pub mod path;
mod search;
mod settings;
pub mod square;
mod universe;

pub use bounds::{BoardBounds, BoardBoundsError};
pub use builder::{shortest_path, SearchBuilder, SearchBuilderError};
pub use callback::{DepthCounts, NoCallback, SearchCallback};
pub use path::{KnightPath, SearchOutcome};
pub use square::{InvalidSquare, Square};
