//! Stable exit codes for the `knight-paths` binary.

/// A path, a "no path" message, or usage text was printed.
pub const OK: u8 = 0;
/// The result could not be written.
pub const OUTPUT_FAILED: u8 = 1;
/// A square argument was not a valid square on the board.
pub const INVALID_SQUARE: u8 = 2;
/// `--files` or `--ranks` described an unsupported board.
pub const INVALID_BOUNDS: u8 = 3;
