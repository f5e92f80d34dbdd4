//! Defines the knight move generator.

use crate::{bounds::BoardBounds, square::Square};

/// The number of candidate squares generated for each expanded square.
pub const EXPANSION_NODES: usize = 8;

/// Knight offsets as `(file_delta, rank_delta)`, in the order they are tried.
///
/// The outer step picks the long leg (rank -2, file -2, rank +2, file +2) and the inner step picks
/// the short leg along the other axis (-1, then +1). The order decides which of several equally
/// short paths the search reports.
pub const KNIGHT_OFFSETS: [(i8, i8); EXPANSION_NODES] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Given a square `square`, populates `expanded_squares` with the squares a knight can reach from
/// it. Candidates that would leave `bounds` are set to `None`; the remaining entries keep their
/// position in [`KNIGHT_OFFSETS`].
pub fn expand(
    square: Square,
    bounds: BoardBounds,
    expanded_squares: &mut [Option<Square>; EXPANSION_NODES],
) {
    for (slot, &(file_delta, rank_delta)) in expanded_squares.iter_mut().zip(&KNIGHT_OFFSETS) {
        *slot = square.offset(file_delta, rank_delta, bounds);
    }
}

/// Returns the squares a knight can reach from `square`, in generation order.
pub fn knight_moves(square: Square, bounds: BoardBounds) -> impl Iterator<Item = Square> {
    let mut expanded = [None; EXPANSION_NODES];
    expand(square, bounds, &mut expanded);
    expanded.into_iter().flatten()
}
