//! Defines the `SearchCallback` trait.

use crate::square::Square;

/// Defines callback functions that run during the search.
pub trait SearchCallback {
    /// Called when a square is registered for the first time. The root is reported at depth 0.
    fn new_square(&mut self, depth: usize, square: Square);

    /// Called when a square has been expanded and `new_squares` neighbours were registered.
    fn end_of_expansion(&mut self, depth: usize, square: Square, new_squares: usize);
}

/// A callback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallback;

impl SearchCallback for NoCallback {
    fn new_square(&mut self, _depth: usize, _square: Square) {}

    fn end_of_expansion(&mut self, _depth: usize, _square: Square, _new_squares: usize) {}
}

/// Counts how many squares were discovered at each depth, and how many squares were expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthCounts {
    pub discovered: Vec<usize>,
    pub expanded: usize,
}

impl DepthCounts {
    #[must_use]
    pub fn total_discovered(&self) -> usize {
        self.discovered.iter().sum()
    }
}

impl SearchCallback for DepthCounts {
    fn new_square(&mut self, depth: usize, _square: Square) {
        if self.discovered.len() <= depth {
            self.discovered.resize(depth + 1, 0);
        }
        self.discovered[depth] += 1;
    }

    fn end_of_expansion(&mut self, _depth: usize, _square: Square, _new_squares: usize) {
        self.expanded += 1;
    }
}

impl<C: SearchCallback + ?Sized> SearchCallback for &mut C {
    fn new_square(&mut self, depth: usize, square: Square) {
        (**self).new_square(depth, square);
    }

    fn end_of_expansion(&mut self, depth: usize, square: Square, new_squares: usize) {
        (**self).end_of_expansion(depth, square, new_squares);
    }
}
