use crate::{bounds::BoardBounds, callback::SearchCallback, square::Square};

/// Validated search parameters. Both squares lie inside `bounds`.
#[derive(Debug)]
pub(crate) struct SearchSettings<Callback> {
    pub(crate) bounds: BoardBounds,
    pub(crate) source: Square,
    pub(crate) destination: Square,
    pub(crate) callback: Callback,
}

impl<Callback: SearchCallback> SearchSettings<Callback> {
    /// Upper bound on the number of nodes a search with these settings can create.
    pub(crate) fn max_nodes(&self) -> usize {
        self.bounds.num_squares()
    }
}
