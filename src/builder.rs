use thiserror::Error;

use crate::{
    bounds::BoardBounds,
    callback::{NoCallback, SearchCallback},
    path::SearchOutcome,
    search::KnightSearch,
    settings::SearchSettings,
    square::Square,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchBuilderError {
    #[error("`source` not set")]
    SourceNotSet,

    #[error("`destination` not set")]
    DestinationNotSet,

    #[error("`bounds` not set")]
    BoundsNotSet,

    #[error("`callback` not set")]
    CallbackNotSet,

    #[error("Square {square} is outside the {bounds} board")]
    SquareOutOfBounds { square: Square, bounds: BoardBounds },
}

#[derive(Debug)]
pub struct SearchBuilder<Callback> {
    source: Option<Square>,
    destination: Option<Square>,
    bounds: Option<BoardBounds>,
    callback: Option<Callback>,
}

impl<Callback: SearchCallback> Default for SearchBuilder<Callback> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Callback: SearchCallback> SearchBuilder<Callback> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            destination: None,
            bounds: None,
            callback: None,
        }
    }

    /// The square the path starts from.
    #[must_use]
    pub fn source(mut self, source: Square) -> Self {
        self.source = Some(source);
        self
    }

    /// The square the path ends on. The search starts here and works back to `source`.
    #[must_use]
    pub fn destination(mut self, destination: Square) -> Self {
        self.destination = Some(destination);
        self
    }

    #[must_use]
    pub fn bounds(mut self, bounds: BoardBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn run_no_defaults(self) -> Result<SearchOutcome, SearchBuilderError> {
        let bounds = self.bounds.ok_or(SearchBuilderError::BoundsNotSet)?;

        // Squares parsed against one board can still fall outside a smaller one
        let source = self.source.ok_or(SearchBuilderError::SourceNotSet)?;
        let destination = self
            .destination
            .ok_or(SearchBuilderError::DestinationNotSet)?;
        for square in [source, destination] {
            if !bounds.contains(square) {
                return Err(SearchBuilderError::SquareOutOfBounds { square, bounds });
            }
        }

        let settings = SearchSettings {
            bounds,
            source,
            destination,
            callback: self.callback.ok_or(SearchBuilderError::CallbackNotSet)?,
        };

        let search = KnightSearch::new(settings);
        Ok(search.run())
    }

    pub fn run(mut self) -> Result<SearchOutcome, SearchBuilderError> {
        self.bounds.get_or_insert(BoardBounds::STANDARD);

        self.run_no_defaults()
    }
}

/// Finds a shortest knight path from `source` to `destination` on the standard board.
#[must_use]
pub fn shortest_path(source: Square, destination: Square) -> SearchOutcome {
    let search = KnightSearch::new(SearchSettings {
        bounds: BoardBounds::STANDARD,
        source,
        destination,
        callback: NoCallback,
    });

    search.run()
}
