use std::collections::VecDeque;

use crate::{
    callback::SearchCallback,
    path::{KnightPath, SearchOutcome},
    settings::SearchSettings,
    universe::{NodeId, Universe},
};

/// A breadth-first search from the destination square back to the source square.
///
/// Searching backwards means the parent chain of the node holding the source square already reads
/// from source to destination, so the path never has to be reversed.
pub(crate) struct KnightSearch<Callback> {
    settings: SearchSettings<Callback>,
}

impl<Callback: SearchCallback> KnightSearch<Callback> {
    pub(crate) fn new(settings: SearchSettings<Callback>) -> Self {
        Self { settings }
    }

    pub(crate) fn run(mut self) -> SearchOutcome {
        let source = self.settings.source;
        let destination = self.settings.destination;
        let max_nodes = self.settings.max_nodes();
        let callback = &mut self.settings.callback;

        tracing::info!(
            "searching {} board from {source} to {destination}",
            self.settings.bounds,
        );

        let mut universe = Universe::new(self.settings.bounds);
        let mut fringe: VecDeque<NodeId> = VecDeque::with_capacity(max_nodes);

        // The universe is fresh, so the root is always registered
        fringe.extend(universe.insert_root(destination, callback));

        while let Some(&front) = fringe.front() {
            if universe.node(front).square == source {
                let path = KnightPath::new(universe.path_to_root(front));
                tracing::info!(
                    "found path with {} moves, {} squares registered",
                    path.moves(),
                    universe.len(),
                );
                return SearchOutcome::Found(path);
            }

            fringe.extend(universe.expand(front, callback));
            fringe.pop_front();
        }

        tracing::info!(
            "fringe exhausted, no path from {source} to {destination}, {} squares registered",
            universe.len(),
        );

        SearchOutcome::Exhausted
    }
}
