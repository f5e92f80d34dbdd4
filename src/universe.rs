//! The set of squares reached during one search.
//!
//! Nodes are stored in an append-only arena and refer to each other by [`NodeId`]. A registry of
//! square keys guarantees that each square gets at most one node, so the first node to reach a
//! square stays its parent for the rest of the search.

use cityhasher::{CityHasher, HashSet};

use crate::{
    bounds::BoardBounds,
    callback::SearchCallback,
    expander::{self, EXPANSION_NODES},
    square::Square,
};

/// Index of a node in the universe arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
pub(crate) struct SearchNode {
    pub(crate) square: Square,
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: usize,
    neighbors: Vec<NodeId>,
    expanded: bool,
}

pub(crate) struct Universe {
    bounds: BoardBounds,
    nodes: Vec<SearchNode>,
    registry: HashSet<u64, CityHasher>,
}

impl Universe {
    pub(crate) fn new(bounds: BoardBounds) -> Self {
        let capacity = bounds.num_squares();

        Self {
            bounds,
            nodes: Vec::with_capacity(capacity),
            registry: HashSet::with_capacity_and_hasher(capacity, CityHasher::default()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, square: Square) -> bool {
        self.registry.contains(&square.key())
    }

    pub(crate) fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Adds a node for `square` unless the square is already registered.
    fn register(&mut self, square: Square, parent: Option<NodeId>) -> Option<NodeId> {
        if !self.registry.insert(square.key()) {
            return None;
        }

        let depth = parent.map_or(0, |parent| self.node(parent).depth + 1);
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            square,
            parent,
            depth,
            neighbors: Vec::new(),
            expanded: false,
        });

        Some(id)
    }

    /// Registers the parentless node the search starts from.
    ///
    /// Returns `None` if `square` is already registered, which can only happen if the universe is
    /// reused.
    pub(crate) fn insert_root(
        &mut self,
        square: Square,
        callback: &mut impl SearchCallback,
    ) -> Option<NodeId> {
        let id = self.register(square, None)?;
        callback.new_square(0, square);
        Some(id)
    }

    /// Registers every unregistered knight move from node `id` as a child of `id`, and returns
    /// the children.
    ///
    /// A node is only ever expanded once. Later calls return the cached children.
    pub(crate) fn expand(&mut self, id: NodeId, callback: &mut impl SearchCallback) -> &[NodeId] {
        if !self.nodes[id.0].expanded {
            let square = self.node(id).square;
            let depth = self.node(id).depth;

            let mut expanded = [None; EXPANSION_NODES];
            expander::expand(square, self.bounds, &mut expanded);

            let mut neighbors = Vec::new();
            for candidate in expanded.into_iter().flatten() {
                if let Some(child) = self.register(candidate, Some(id)) {
                    callback.new_square(depth + 1, candidate);
                    neighbors.push(child);
                }
            }

            tracing::debug!(
                "expanded {square} at depth {depth}, {} new squares",
                neighbors.len(),
            );
            callback.end_of_expansion(depth, square, neighbors.len());

            let node = &mut self.nodes[id.0];
            node.neighbors = neighbors;
            node.expanded = true;
        }

        &self.nodes[id.0].neighbors
    }

    /// Walks the parent links from `id` up to the root.
    pub(crate) fn path_to_root(&self, id: NodeId) -> Vec<Square> {
        let mut squares = Vec::with_capacity(self.node(id).depth + 1);
        let mut current = Some(id);

        while let Some(id) = current {
            let node = self.node(id);
            squares.push(node.square);
            current = node.parent;
        }

        squares
    }
}
