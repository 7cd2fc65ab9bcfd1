use std::ops::{Index, IndexMut};

use mind_core::ConditionSet;

use crate::SearchError;

/// Index of a node inside an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A search-time record of a reached condition set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Node this one was reached from; `None` for the root.
    pub parent: Option<NodeId>,
    pub state: ConditionSet,
    /// Cost of the best known path from the root.
    pub g: u32,
    /// Priority: `g` plus the heuristic estimate.
    pub f: u32,
    /// Index of the mind action that produced this node from its parent.
    pub action: Option<usize>,
}

impl Node {
    pub fn root(state: ConditionSet, h: u32) -> Self {
        Self {
            parent: None,
            state,
            g: 0,
            f: h,
            action: None,
        }
    }

    /// Ordering key shared by every frontier: lowest `f` first, then creation order.
    pub(crate) fn key(&self, id: NodeId) -> (u32, NodeId) {
        (self.f, id)
    }
}

/// Fixed-capacity node pool, reset in bulk between searches.
#[derive(Debug, Clone)]
pub struct Arena {
    nodes: Vec<Node>,
    max_nodes: usize,
}

impl Arena {
    pub fn with_capacity(max_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(max_nodes),
            max_nodes,
        }
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn alloc(&mut self, node: Node) -> Result<NodeId, SearchError> {
        if self.nodes.len() >= self.max_nodes {
            return Err(SearchError::NodeCapacity {
                max: self.max_nodes,
            });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Walk parent links from `id` up to and including the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self[current].parent)
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_fails_past_capacity_and_reset_reclaims() {
        let mut arena = Arena::with_capacity(2);
        let a = arena.alloc(Node::root(ConditionSet::EMPTY, 0)).unwrap();
        let b = arena.alloc(Node::root(ConditionSet::EMPTY, 0)).unwrap();
        assert_ne!(a, b);
        assert_eq!(
            arena.alloc(Node::root(ConditionSet::EMPTY, 0)),
            Err(SearchError::NodeCapacity { max: 2 })
        );

        arena.reset();
        assert!(arena.is_empty());
        assert_eq!(arena.alloc(Node::root(ConditionSet::EMPTY, 0)), Ok(a));
    }

    #[test]
    fn ancestry_ends_at_root() {
        let mut arena = Arena::with_capacity(4);
        let root = arena.alloc(Node::root(ConditionSet::EMPTY, 0)).unwrap();
        let child = arena
            .alloc(Node {
                parent: Some(root),
                state: ConditionSet::new(1, 1),
                g: 1,
                f: 1,
                action: Some(0),
            })
            .unwrap();
        let grandchild = arena
            .alloc(Node {
                parent: Some(child),
                state: ConditionSet::new(3, 3),
                g: 2,
                f: 2,
                action: Some(1),
            })
            .unwrap();

        let path: Vec<_> = arena.ancestry(grandchild).collect();
        assert_eq!(path, vec![grandchild, child, root]);
    }
}
