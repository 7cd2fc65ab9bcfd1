use mind_core::{Condition, ConditionSet};

use crate::{Arena, NodeId};

/// Open set of a search: nodes waiting to be expanded, extracted lowest `f` first.
///
/// Ties on `f` go to the node created first, so every realization extracts nodes in the same
/// order and produces the same plans.
pub trait Frontier: Default {
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, arena: &Arena, id: NodeId);

    fn pop_min(&mut self, arena: &Arena) -> Option<NodeId>;

    /// Node whose state equals `state` over the full condition width.
    fn find(&self, arena: &Arena, state: &ConditionSet) -> Option<NodeId>;

    /// Restore ordering after `id`'s `f` was lowered in the arena.
    fn decrease_key(&mut self, arena: &Arena, id: NodeId);
}

#[cfg(not(feature = "linear-frontier"))]
pub type DefaultFrontier = HeapFrontier;
#[cfg(feature = "linear-frontier")]
pub type DefaultFrontier = LinearFrontier;

fn same_state(arena: &Arena, id: NodeId, state: &ConditionSet) -> bool {
    ConditionSet::compare(&arena[id].state, state, Condition::MAX)
}

fn precedes(arena: &Arena, a: NodeId, b: NodeId) -> bool {
    arena[a].key(a) < arena[b].key(b)
}

/// Unordered index set with linear membership lookup. Used as the closed set.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    ids: Vec<NodeId>,
}

impl NodeSet {
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn insert(&mut self, id: NodeId) {
        self.ids.push(id);
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|&known| known == id) {
            Some(pos) => {
                self.ids.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn find(&self, arena: &Arena, state: &ConditionSet) -> Option<NodeId> {
        self.ids
            .iter()
            .copied()
            .find(|&id| same_state(arena, id, state))
    }
}

/// Linear-scan open set: O(1) insert, O(n) extraction. Adequate for small problems.
#[derive(Debug, Clone, Default)]
pub struct LinearFrontier {
    set: NodeSet,
}

impl Frontier for LinearFrontier {
    fn clear(&mut self) {
        self.set.clear();
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn insert(&mut self, _arena: &Arena, id: NodeId) {
        self.set.insert(id);
    }

    fn pop_min(&mut self, arena: &Arena) -> Option<NodeId> {
        let best = self
            .set
            .ids
            .iter()
            .copied()
            .min_by_key(|&id| arena[id].key(id))?;
        self.set.remove(best);
        Some(best)
    }

    fn find(&self, arena: &Arena, state: &ConditionSet) -> Option<NodeId> {
        self.set.find(arena, state)
    }

    fn decrease_key(&mut self, _arena: &Arena, _id: NodeId) {}
}

/// Binary min-heap open set: O(log n) insert and extraction.
#[derive(Debug, Clone, Default)]
pub struct HeapFrontier {
    heap: Vec<NodeId>,
}

impl HeapFrontier {
    fn sift_up(&mut self, arena: &Arena, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !precedes(arena, self.heap[pos], self.heap[parent]) {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, arena: &Arena, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut min = pos;
            if left < len && precedes(arena, self.heap[left], self.heap[min]) {
                min = left;
            }
            if right < len && precedes(arena, self.heap[right], self.heap[min]) {
                min = right;
            }
            if min == pos {
                break;
            }
            self.heap.swap(pos, min);
            pos = min;
        }
    }
}

impl Frontier for HeapFrontier {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, arena: &Arena, id: NodeId) {
        self.heap.push(id);
        self.sift_up(arena, self.heap.len() - 1);
    }

    fn pop_min(&mut self, arena: &Arena) -> Option<NodeId> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(arena, 0);
        Some(min)
    }

    fn find(&self, arena: &Arena, state: &ConditionSet) -> Option<NodeId> {
        self.heap
            .iter()
            .copied()
            .find(|&id| same_state(arena, id, state))
    }

    fn decrease_key(&mut self, arena: &Arena, id: NodeId) {
        if let Some(pos) = self.heap.iter().position(|&known| known == id) {
            self.sift_up(arena, pos);
        }
    }
}
