use mind_core::{ConditionSet, Mind, Plan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{heuristic, Arena, DefaultFrontier, Frontier, Node, NodeId, NodeSet, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Upper bound on nodes a single search may create. Also bounds the open and closed sets.
    pub max_nodes: usize,
    /// Optional cap on node expansions per search.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: 256,
            max_expansions: None,
        }
    }
}

/// Counters from the most recent solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from open to closed.
    pub expanded: usize,
    /// Nodes allocated in the arena.
    pub created: usize,
    /// Open nodes given a cheaper path.
    pub improved: usize,
    /// Closed nodes given a cheaper path and moved back to open.
    pub reopened: usize,
}

/// A* search over the implicit graph a [`Mind`] defines.
///
/// The planner owns its search scratch (node arena, open and closed sets) and reuses it across
/// solves. One planner serves one search at a time; give each concurrent execution context its
/// own planner, or use [`crate::with_thread_planner`].
#[derive(Debug, Clone)]
pub struct Planner<F: Frontier = DefaultFrontier> {
    config: SearchConfig,
    arena: Arena,
    open: F,
    closed: NodeSet,
    stats: SearchStats,
}

impl<F: Frontier> Default for Planner<F> {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Frontier> Planner<F> {
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            arena: Arena::with_capacity(config.max_nodes),
            open: F::default(),
            closed: NodeSet::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Nodes left in the arena by the most recent search.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Find a minimum-cost action sequence turning `world` into `goal` and write it into `plan`.
    ///
    /// Returns `Ok(Some(cost))` with the summed action cost when a plan was found and `Ok(None)`
    /// when the goal is unreachable with the mind's actions. `plan` is emptied before the search,
    /// so after `Ok(None)` or an error it holds no actions and stepping it completes immediately.
    /// A goal that `world` already satisfies yields an empty plan without searching.
    pub fn solve<'m, C>(
        &mut self,
        mind: &'m Mind<C>,
        plan: &mut Plan<'m, C>,
        world: ConditionSet,
        goal: ConditionSet,
        ctx: &C,
    ) -> Result<Option<u32>, SearchError> {
        self.stats = SearchStats::default();
        self.arena.reset();
        self.open.clear();
        self.closed.clear();
        plan.load(mind, std::iter::empty());

        if goal.is_satisfied_by(&world) {
            tracing::debug!("goal already satisfied");
            return Ok(Some(0));
        }

        let root = self.arena.alloc(Node::root(world, heuristic(&world, &goal)))?;
        self.stats.created += 1;
        self.open.insert(&self.arena, root);

        while let Some(current) = self.open.pop_min(&self.arena) {
            let node = self.arena[current];
            if goal.is_satisfied_by(&node.state) {
                let path = self.arena.ancestry(current).filter_map(|id| self.arena[id].action);
                plan.load(mind, path);
                let cost = plan.total_cost();
                tracing::debug!(
                    cost,
                    g = node.g,
                    steps = plan.len(),
                    expanded = self.stats.expanded,
                    created = self.stats.created,
                    "plan found"
                );
                return Ok(Some(cost));
            }

            if let Some(max) = self.config.max_expansions {
                if self.stats.expanded >= max {
                    return Err(SearchError::ExpansionBudget { max });
                }
            }

            self.closed.insert(current);
            self.stats.expanded += 1;
            tracing::trace!(node = current.index(), g = node.g, f = node.f, "expanding");

            for (index, action) in mind.actions().iter().enumerate() {
                if !action.is_applicable(&node.state) || !action.permits(ctx) {
                    continue;
                }
                let g = node.g.saturating_add(action.cost);
                let state = action.apply(&node.state);
                let f = g.saturating_add(heuristic(&state, &goal));
                self.relax(current, index, state, g, f)?;
            }
        }

        tracing::debug!(
            expanded = self.stats.expanded,
            created = self.stats.created,
            "no plan"
        );
        Ok(None)
    }

    /// Record that `state` is reachable from `parent` through action `index` at cost `g`.
    fn relax(
        &mut self,
        parent: NodeId,
        index: usize,
        state: ConditionSet,
        g: u32,
        f: u32,
    ) -> Result<(), SearchError> {
        if let Some(existing) = self.open.find(&self.arena, &state) {
            if g < self.arena[existing].g {
                self.relink(existing, parent, index, state, g, f);
                self.open.decrease_key(&self.arena, existing);
                self.stats.improved += 1;
            }
            return Ok(());
        }

        if let Some(existing) = self.closed.find(&self.arena, &state) {
            if g < self.arena[existing].g {
                self.relink(existing, parent, index, state, g, f);
                self.closed.remove(existing);
                self.open.insert(&self.arena, existing);
                self.stats.reopened += 1;
            }
            return Ok(());
        }

        let id = self.arena.alloc(Node {
            parent: Some(parent),
            state,
            g,
            f,
            action: Some(index),
        })?;
        self.stats.created += 1;
        self.open.insert(&self.arena, id);
        Ok(())
    }

    fn relink(
        &mut self,
        id: NodeId,
        parent: NodeId,
        index: usize,
        state: ConditionSet,
        g: u32,
        f: u32,
    ) {
        let node = &mut self.arena[id];
        node.parent = Some(parent);
        node.state = state;
        node.action = Some(index);
        node.g = g;
        node.f = f;
    }
}
