use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Action, Mind};

/// Result of stepping a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// An action was executed and the plan may continue.
    Continuing,
    /// No actions remain.
    Completed,
    /// The executed action asked the caller to re-evaluate and re-solve.
    Interrupted,
}

/// Sizing of a plan's action buffer, in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanConfig {
    /// Capacity kept after [`Plan::reset`].
    pub min_capacity: usize,
    /// Elements added each time the buffer runs out of room.
    pub growth: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            min_capacity: 32,
            growth: 16,
        }
    }
}

/// A solved sequence of actions with an execution cursor.
///
/// Action indices are stored goal-first, the order in which the planner walks back from the goal.
/// Chronological position `i` lives at `acts[used - i - 1]`. `head` counts the actions not yet
/// executed and only ever decreases until the plan is refilled or reset.
pub struct Plan<'m, C = ()> {
    mind: &'m Mind<C>,
    acts: Vec<usize>,
    head: usize,
    config: PlanConfig,
}

impl<'m, C> Plan<'m, C> {
    pub fn new(mind: &'m Mind<C>) -> Self {
        Self::with_config(mind, PlanConfig::default())
    }

    pub fn with_config(mind: &'m Mind<C>, config: PlanConfig) -> Self {
        Self {
            mind,
            acts: Vec::with_capacity(config.min_capacity),
            head: 0,
            config,
        }
    }

    pub fn mind(&self) -> &'m Mind<C> {
        self.mind
    }

    pub fn config(&self) -> PlanConfig {
        self.config
    }

    /// Drop every action, shrink the buffer back to the minimum capacity and clear the cursor.
    pub fn reset(&mut self) {
        self.acts.clear();
        self.acts.shrink_to(self.config.min_capacity);
        self.acts.reserve_exact(self.config.min_capacity);
        self.head = 0;
    }

    /// Replace the plan with actions of `mind`, listed goal-first.
    ///
    /// Indices must name actions of `mind`. Out-of-range indices are a debug assertion failure and
    /// are dropped in release builds, so every stored index resolves.
    pub fn load<I>(&mut self, mind: &'m Mind<C>, goal_first: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.mind = mind;
        self.acts.clear();
        for index in goal_first {
            debug_assert!(
                index < mind.action_count(),
                "action index {index} out of range ({} actions)",
                mind.action_count()
            );
            if index >= mind.action_count() {
                tracing::warn!(index, "dropping unknown action index from plan");
                continue;
            }
            if self.acts.len() == self.acts.capacity() {
                self.acts.reserve_exact(self.config.growth.max(1));
            }
            self.acts.push(index);
        }
        self.head = self.acts.len();
    }

    /// Total number of actions in the plan.
    pub fn len(&self) -> usize {
        self.acts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }

    /// Number of actions not yet executed.
    pub fn remaining(&self) -> usize {
        self.head
    }

    pub fn is_complete(&self) -> bool {
        self.head == 0
    }

    /// Buffer capacity in elements.
    pub fn capacity(&self) -> usize {
        self.acts.capacity()
    }

    /// Action at chronological position `index` (0 is the first action to execute).
    pub fn action(&self, index: usize) -> Option<&'m Action<C>> {
        let used = self.acts.len();
        if index >= used {
            return None;
        }
        self.mind.action(self.acts[used - index - 1])
    }

    /// Index into the mind's action list at chronological position `index`.
    pub fn action_index(&self, index: usize) -> Option<usize> {
        let used = self.acts.len();
        (index < used).then(|| self.acts[used - index - 1])
    }

    /// The action the next [`Plan::step`] will execute.
    pub fn peek(&self) -> Option<&'m Action<C>> {
        self.action(self.acts.len() - self.head)
    }

    /// Execute the next action.
    ///
    /// The action's perform behaviour decides the result; actions without one continue. The
    /// plan does not track world state: callers apply the executed action's effects themselves.
    pub fn step(&mut self, ctx: &mut C) -> StepStatus {
        if self.head == 0 {
            return StepStatus::Completed;
        }
        self.head -= 1;
        let action = &self.mind.actions()[self.acts[self.head]];
        let status = action.perform(ctx);
        tracing::trace!(action = %action.name, remaining = self.head, ?status, "stepped plan");
        status
    }

    /// Actions in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &'m Action<C>> + '_ {
        let actions = self.mind.actions();
        self.acts.iter().rev().map(move |&index| &actions[index])
    }

    /// Sum of the costs of every action in the plan.
    pub fn total_cost(&self) -> u32 {
        self.iter()
            .fold(0u32, |total, action| total.saturating_add(action.cost))
    }
}

impl<C> fmt::Debug for Plan<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("acts", &self.acts)
            .field("head", &self.head)
            .field("config", &self.config)
            .finish()
    }
}
