use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::{ConditionSet, StepStatus};

pub type PreconditionFn<C> = dyn Fn(&Action<C>, &C) -> bool + Send + Sync;
pub type PerformFn<C> = dyn Fn(&Action<C>, &mut C) -> StepStatus + Send + Sync;

/// Dynamic gate checked against the caller's context during search.
///
/// Use this for applicability that cannot be expressed with static condition bits.
pub enum Precondition<C> {
    None,
    Check(Arc<PreconditionFn<C>>),
}

/// Behaviour run when a plan steps onto the action.
pub enum Perform<C> {
    None,
    Run(Arc<PerformFn<C>>),
}

impl<C> Clone for Precondition<C> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Check(f) => Self::Check(Arc::clone(f)),
        }
    }
}

impl<C> Clone for Perform<C> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Run(f) => Self::Run(Arc::clone(f)),
        }
    }
}

impl<C> fmt::Debug for Precondition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Check(_) => f.write_str("Check(..)"),
        }
    }
}

impl<C> fmt::Debug for Perform<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Run(_) => f.write_str("Run(..)"),
        }
    }
}

/// An edge of the planning graph.
///
/// `entry` holds the preconditions (compared under `entry.enabled`) and `exit` the effects
/// merged onto the state the action is applied to. Actions are immutable once a mind owns them.
pub struct Action<C = ()> {
    pub name: Cow<'static, str>,
    pub cost: u32,
    pub entry: ConditionSet,
    pub exit: ConditionSet,
    pub precondition: Precondition<C>,
    pub perform: Perform<C>,
}

impl<C> Action<C> {
    pub fn new(name: impl Into<Cow<'static, str>>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            entry: ConditionSet::EMPTY,
            exit: ConditionSet::EMPTY,
            precondition: Precondition::None,
            perform: Perform::None,
        }
    }

    pub fn with_entry(mut self, entry: ConditionSet) -> Self {
        self.entry = entry;
        self
    }

    pub fn with_exit(mut self, exit: ConditionSet) -> Self {
        self.exit = exit;
        self
    }

    pub fn with_precondition<F>(mut self, check: F) -> Self
    where
        F: Fn(&Action<C>, &C) -> bool + Send + Sync + 'static,
    {
        self.precondition = Precondition::Check(Arc::new(check));
        self
    }

    pub fn with_perform<F>(mut self, run: F) -> Self
    where
        F: Fn(&Action<C>, &mut C) -> StepStatus + Send + Sync + 'static,
    {
        self.perform = Perform::Run(Arc::new(run));
        self
    }

    /// Whether the static preconditions hold in `state`.
    pub fn is_applicable(&self, state: &ConditionSet) -> bool {
        ConditionSet::compare(&self.entry, state, self.entry.enabled)
    }

    /// Whether the dynamic precondition (if any) admits the action for `ctx`.
    pub fn permits(&self, ctx: &C) -> bool {
        match &self.precondition {
            Precondition::None => true,
            Precondition::Check(check) => check(self, ctx),
        }
    }

    pub fn apply(&self, state: &ConditionSet) -> ConditionSet {
        state.apply(&self.exit)
    }

    /// Run the perform behaviour; actions without one report [`StepStatus::Continuing`].
    pub fn perform(&self, ctx: &mut C) -> StepStatus {
        match &self.perform {
            Perform::None => StepStatus::Continuing,
            Perform::Run(run) => run(self, ctx),
        }
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            cost: self.cost,
            entry: self.entry,
            exit: self.exit,
            precondition: self.precondition.clone(),
            perform: self.perform.clone(),
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .field("entry", &self.entry)
            .field("exit", &self.exit)
            .field("precondition", &self.precondition)
            .field("perform", &self.perform)
            .finish()
    }
}
