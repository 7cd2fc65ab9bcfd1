//! Condition algebra, knowledge base and plan storage for goal-oriented action planning.
//!
//! A [`Mind`] maps condition names to bits and holds the actions an agent knows. Together they
//! define an implicit graph over [`ConditionSet`]s which a planner (see `mind-goap`) searches to
//! fill a [`Plan`]. The plan is then stepped by the caller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod conditions;
pub mod error;
pub mod mind;
pub mod plan;

pub use action::{Action, Perform, Precondition};
pub use conditions::{Condition, ConditionSet, MAX_CONDITIONS};
pub use error::MindError;
pub use mind::Mind;
pub use plan::{Plan, PlanConfig, StepStatus};
