//! Human-readable action recipes for `mind-core` knowledge bases.
//!
//! Recipes name their conditions with plain strings, optionally prefixed with `-` to negate them.
//! Teaching a recipe to a mind registers every condition it mentions and appends the resulting
//! action, so each mind only spends condition bits on what its own actions use.

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod recipe;

pub use domain::Domain;
pub use error::RecipeError;
pub use recipe::{learn, parse_conditions, parse_literal, ActionRecipe, GOAL_SEPARATOR};
