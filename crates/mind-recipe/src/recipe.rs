use mind_core::{Action, ConditionSet, Mind};
use serde::{Deserialize, Serialize};

use crate::RecipeError;

/// Word that switches [`parse_conditions`] from writing the world to writing the goal.
pub const GOAL_SEPARATOR: &str = ":";

/// An action described with condition names instead of bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecipe {
    pub name: String,
    #[serde(default)]
    pub cost: u32,
    /// Preconditions; `-name` requires the condition to be false.
    #[serde(default)]
    pub entry: Vec<String>,
    /// Effects; `-name` makes the condition false.
    #[serde(default)]
    pub exit: Vec<String>,
}

impl ActionRecipe {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            entry: Vec::new(),
            exit: Vec::new(),
        }
    }

    pub fn requires<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry.extend(conditions.into_iter().map(Into::into));
        self
    }

    pub fn yields<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exit.extend(conditions.into_iter().map(Into::into));
        self
    }

    /// Register the recipe's conditions on `mind` and build the action without adding it.
    ///
    /// Use this to attach a precondition or perform behaviour before calling
    /// [`Mind::add_action`].
    pub fn build<C>(&self, mind: &mut Mind<C>) -> Result<Action<C>, RecipeError> {
        let entry = register_all(mind, &self.entry)?;
        let exit = register_all(mind, &self.exit)?;
        Ok(Action::new(self.name.clone(), self.cost)
            .with_entry(entry)
            .with_exit(exit))
    }
}

/// Teach `recipe` to `mind`, returning the new action's index.
pub fn learn<C>(mind: &mut Mind<C>, recipe: &ActionRecipe) -> Result<usize, RecipeError> {
    let action = recipe.build(mind)?;
    Ok(mind.add_action(action))
}

/// Split `-name` into `("name", false)` and `name` into `("name", true)`.
pub fn parse_literal(word: &str) -> Result<(&str, bool), RecipeError> {
    let (atom, value) = match word.strip_prefix('-') {
        Some(atom) => (atom, false),
        None => (word, true),
    };
    if atom.is_empty() {
        return Err(RecipeError::EmptyCondition);
    }
    Ok((atom, value))
}

fn register_all<C>(mind: &mut Mind<C>, words: &[String]) -> Result<ConditionSet, RecipeError> {
    let mut set = ConditionSet::EMPTY;
    for word in words {
        let (atom, value) = parse_literal(word)?;
        let bit = mind.register_condition(atom.to_owned())?;
        set.write(bit, value);
    }
    Ok(set)
}

/// Parse a world and a goal from condition words.
///
/// Words before [`GOAL_SEPARATOR`] describe the world, words after it the goal. Every condition
/// must already be known to `mind`.
pub fn parse_conditions<C, S>(
    mind: &Mind<C>,
    words: &[S],
) -> Result<(ConditionSet, ConditionSet), RecipeError>
where
    S: AsRef<str>,
{
    let mut world = ConditionSet::EMPTY;
    let mut goal = ConditionSet::EMPTY;
    let mut target = &mut world;
    for word in words {
        let word = word.as_ref();
        if word == GOAL_SEPARATOR {
            target = &mut goal;
            continue;
        }
        let (atom, value) = parse_literal(word)?;
        let bit = mind
            .condition(atom)
            .ok_or_else(|| RecipeError::UnknownCondition(atom.to_owned()))?;
        target.write(bit, value);
    }
    Ok((world, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_prefix_negates() {
        assert_eq!(parse_literal("has_food").unwrap(), ("has_food", true));
        assert_eq!(parse_literal("-has_food").unwrap(), ("has_food", false));
        assert!(matches!(parse_literal("-"), Err(RecipeError::EmptyCondition)));
        assert!(matches!(parse_literal(""), Err(RecipeError::EmptyCondition)));
    }

    #[test]
    fn build_registers_conditions_in_mention_order() {
        let mut mind: Mind = Mind::new();
        let recipe = ActionRecipe::new("eat food", 1)
            .requires(["has_food"])
            .yields(["-has_food", "-is_hungry"]);
        let action = recipe.build(&mut mind).unwrap();

        assert_eq!(mind.condition("has_food"), Some(1 << 0));
        assert_eq!(mind.condition("is_hungry"), Some(1 << 1));
        assert_eq!(action.entry, ConditionSet::EMPTY.with(1 << 0, true));
        assert_eq!(action.exit, ConditionSet::EMPTY.with(0b11, false));
        assert_eq!(action.name, "eat food");
        // Building alone does not teach the action.
        assert_eq!(mind.action_count(), 0);
    }

    #[test]
    fn goal_separator_switches_target() {
        let mut mind: Mind = Mind::new();
        let hungry = mind.register_condition("is_hungry").unwrap();
        let food = mind.register_condition("has_food").unwrap();

        let (world, goal) =
            parse_conditions(&mind, &["is_hungry", "-has_food", ":", "-is_hungry"]).unwrap();
        assert_eq!(world, ConditionSet::EMPTY.with(hungry, true).with(food, false));
        assert_eq!(goal, ConditionSet::EMPTY.with(hungry, false));
    }

    #[test]
    fn unknown_conditions_are_rejected() {
        let mind: Mind = Mind::new();
        let err = parse_conditions(&mind, &["flying"]).unwrap_err();
        assert!(matches!(err, RecipeError::UnknownCondition(name) if name == "flying"));
    }
}
