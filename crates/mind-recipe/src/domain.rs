use std::path::Path;

use mind_core::Mind;
use serde::{Deserialize, Serialize};

use crate::{learn, ActionRecipe, RecipeError};

/// A set of recipes that together make up an agent's repertoire.
///
/// Domains load from YAML (or JSON) documents of the form:
///
/// ```yaml
/// actions:
///   - name: eat food
///     cost: 1
///     entry: [has_food]
///     exit: [-has_food, -is_hungry]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub actions: Vec<ActionRecipe>,
}

impl Domain {
    pub fn from_yaml_str(source: &str) -> Result<Self, RecipeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, RecipeError> {
        let source = std::fs::read_to_string(path).map_err(|source| RecipeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let domain = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), actions = domain.actions.len(), "loaded domain");
        Ok(domain)
    }

    /// Teach every recipe to `mind`, in order.
    pub fn teach<C>(&self, mind: &mut Mind<C>) -> Result<(), RecipeError> {
        for recipe in &self.actions {
            learn(mind, recipe)?;
        }
        Ok(())
    }

    /// A hungry agent with a phone, a phonebook, a stove and questionable morals.
    pub fn pizza() -> Self {
        Self {
            actions: vec![
                ActionRecipe::new("order pizza", 2)
                    .requires(["is_hungry", "has_number", "has_phone", "has_money"])
                    .yields(["has_food", "-has_money"]),
                ActionRecipe::new("bake pie", 4)
                    .requires(["is_hungry", "has_recipe"])
                    .yields(["has_food"]),
                ActionRecipe::new("take candy from baby", 1)
                    .requires(["has_target", "is_desperate", "is_hungry"])
                    .yields(["has_food"]),
                ActionRecipe::new("find baby", 1)
                    .requires(["-has_target"])
                    .yields(["has_target"]),
                ActionRecipe::new("search phonebook", 2)
                    .requires(["-has_number"])
                    .yields(["has_number"]),
                ActionRecipe::new("get phone", 1)
                    .requires(["-has_phone"])
                    .yields(["has_phone"]),
                ActionRecipe::new("call mom for recipe", 6)
                    .requires(["has_phone"])
                    .yields(["has_recipe"]),
                ActionRecipe::new("eat food", 1)
                    .requires(["has_food"])
                    .yields(["-has_food", "-is_hungry"]),
            ],
        }
    }
}
