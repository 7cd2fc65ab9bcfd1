use std::borrow::Cow;
use std::fmt::Write as _;

use crate::{Action, Condition, ConditionSet, MindError, MAX_CONDITIONS};

/// Knowledge base: the conditions an agent models and the actions it can take.
///
/// Condition bits are assigned first-come and never move. Both lists are append-only, so indices
/// handed out stay valid for the mind's lifetime. A mind is read-only while a planner searches it;
/// plans borrow it for as long as they reference its actions.
pub struct Mind<C = ()> {
    conditions: Vec<Cow<'static, str>>,
    actions: Vec<Action<C>>,
}

impl<C> Default for Mind<C> {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl<C> Mind<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit for `atom`, allocating the next free bit if the atom is new.
    pub fn register_condition(
        &mut self,
        atom: impl Into<Cow<'static, str>>,
    ) -> Result<Condition, MindError> {
        let atom = atom.into();
        if let Some(bit) = self.condition(&atom) {
            return Ok(bit);
        }
        let index = self.conditions.len() as u32;
        if index >= MAX_CONDITIONS {
            return Err(MindError::ConditionCapacity {
                max: MAX_CONDITIONS,
                atom: atom.into_owned(),
            });
        }
        tracing::debug!(atom = %atom, bit = index, "registered condition");
        self.conditions.push(atom);
        Ok(bit(index as usize))
    }

    /// Bit for an already registered `atom`.
    pub fn condition(&self, atom: &str) -> Option<Condition> {
        self.conditions
            .iter()
            .position(|known| known == atom)
            .map(bit)
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    pub fn condition_atom(&self, index: usize) -> Option<&str> {
        self.conditions.get(index).map(|atom| atom.as_ref())
    }

    /// Registered conditions in bit order, paired with their bit.
    pub fn conditions(&self) -> impl Iterator<Item = (Condition, &str)> + '_ {
        self.conditions
            .iter()
            .enumerate()
            .map(|(index, atom)| (bit(index), atom.as_ref()))
    }

    /// Append a copy of `action` and return its index. Duplicates are allowed.
    pub fn add_action(&mut self, action: Action<C>) -> usize {
        let index = self.actions.len();
        tracing::debug!(action = %action.name, index, cost = action.cost, "added action");
        self.actions.push(action);
        index
    }

    pub fn action(&self, index: usize) -> Option<&Action<C>> {
        self.actions.get(index)
    }

    pub fn actions(&self) -> &[Action<C>] {
        &self.actions
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Render the enabled bits of `set` as `{ atom ~negated }`.
    pub fn describe(&self, set: &ConditionSet) -> String {
        let mut out = String::from("{ ");
        for (bit, atom) in self.conditions() {
            if set.enabled & bit == 0 {
                continue;
            }
            if set.state & bit == 0 {
                out.push('~');
            }
            let _ = write!(out, "{atom} ");
        }
        out.push('}');
        out
    }
}

fn bit(index: usize) -> Condition {
    1 << index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_enabled_bits_only() {
        let mut mind: Mind = Mind::new();
        let hungry = mind.register_condition("is_hungry").unwrap();
        let money = mind.register_condition("has_money").unwrap();
        mind.register_condition("has_phone").unwrap();

        let set = ConditionSet::EMPTY.with(hungry, true).with(money, false);
        assert_eq!(mind.describe(&set), "{ is_hungry ~has_money }");
        assert_eq!(mind.describe(&ConditionSet::EMPTY), "{ }");
    }

    #[test]
    fn lookup_does_not_register() {
        let mut mind: Mind = Mind::new();
        assert_eq!(mind.condition("missing"), None);
        assert_eq!(mind.condition_count(), 0);
        let bit = mind.register_condition("present").unwrap();
        assert_eq!(mind.condition("present"), Some(bit));
    }
}
