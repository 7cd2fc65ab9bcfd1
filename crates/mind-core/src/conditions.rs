#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bitset holding one bit per registered condition.
#[cfg(feature = "conditions-64")]
pub type Condition = u64;
/// Bitset holding one bit per registered condition.
#[cfg(all(feature = "conditions-16", not(feature = "conditions-64")))]
pub type Condition = u16;
/// Bitset holding one bit per registered condition.
#[cfg(not(any(feature = "conditions-16", feature = "conditions-64")))]
pub type Condition = u32;

/// Maximum number of distinct conditions a single mind can register.
pub const MAX_CONDITIONS: u32 = Condition::BITS;

/// A partial boolean assignment over conditions.
///
/// `enabled` marks the bits that carry information; every other bit is "don't care". `state`
/// holds the asserted (1) or negated (0) value for enabled bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionSet {
    pub state: Condition,
    pub enabled: Condition,
}

impl ConditionSet {
    pub const EMPTY: Self = Self {
        state: 0,
        enabled: 0,
    };

    pub const fn new(state: Condition, enabled: Condition) -> Self {
        Self { state, enabled }
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Equality of `a` and `b` restricted to the bits in `mask`.
    pub fn compare(a: &Self, b: &Self, mask: Condition) -> bool {
        (a.state & mask) == (b.state & mask)
    }

    /// Set (`value = true`) or clear the bits in `set` and mark them enabled.
    pub fn write(&mut self, set: Condition, value: bool) {
        if value {
            self.state |= set;
        } else {
            self.state &= !set;
        }
        self.enabled |= set;
    }

    /// Builder form of [`ConditionSet::write`].
    pub fn with(mut self, set: Condition, value: bool) -> Self {
        self.write(set, value);
        self
    }

    /// Bits enabled in `overlay` take its value; all other bits keep `base`'s value.
    ///
    /// The result is enabled wherever either operand is.
    pub fn merge(base: &Self, overlay: &Self) -> Self {
        let enabled = overlay.enabled;
        Self {
            state: (overlay.state & enabled) | (base.state & !enabled),
            enabled: enabled | base.enabled,
        }
    }

    /// `merge(self, effects)`: the state reached after applying `effects` on top of `self`.
    pub fn apply(&self, effects: &Self) -> Self {
        Self::merge(self, effects)
    }

    /// Whether `world` matches this set on every enabled bit.
    pub fn is_satisfied_by(&self, world: &Self) -> bool {
        Self::compare(world, self, self.enabled)
    }

    /// Enabled bits whose value is asserted.
    pub fn asserted(&self) -> Condition {
        self.state & self.enabled
    }

    /// Enabled bits whose value is negated.
    pub fn negated(&self) -> Condition {
        !self.state & self.enabled
    }
}
