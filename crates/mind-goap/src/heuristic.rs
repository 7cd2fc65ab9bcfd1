use mind_core::{Condition, ConditionSet, MAX_CONDITIONS};

/// Search priority estimate for `state` against `goal`.
///
/// With `delta` the goal-enabled bits on which `state` and `goal` disagree, the estimate is
/// `MAX_CONDITIONS - bit_length(delta)`. It peaks at `MAX_CONDITIONS` when nothing mismatches and
/// shrinks as the highest mismatched bit rises, so it is not an admissible distance: nodes whose
/// mismatches sit in high bits are expanded first.
pub fn heuristic(state: &ConditionSet, goal: &ConditionSet) -> u32 {
    let delta = (state.state & goal.enabled) ^ (goal.state & goal.enabled);
    MAX_CONDITIONS - bit_length(delta)
}

fn bit_length(bits: Condition) -> u32 {
    Condition::BITS - bits.leading_zeros()
}
