use mind_core::{Condition, ConditionSet};
use proptest::prelude::*;

fn condition_set() -> impl Strategy<Value = ConditionSet> {
    (any::<Condition>(), any::<Condition>()).prop_map(|(state, enabled)| {
        // Bits outside `enabled` are kept zero, as `write` and `merge` produce.
        ConditionSet {
            state: state & enabled,
            enabled,
        }
    })
}

proptest! {
    #[test]
    fn compare_is_symmetric(
        a in condition_set(),
        b in condition_set(),
        mask in any::<Condition>(),
    ) {
        prop_assert_eq!(
            ConditionSet::compare(&a, &b, mask),
            ConditionSet::compare(&b, &a, mask)
        );
    }

    #[test]
    fn compare_is_reflexive(a in condition_set(), mask in any::<Condition>()) {
        prop_assert!(ConditionSet::compare(&a, &a, mask));
    }

    #[test]
    fn merge_enables_the_union(a in condition_set(), b in condition_set()) {
        let merged = ConditionSet::merge(&a, &b);
        prop_assert_eq!(merged.enabled, a.enabled | b.enabled);
    }

    #[test]
    fn merge_keeps_base_bits_the_overlay_does_not_touch(
        a in condition_set(),
        b in condition_set(),
    ) {
        let merged = ConditionSet::merge(&a, &b);
        let base_only = a.enabled & !b.enabled;
        prop_assert_eq!(merged.state & base_only, a.state & base_only);
    }

    #[test]
    fn merge_takes_overlay_bits_regardless_of_base(a in condition_set(), b in condition_set()) {
        let merged = ConditionSet::merge(&a, &b);
        prop_assert_eq!(merged.state & b.enabled, b.state & b.enabled);
    }

    #[test]
    fn merged_state_satisfies_overlay(a in condition_set(), b in condition_set()) {
        prop_assert!(b.is_satisfied_by(&a.apply(&b)));
    }
}
