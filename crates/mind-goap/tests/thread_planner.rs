use std::thread;

use mind_core::{Action, Condition, ConditionSet, Mind, Plan};
use mind_goap::with_thread_planner;

const LIT: Condition = 1 << 0;

#[test]
fn each_thread_solves_with_its_own_scratch() {
    let mut mind: Mind = Mind::new();
    mind.add_action(Action::new("light", 2).with_exit(ConditionSet::EMPTY.with(LIT, true)));
    let goal = ConditionSet::EMPTY.with(LIT, true);

    let costs: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut plan = Plan::new(&mind);
                    let cost = with_thread_planner(|planner| {
                        planner.solve(&mind, &mut plan, ConditionSet::EMPTY, goal, &())
                    });
                    (cost, plan.len())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("solver thread"))
            .collect()
    });

    assert_eq!(costs.len(), 4);
    for (cost, len) in costs {
        assert_eq!(cost, Ok(Some(2)));
        assert_eq!(len, 1);
    }
}

#[test]
fn thread_planner_is_reused_between_calls() {
    let mut mind: Mind = Mind::new();
    mind.add_action(Action::new("light", 1).with_exit(ConditionSet::EMPTY.with(LIT, true)));
    let goal = ConditionSet::EMPTY.with(LIT, true);

    let mut plan = Plan::new(&mind);
    with_thread_planner(|planner| planner.solve(&mind, &mut plan, ConditionSet::EMPTY, goal, &()))
        .unwrap();
    let created = with_thread_planner(|planner| planner.stats().created);
    assert_eq!(created, 2);
}
