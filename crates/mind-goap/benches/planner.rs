use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mind_core::{Action, Condition, ConditionSet, Mind, Plan};
use mind_goap::{HeapFrontier, LinearFrontier, Planner};

fn toy_mind(bits: u32) -> (Mind, ConditionSet) {
    let mut mind = Mind::new();
    let mut goal = ConditionSet::EMPTY;
    for i in 0..bits {
        let bit: Condition = 1 << i;
        mind.add_action(
            Action::new("set_bit", 1)
                .with_entry(ConditionSet::EMPTY.with(bit, false))
                .with_exit(ConditionSet::EMPTY.with(bit, true)),
        );
        goal.write(bit, true);
    }
    (mind, goal)
}

fn bench_planner(c: &mut Criterion) {
    let (mind, goal) = toy_mind(6);
    let world = ConditionSet::new(0, goal.enabled);

    c.bench_function("mind-goap/heap.solve(bits=6)", |b| {
        let mut planner = Planner::<HeapFrontier>::default();
        let mut plan = Plan::new(&mind);
        b.iter(|| {
            let cost = planner
                .solve(&mind, &mut plan, world, goal, &())
                .expect("within capacity");
            black_box(cost);
        })
    });

    c.bench_function("mind-goap/linear.solve(bits=6)", |b| {
        let mut planner = Planner::<LinearFrontier>::default();
        let mut plan = Plan::new(&mind);
        b.iter(|| {
            let cost = planner
                .solve(&mind, &mut plan, world, goal, &())
                .expect("within capacity");
            black_box(cost);
        })
    });
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
