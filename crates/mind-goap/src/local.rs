use std::cell::RefCell;

use crate::Planner;

thread_local! {
    static PLANNER: RefCell<Planner> = RefCell::new(Planner::new());
}

/// Run `f` with this thread's planner.
///
/// Each thread gets its own search scratch, so solves on different threads never share state.
///
/// # Panics
///
/// Panics if called again from inside `f` on the same thread (for example from an action's
/// precondition during a solve).
pub fn with_thread_planner<R>(f: impl FnOnce(&mut Planner) -> R) -> R {
    PLANNER.with(|planner| f(&mut planner.borrow_mut()))
}
