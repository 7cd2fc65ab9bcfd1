use thiserror::Error;

/// Resource limits hit during a search.
///
/// The search stops at the point of failure; the plan passed to the solve call is left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search node arena exhausted ({max} nodes)")]
    NodeCapacity { max: usize },

    #[error("search expansion budget exhausted ({max} expansions)")]
    ExpansionBudget { max: usize },
}
