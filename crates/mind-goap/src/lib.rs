//! Bounded-arena A* planner producing `mind-core` plans.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod local;
pub mod planner;

pub use arena::{Arena, Node, NodeId};
pub use error::SearchError;
pub use frontier::{DefaultFrontier, Frontier, HeapFrontier, LinearFrontier, NodeSet};
pub use heuristic::heuristic;
pub use local::with_thread_planner;
pub use planner::{Planner, SearchConfig, SearchStats};
