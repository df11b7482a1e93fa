pub mod bfs;
pub mod cache;
pub mod queue;
pub mod trace;

pub use bfs::{SearchOutcome, SearchStats, Solver};
pub use trace::Trace;
