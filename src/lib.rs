//! Shortest solutions for the last six edges (LSE) of the Roux method.
//!
//! ```
//! use rouxlse::prelude::*;
//!
//! let codec = Codec::new();
//! let target = State::solved().apply_moves(&parse_moves("M U M'").unwrap());
//!
//! let outcome = Solver::new(&codec).solve(&target).unwrap();
//! let trace = outcome.trace().unwrap();
//!
//! assert_eq!(trace.quarter_turns(), 3);
//! assert_eq!(trace.solution().to_string(), "M U' M'");
//! assert!(trace.solution().apply(&target).is_solved());
//! ```
//!
//! Only U and M quarter turns are searched, so the search space is small
//! enough to be explored exhaustively from the solved state.

pub mod codec;
pub mod cube;
mod error;
mod math;
pub mod solve;

pub use error::LseError;

pub mod prelude {
	pub use crate::codec::Codec;
	pub use crate::cube::{turn::*, *};
	pub use crate::solve::{SearchOutcome, SearchStats, Solver, Trace};
	pub use crate::LseError;
}
