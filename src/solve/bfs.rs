use log::{debug, trace};
use rayon::prelude::*;

use super::{
	cache::VisitedCache,
	queue::{Frontier, Node, SearchTree},
	trace::Trace,
};
use crate::{
	codec::Codec,
	cube::{turn::*, State},
	LseError,
};

/// Counters describing how much of the state space a search explored
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
	/// Distinct states recorded as visited
	pub visited: usize,
	/// Nodes taken from the frontier and expanded
	pub expanded: usize,
	/// Depth of the deepest node taken from the frontier
	pub depth: usize,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SearchOutcome {
	/// The target was reached; the trace leads from the solved state to it
	Found { trace: Trace, stats: SearchStats },
	/// Every reachable state was visited without meeting the target
	NotFound { stats: SearchStats },
}

impl SearchOutcome {
	pub fn trace(&self) -> Option<&Trace> {
		match self {
			SearchOutcome::Found { trace, .. } => Some(trace),
			SearchOutcome::NotFound { .. } => None,
		}
	}

	pub fn stats(&self) -> &SearchStats {
		match self {
			SearchOutcome::Found { stats, .. } | SearchOutcome::NotFound { stats } => stats,
		}
	}

	pub fn is_found(&self) -> bool {
		matches!(self, SearchOutcome::Found { .. })
	}
}

/// Breadth first search from the solved state.
///
/// Every move costs the same and each state enters the frontier at most once,
/// so the first time the target is taken from the frontier it was reached
/// with as few quarter turns as possible.
pub struct Solver<'a> {
	codec: &'a Codec,
}

impl<'a> Solver<'a> {
	pub fn new(codec: &'a Codec) -> Self {
		Self { codec }
	}

	pub fn solve(&self, target: &State) -> Result<SearchOutcome, LseError> {
		self.solve_with(target, |_| {})
	}

	/// Like [`Solver::solve`], calling `progress` every time the search
	/// starts expanding a deeper layer.
	pub fn solve_with<F>(&self, target: &State, mut progress: F) -> Result<SearchOutcome, LseError>
	where
		F: FnMut(&SearchStats),
	{
		// Rejects states no move sequence could produce
		let target_code = self.codec.encode(target)?;
		debug!("Searching for {} (code {})", target, target_code);

		let mut tree = SearchTree::default();
		let mut frontier = Frontier::default();
		let mut cache = VisitedCache::new(self.codec.capacity());
		let mut stats = SearchStats::default();

		let start = State::solved();
		cache.record(self.codec.encode(&start)?)?;
		frontier.push(tree.insert(Node::root(start)));

		while !frontier.is_empty() {
			let id = frontier.pop()?;
			let node = *tree.get(id);
			stats.visited = cache.len();

			if node.depth > stats.depth {
				stats.depth = node.depth;
				trace!("Depth {}: {} visited, {} pending", stats.depth, stats.visited, frontier.len() + 1);
				progress(&stats);
			}

			if node.state == *target {
				let trace = Trace::from_tree(&tree, id);
				debug!(
					"Found a solution of {} moves after visiting {} states",
					trace.quarter_turns(),
					stats.visited
				);
				return Ok(SearchOutcome::Found { trace, stats });
			}

			// Turning back to the parent can never lead anywhere new
			let back = node.generator.map(Move::reverse);
			for mv in ALL_MOVES {
				if Some(mv) == back {
					continue;
				}

				let next = node.state.apply_move(mv);
				let code = self.codec.encode(&next)?;
				if cache.contains(code) {
					continue;
				}
				cache.record(code)?;

				frontier.push(tree.insert(Node {
					state: next,
					generator: Some(mv),
					parent: Some(id),
					depth: node.depth + 1,
				}));
			}

			stats.expanded += 1;
		}

		stats.visited = cache.len();
		debug!("Exhausted the search after visiting {} states", stats.visited);
		Ok(SearchOutcome::NotFound { stats })
	}

	/// Solve every target with its own search, running the searches in parallel.
	pub fn solve_batch(&self, targets: &[State]) -> Vec<Result<SearchOutcome, LseError>> {
		targets.par_iter().map(|target| self.solve(target)).collect()
	}
}
