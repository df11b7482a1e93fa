use crate::cube::{turn::*, State};

use super::queue::{NodeId, SearchTree};

/// A sequence of quarter turn moves found by the search.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Trace {
	moves: Vec<Move>,
}

impl Trace {
	pub fn new(moves: Vec<Move>) -> Self {
		Self { moves }
	}

	/// Collect the moves leading from the root to the given node.
	pub fn from_tree(tree: &SearchTree, goal: NodeId) -> Self {
		let mut moves: Vec<Move> = tree.ancestry(goal).filter_map(|node| node.generator).collect();
		moves.reverse();
		Self { moves }
	}

	pub fn moves(&self) -> &[Move] {
		&self.moves
	}

	/// The logical length, a double turn counts twice
	pub fn quarter_turns(&self) -> usize {
		self.moves.len()
	}

	pub fn is_empty(&self) -> bool {
		self.moves.is_empty()
	}

	/// The moves in notation, adjacent identical moves written as doubles
	pub fn turns(&self) -> Vec<Turn> {
		compress_moves(&self.moves)
	}

	/// The inverse sequence: it takes the end state back to the start.
	/// For a trace found from the solved state, this solves the target.
	pub fn solution(&self) -> Self {
		Self {
			moves: self.moves.iter().rev().map(|m| m.reverse()).collect(),
		}
	}

	/// Apply the moves to the given state
	pub fn apply(&self, state: &State) -> State {
		state.apply_moves(self.moves.iter())
	}
}

impl std::fmt::Display for Trace {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", format_moves(&self.moves))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::solve::queue::Node;

	#[test]
	fn trace_from_tree_is_root_first() {
		let mut tree = SearchTree::default();
		let mut id = tree.insert(Node::root(State::solved()));

		let path = [Move::M, Move::U, Move::U, Move::MPrime];
		for (depth, mv) in path.into_iter().enumerate() {
			let state = tree.get(id).state.apply_move(mv);
			id = tree.insert(Node {
				state,
				generator: Some(mv),
				parent: Some(id),
				depth: depth + 1,
			});
		}

		let trace = Trace::from_tree(&tree, id);
		assert_eq!(trace.moves(), &path);
		assert_eq!(trace.quarter_turns(), 4);
		assert_eq!(trace.turns().len(), 3);
		assert_eq!(trace.to_string(), "M U2 M'");
		assert_eq!(trace.apply(&State::solved()), tree.get(id).state);
	}

	#[test]
	fn solution_undoes_the_trace() {
		let trace = Trace::new(parse_moves("M U' M2 U").unwrap());
		let solution = trace.solution();
		assert_eq!(solution.to_string(), "U' M2 U M'");

		let target = trace.apply(&State::solved());
		assert!(solution.apply(&target).is_solved());
		assert_eq!(solution.solution(), trace);
	}

	#[test]
	fn root_gives_empty_trace() {
		let mut tree = SearchTree::default();
		let root = tree.insert(Node::root(State::solved()));

		let trace = Trace::from_tree(&tree, root);
		assert!(trace.is_empty());
		assert_eq!(trace.to_string(), "");
	}
}
