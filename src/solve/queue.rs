use std::collections::VecDeque;

use crate::{
	cube::{turn::Move, State},
	LseError,
};

/// A handle to a node in the [`SearchTree`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// A state reached by the search, linked to the node it was reached from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Node {
	pub state: State,
	/// The move which turns the parent's state into this one, None for the root
	pub generator: Option<Move>,
	pub parent: Option<NodeId>,
	/// Number of moves from the root
	pub depth: usize,
}

impl Node {
	pub fn root(state: State) -> Self {
		Self {
			state,
			generator: None,
			parent: None,
			depth: 0,
		}
	}
}

/// Owns every node of a search. Nodes are never removed,
/// so a parent link stays valid until the tree is dropped.
#[derive(Default)]
pub struct SearchTree {
	nodes: Vec<Node>,
}

impl SearchTree {
	pub fn insert(&mut self, node: Node) -> NodeId {
		self.nodes.push(node);
		NodeId(self.nodes.len() - 1)
	}

	pub fn get(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Iterate from the given node up to the root, both included
	pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
		std::iter::successors(Some(self.get(id)), move |node| node.parent.map(|p| self.get(p)))
	}
}

/// The nodes waiting to be expanded, oldest first.
#[derive(Default)]
pub struct Frontier {
	pending: VecDeque<NodeId>,
}

impl Frontier {
	pub fn push(&mut self, id: NodeId) {
		self.pending.push_back(id);
	}

	/// Take the oldest node
	pub fn pop(&mut self) -> Result<NodeId, LseError> {
		self.pending.pop_front().ok_or(LseError::EmptyFrontier)
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn frontier_is_fifo() {
		let mut tree = SearchTree::default();
		let mut frontier = Frontier::default();

		let ids: Vec<_> = (0..5).map(|_| tree.insert(Node::root(State::solved()))).collect();
		for id in ids.iter() {
			frontier.push(*id);
		}
		assert_eq!(frontier.len(), 5);

		for id in ids.iter() {
			assert_eq!(frontier.pop(), Ok(*id));
		}
		assert!(frontier.is_empty());
		assert_eq!(frontier.pop(), Err(LseError::EmptyFrontier));
	}

	#[test]
	fn ancestry_walks_to_the_root() {
		let mut tree = SearchTree::default();
		let root = tree.insert(Node::root(State::solved()));

		let mut parent = root;
		for (depth, mv) in [Move::M, Move::U, Move::U].into_iter().enumerate() {
			let state = tree.get(parent).state.apply_move(mv);
			parent = tree.insert(Node {
				state,
				generator: Some(mv),
				parent: Some(parent),
				depth: depth + 1,
			});
		}

		let depths: Vec<_> = tree.ancestry(parent).map(|n| n.depth).collect();
		assert_eq!(depths, vec![3, 2, 1, 0]);
		assert_eq!(tree.ancestry(root).count(), 1);
		assert_eq!(tree.len(), 4);
	}
}
