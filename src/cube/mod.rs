pub mod turn;

use std::str::FromStr;

use rand::Rng;
use strum::{EnumCount, IntoEnumIterator};
use turn::*;

use crate::{math::is_even_permutation, LseError};

/// The number of positions a layer can take relative to its aligned position
pub const NUM_OFFSETS: u8 = 4;

// ===== Edge Piece =====

/// The six edges still unsolved after the first two blocks.
/// The discriminant is the label used in the textual state format.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::Display, strum::FromRepr,
)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Edge {
	#[default]
	DF, DB, UB, UF, // M slice
	UL, UR,
}

pub const NUM_EDGES: usize = Edge::COUNT;

pub type Ori = u8;

/// The slots of the U layer, each one moving to the next on a clockwise turn
const U_FACE: [Edge; 4] = [Edge::UF, Edge::UL, Edge::UB, Edge::UR];
/// The slots of the M slice, each one moving to the next on a clockwise turn
const M_FACE: [Edge; 4] = [Edge::DF, Edge::DB, Edge::UB, Edge::UF];

const SOLVED_EDGES: [Edge; NUM_EDGES] = [Edge::DF, Edge::DB, Edge::UB, Edge::UF, Edge::UL, Edge::UR];

/// A configuration of the last six edges.
///
/// States are plain values: applying a move returns a new state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct State {
	/// `edges_position[slot]` is the edge sitting in that slot
	pub edges_position: [Edge; NUM_EDGES],
	/// `edges_orientation[edge]` is 1 if that edge is misoriented, wherever it is
	pub edges_orientation: [Ori; NUM_EDGES],
	/// Quarter turns the M slice is away from alignment
	pub m_offset: u8,
	/// Quarter turns the U layer is away from alignment
	pub u_offset: u8,
}

impl Default for State {
	/// Creates a *solved* state
	fn default() -> Self {
		Self::solved()
	}
}

impl State {
	pub const fn solved() -> Self {
		Self {
			edges_position: SOLVED_EDGES,
			edges_orientation: [0; NUM_EDGES],
			m_offset: 0,
			u_offset: 0,
		}
	}

	pub fn is_solved(&self) -> bool {
		*self == Self::solved()
	}

	/// Return the state after turning the given layer a quarter.
	///
	/// A U turn made while the M slice sits an odd number of quarters off
	/// has the front/back centers on top, which flips every edge in the U layer.
	pub fn apply_move(&self, mv: Move) -> Self {
		let mut out = *self;
		let face = match mv.layer() {
			Layer::U => &U_FACE,
			Layer::M => &M_FACE,
		};

		for i in 0..face.len() {
			let (from, to) = if mv.is_prime() {
				(face[(i + 1) % 4], face[i])
			} else {
				(face[i], face[(i + 1) % 4])
			};
			out.edges_position[to as usize] = self.edges_position[from as usize];
		}

		let step = if mv.is_prime() { NUM_OFFSETS - 1 } else { 1 };
		match mv.layer() {
			Layer::U => {
				out.u_offset = (self.u_offset + step) % NUM_OFFSETS;

				if self.m_offset % 2 == 1 {
					for slot in U_FACE {
						let edge = out.edges_position[slot as usize];
						out.edges_orientation[edge as usize] ^= 1;
					}
				}
			}
			Layer::M => out.m_offset = (self.m_offset + step) % NUM_OFFSETS,
		}

		out
	}

	pub fn apply_moves<'a, I>(&self, moves: I) -> Self
	where
		I: IntoIterator<Item = &'a Move>,
	{
		moves.into_iter().fold(*self, |state, mv| state.apply_move(*mv))
	}

	/// Scramble a solved state with a random walk of `depth` quarter turns.
	/// A move is never directly followed by its reverse.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, depth: usize) -> Self {
		let mut state = Self::solved();
		let mut last: Option<Move> = None;

		for _ in 0..depth {
			let mv = loop {
				let mv = ALL_MOVES[rng.gen_range(0..NUM_MOVES)];
				if last != Some(mv.reverse()) {
					break mv;
				}
			};
			state = state.apply_move(mv);
			last = Some(mv);
		}

		state
	}

	/// The orientation as a 6-bit pattern, the first edge being the most significant bit
	pub fn orientation_pattern(&self) -> u8 {
		self.edges_orientation
			.iter()
			.fold(0, |pattern, o| (pattern << 1) | (o & 1))
	}

	/// Check the physical constraints: a true permutation, binary orientations
	/// with an even number of flips and offsets within range.
	pub fn is_valid(&self) -> bool {
		let mut contains = [false; NUM_EDGES];
		for e in self.edges_position.iter() {
			contains[*e as usize] = true;
		}
		if contains.into_iter().any(|b| !b) {
			return false;
		}

		if self.edges_orientation.iter().any(|o| *o > 1) {
			return false;
		}
		if self.orientation_pattern().count_ones() % 2 != 0 {
			return false;
		}

		self.m_offset < NUM_OFFSETS && self.u_offset < NUM_OFFSETS
	}

	/// Every quarter turn is a 4-cycle of edges and moves one offset by one,
	/// so only states whose permutation parity matches the parity of the
	/// summed offsets can be reached from the solved state.
	pub fn is_reachable(&self) -> bool {
		let perm: Vec<usize> = self.edges_position.iter().map(|e| *e as usize).collect();
		self.is_valid() && is_even_permutation(&perm) == ((self.m_offset + self.u_offset) % 2 == 0)
	}

	/// Build a state out of the four fields of the textual format,
	/// e.g. ("251304", "100001", "2", "2").
	pub fn from_fields(position: &str, orientation: &str, m_offset: &str, u_offset: &str) -> Result<Self, LseError> {
		let mut state = Self::solved();

		let labels: Vec<_> = position.chars().map(|c| c.to_digit(10)).collect();
		if labels.len() != NUM_EDGES {
			return Err(LseError::InvalidState(format!(
				"edge position \"{}\" must have {} digits",
				position, NUM_EDGES
			)));
		}
		for (slot, label) in labels.into_iter().enumerate() {
			state.edges_position[slot] = label
				.and_then(|l| Edge::from_repr(l as u8))
				.ok_or_else(|| LseError::InvalidState(format!("edge position \"{}\" must only use digits 0-5", position)))?;
		}
		let mut contains = [false; NUM_EDGES];
		for e in state.edges_position {
			if contains[e as usize] {
				return Err(LseError::NotAPermutation(position.to_string()));
			}
			contains[e as usize] = true;
		}

		let flips: Vec<_> = orientation.chars().collect();
		if flips.len() != NUM_EDGES {
			return Err(LseError::InvalidState(format!(
				"edge orientation \"{}\" must have {} digits",
				orientation, NUM_EDGES
			)));
		}
		for (edge, flip) in flips.into_iter().enumerate() {
			state.edges_orientation[edge] = match flip {
				'0' => 0,
				'1' => 1,
				_ => {
					return Err(LseError::InvalidState(format!(
						"edge orientation \"{}\" must be binary",
						orientation
					)))
				}
			};
		}
		let pattern = state.orientation_pattern();
		if pattern.count_ones() % 2 != 0 {
			return Err(LseError::OddOrientation(pattern));
		}

		state.m_offset = parse_offset(m_offset)?;
		state.u_offset = parse_offset(u_offset)?;

		Ok(state)
	}
}

fn parse_offset(field: &str) -> Result<u8, LseError> {
	let mut chars = field.chars();
	let offset = match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
		(Some(digit), None) => digit as u8,
		_ => {
			return Err(LseError::InvalidState(format!(
				"layer offset \"{}\" must be a single digit",
				field
			)))
		}
	};
	if offset >= NUM_OFFSETS {
		return Err(LseError::OffsetOutOfRange(offset));
	}
	Ok(offset)
}

impl std::fmt::Display for State {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for e in self.edges_position {
			write!(f, "{}", e as u8)?;
		}
		write!(f, " ")?;
		for o in self.edges_orientation {
			write!(f, "{}", o)?;
		}
		write!(f, " {} {}", self.m_offset, self.u_offset)
	}
}

impl FromStr for State {
	type Err = LseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fields: Vec<_> = s.split_whitespace().collect();
		match fields[..] {
			[position, orientation, m_offset, u_offset] => Self::from_fields(position, orientation, m_offset, u_offset),
			_ => Err(LseError::InvalidState(format!(
				"expected 4 fields, got {} in \"{}\"",
				fields.len(),
				s
			))),
		}
	}
}

/// Print the name of every slot together with the edge sitting in it
pub fn describe(state: &State) -> String {
	Edge::iter()
		.map(|slot| {
			let edge = state.edges_position[slot as usize];
			let flip = if state.edges_orientation[edge as usize] == 1 { "*" } else { "" };
			format!("{}:{}{}", slot, edge, flip)
		})
		.collect::<Vec<_>>()
		.join(" ")
}
