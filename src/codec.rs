//! A bijection between valid states and the dense range `0..CAPACITY`.
//!
//! A code packs four fields, most significant first:
//!
//! | field              | range   | bits |
//! |--------------------|---------|------|
//! | permutation index  | 0..720  | 10   |
//! | orientation index  | 0..32   | 5    |
//! | M offset           | 0..4    | 2    |
//! | U offset           | 0..4    | 2    |
//!
//! The permutation index is the position of the edge arrangement in the
//! [`PermutationTable`], which enumerates the permutations with Heap's
//! algorithm starting from the solved arrangement. The orientation index
//! counts the even-parity 6-bit patterns smaller than the state's pattern,
//! read with the first edge as the most significant bit.

use const_for::const_for;
use strum::IntoEnumIterator;

use crate::{
	cube::{Edge, Ori, State, NUM_EDGES, NUM_OFFSETS},
	math::{factorial, heap_permutations},
	LseError,
};

pub const NUM_PERMUTATIONS: usize = factorial(NUM_EDGES);
pub const NUM_ORIENTATION_PATTERNS: usize = 1 << NUM_EDGES;
/// Only half of the patterns have an even number of flipped edges
pub const NUM_ORIENTATIONS: usize = NUM_ORIENTATION_PATTERNS / 2;

const ORIENTATION_BITS: u32 = 5;
const OFFSET_BITS: u32 = 2;

/// The number of distinct codes, i.e. the size of a visited-state table
pub const CAPACITY: usize = NUM_PERMUTATIONS * NUM_ORIENTATIONS * (NUM_OFFSETS as usize) * (NUM_OFFSETS as usize);

const NO_RANK: u8 = u8::MAX;

// ===== Orientation Ranking =====

/// ORIENTATION_RANK[pattern] is the number of even patterns below it, NO_RANK for odd ones
const fn gen_orientation_rank() -> [u8; NUM_ORIENTATION_PATTERNS] {
	let mut out = [NO_RANK; NUM_ORIENTATION_PATTERNS];
	let mut count = 0;

	const_for!(pattern in 0..NUM_ORIENTATION_PATTERNS => {
		if (pattern as u32).count_ones() % 2 == 0 {
			out[pattern] = count;
			count += 1;
		}
	});

	out
}

/// ORIENTATION_UNRANK[rank] is the rank-th even pattern
const fn gen_orientation_unrank() -> [u8; NUM_ORIENTATIONS] {
	let mut out = [0; NUM_ORIENTATIONS];
	let mut count = 0;

	const_for!(pattern in 0..NUM_ORIENTATION_PATTERNS => {
		if (pattern as u32).count_ones() % 2 == 0 {
			out[count] = pattern as u8;
			count += 1;
		}
	});

	out
}

const ORIENTATION_RANK: [u8; NUM_ORIENTATION_PATTERNS] = gen_orientation_rank();
const ORIENTATION_UNRANK: [u8; NUM_ORIENTATIONS] = gen_orientation_unrank();

/// Return the orientation index of a per-edge orientation vector.
pub fn encode_orientation(orientation: &[Ori; NUM_EDGES]) -> Result<u32, LseError> {
	if let Some(o) = orientation.iter().find(|o| **o > 1) {
		log::error!("Cannot encode edge orientation {:?}", orientation);
		return Err(LseError::InvalidState(format!("edge orientation value {} is not binary", o)));
	}

	let pattern = orientation.iter().fold(0u8, |pattern, o| (pattern << 1) | (o & 1));
	match ORIENTATION_RANK[pattern as usize] {
		NO_RANK => {
			log::error!("Cannot encode edge orientation {:06b}", pattern);
			Err(LseError::OddOrientation(pattern))
		}
		rank => Ok(rank as u32),
	}
}

/// Return the orientation vector with the given orientation index.
pub fn decode_orientation(index: u32) -> Result<[Ori; NUM_EDGES], LseError> {
	let pattern = *ORIENTATION_UNRANK
		.get(index as usize)
		.ok_or(LseError::CodeOutOfRange(index))?;

	let mut out = [0; NUM_EDGES];
	for (i, o) in out.iter_mut().enumerate() {
		*o = (pattern >> (NUM_EDGES - 1 - i)) & 1;
	}
	Ok(out)
}

// ===== Permutation Table =====

/// Every arrangement of the six edges, in a fixed order.
/// Alongside the list it keeps an index to find an arrangement without scanning.
pub struct PermutationTable {
	perms: Vec<[Edge; NUM_EDGES]>,
	/// index[key(perm)] is the position of perm, u16::MAX if it isn't a permutation
	index: Vec<u16>,
}

/// Read the arrangement as a number in base 6
fn perm_key(perm: &[Edge; NUM_EDGES]) -> usize {
	perm.iter().fold(0, |key, e| key * NUM_EDGES + *e as usize)
}

impl PermutationTable {
	pub fn new() -> Self {
		let solved: Vec<Edge> = Edge::iter().collect();
		let mut base = [Edge::default(); NUM_EDGES];
		base.copy_from_slice(&solved);

		let perms = heap_permutations(base);

		let mut index = vec![u16::MAX; NUM_EDGES.pow(NUM_EDGES as u32)];
		for (i, perm) in perms.iter().enumerate() {
			index[perm_key(perm)] = i as u16;
		}

		Self { perms, index }
	}

	pub fn len(&self) -> usize {
		self.perms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.perms.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&[Edge; NUM_EDGES]> {
		self.perms.get(idx)
	}

	/// Return the position of the arrangement in the table
	pub fn index_of(&self, perm: &[Edge; NUM_EDGES]) -> Option<usize> {
		match self.index[perm_key(perm)] {
			u16::MAX => None,
			i => Some(i as usize),
		}
	}
}

impl Default for PermutationTable {
	fn default() -> Self {
		Self::new()
	}
}

// ===== Codec =====

/// Maps states to codes and back. Build it once and share it by reference.
#[derive(Default)]
pub struct Codec {
	perms: PermutationTable,
}

impl Codec {
	pub fn new() -> Self {
		Self {
			perms: PermutationTable::new(),
		}
	}

	pub fn permutations(&self) -> &PermutationTable {
		&self.perms
	}

	/// The number of codes, every code is below it
	pub fn capacity(&self) -> usize {
		CAPACITY
	}

	/// The largest code a state can have
	pub fn max_code(&self) -> u32 {
		(CAPACITY - 1) as u32
	}

	pub fn encode(&self, state: &State) -> Result<u32, LseError> {
		let perm = self.perms.index_of(&state.edges_position).ok_or_else(|| {
			let labels: String = state.edges_position.iter().map(|e| (*e as u8).to_string()).collect();
			LseError::NotAPermutation(labels)
		})?;
		let orientation = encode_orientation(&state.edges_orientation)?;

		for offset in [state.m_offset, state.u_offset] {
			if offset >= NUM_OFFSETS {
				return Err(LseError::OffsetOutOfRange(offset));
			}
		}

		let mut code = perm as u32;
		code = (code << ORIENTATION_BITS) | orientation;
		code = (code << OFFSET_BITS) | state.m_offset as u32;
		code = (code << OFFSET_BITS) | state.u_offset as u32;
		Ok(code)
	}

	pub fn decode(&self, code: u32) -> Result<State, LseError> {
		if code as usize >= CAPACITY {
			return Err(LseError::CodeOutOfRange(code));
		}

		const OFFSET_MASK: u32 = (1 << OFFSET_BITS) - 1;
		const ORIENTATION_MASK: u32 = (1 << ORIENTATION_BITS) - 1;

		let mut rest = code;
		let u_offset = (rest & OFFSET_MASK) as u8;
		rest >>= OFFSET_BITS;
		let m_offset = (rest & OFFSET_MASK) as u8;
		rest >>= OFFSET_BITS;
		let edges_orientation = decode_orientation(rest & ORIENTATION_MASK)?;
		rest >>= ORIENTATION_BITS;
		let edges_position = *self.perms.get(rest as usize).ok_or(LseError::CodeOutOfRange(code))?;

		Ok(State {
			edges_position,
			edges_orientation,
			m_offset,
			u_offset,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::{rngs::StdRng, SeedableRng};

	use super::*;
	use crate::cube::turn::*;

	#[test]
	fn orientation_ranks_are_canonical() {
		assert_eq!(encode_orientation(&[0, 0, 0, 0, 0, 0]), Ok(0));
		// 000011 is the second even pattern
		assert_eq!(encode_orientation(&[0, 0, 0, 0, 1, 1]), Ok(1));
		assert_eq!(encode_orientation(&[1, 1, 1, 1, 1, 1]), Ok(31));
		assert_eq!(
			encode_orientation(&[0, 0, 0, 0, 0, 1]),
			Err(LseError::OddOrientation(0b000001))
		);

		let mut seen = HashSet::new();
		for rank in 0..NUM_ORIENTATIONS as u32 {
			let orientation = decode_orientation(rank).unwrap();
			assert_eq!(orientation.iter().sum::<u8>() % 2, 0);
			assert_eq!(encode_orientation(&orientation), Ok(rank));
			seen.insert(orientation);
		}
		assert_eq!(seen.len(), NUM_ORIENTATIONS);
		assert_eq!(decode_orientation(32), Err(LseError::CodeOutOfRange(32)));
	}

	#[test]
	fn permutation_table() {
		let table = PermutationTable::new();
		assert_eq!(table.len(), 720);
		assert_eq!(table.get(0), Some(&State::solved().edges_position));
		assert_eq!(table.get(720), None);

		for i in 0..table.len() {
			assert_eq!(table.index_of(table.get(i).unwrap()), Some(i));
		}
		assert_eq!(table.index_of(&[Edge::DF; NUM_EDGES]), None);
	}

	#[test]
	/// Every code decodes into a valid state which encodes back to the same code
	fn codes_are_a_bijection() {
		let codec = Codec::new();

		for code in 0..CAPACITY as u32 {
			let state = codec.decode(code).unwrap();
			assert!(state.is_valid(), "Code {} decodes to invalid state {}", code, state);
			assert_eq!(codec.encode(&state), Ok(code));
		}
	}

	#[test]
	fn states_survive_a_round_trip() {
		let codec = Codec::new();
		let mut rng = StdRng::seed_from_u64(2024);

		for depth in 0..200 {
			let state = State::random(&mut rng, depth);
			let code = codec.encode(&state).unwrap();
			assert_eq!(codec.decode(code), Ok(state));
		}
	}

	#[test]
	fn boundaries() {
		let codec = Codec::new();
		assert_eq!(codec.encode(&State::solved()), Ok(0));
		assert_eq!(codec.max_code(), 368_639);
		assert_eq!(codec.capacity(), 368_640);

		let largest = State {
			edges_position: *codec.permutations().get(719).unwrap(),
			edges_orientation: [1; NUM_EDGES],
			m_offset: 3,
			u_offset: 3,
		};
		assert_eq!(codec.encode(&largest), Ok(codec.max_code()));
		assert_eq!(codec.decode(codec.max_code()), Ok(largest));
		assert_eq!(codec.decode(368_640), Err(LseError::CodeOutOfRange(368_640)));
	}

	#[test]
	fn offsets_use_the_lowest_bits() {
		let codec = Codec::new();
		let u = State::solved().apply_move(Move::U);
		let m = State::solved().apply_move(Move::MPrime);

		assert_eq!(codec.encode(&u).unwrap() & 0b1111, 0b0001);
		assert_eq!(codec.encode(&m).unwrap() & 0b1111, 0b1100);
	}

	#[test]
	fn invalid_states_are_rejected() {
		let codec = Codec::new();

		let mut state = State::solved();
		state.edges_position[1] = Edge::DF;
		assert_eq!(codec.encode(&state), Err(LseError::NotAPermutation("002345".into())));

		let mut state = State::solved();
		state.u_offset = 4;
		assert_eq!(codec.encode(&state), Err(LseError::OffsetOutOfRange(4)));
	}

	#[test]
	/// A non-binary orientation must not be masked into a valid pattern
	fn non_binary_orientation_is_rejected() {
		assert!(matches!(
			encode_orientation(&[2, 0, 0, 0, 0, 0]),
			Err(LseError::InvalidState(_))
		));
		// 3 & 1 would pass as a flip and make the pattern look even
		assert!(matches!(
			encode_orientation(&[3, 1, 0, 0, 0, 0]),
			Err(LseError::InvalidState(_))
		));

		let codec = Codec::new();
		let mut state = State::solved();
		state.edges_orientation[0] = 2;
		assert!(matches!(codec.encode(&state), Err(LseError::InvalidState(_))));

		let solved = crate::solve::Solver::new(&codec).solve(&state);
		assert!(matches!(solved, Err(LseError::InvalidState(_))));
	}
}
