use std::str::FromStr;

use strum::EnumCount;

use crate::LseError;

/// The layers which can be turned during the last six edges
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::Display)]
pub enum Layer {
	U, // the top layer
	M, // the slice between left and right
}

/// You can either turn a layer (Counter-)Clockwise or twice.
/// Double only exists for notation, the search turns in quarters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// A generator move: a quarter turn of either the U layer or the M slice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumCount, strum::Display, strum::EnumString)]
pub enum Move {
	#[strum(to_string = "U'")]
	UPrime,
	#[strum(to_string = "M")]
	M,
	#[strum(to_string = "U")]
	U,
	#[strum(to_string = "M'")]
	MPrime,
}

pub const NUM_MOVES: usize = Move::COUNT;

/// All generators in the order the search tries them.
/// Any order finds a shortest solution, but which one is found depends on it.
pub const ALL_MOVES: [Move; NUM_MOVES] = [Move::UPrime, Move::M, Move::U, Move::MPrime];

impl Move {
	pub fn layer(self) -> Layer {
		match self {
			Move::U | Move::UPrime => Layer::U,
			Move::M | Move::MPrime => Layer::M,
		}
	}

	pub fn is_prime(self) -> bool {
		matches!(self, Move::UPrime | Move::MPrime)
	}

	/// Return the move which undoes this one.
	pub fn reverse(self) -> Self {
		match self {
			Move::U => Move::UPrime,
			Move::UPrime => Move::U,
			Move::M => Move::MPrime,
			Move::MPrime => Move::M,
		}
	}

	fn from_turn(layer: Layer, prime: bool) -> Self {
		match (layer, prime) {
			(Layer::U, false) => Move::U,
			(Layer::U, true) => Move::UPrime,
			(Layer::M, false) => Move::M,
			(Layer::M, true) => Move::MPrime,
		}
	}
}

/// A turn in notation: one layer, turned a quarter either way or twice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub layer: Layer,
	pub wise: TurnWise,
}

impl Turn {
	/// The number of quarter turns this turn stands for
	pub fn quarter_turns(&self) -> usize {
		match self.wise {
			TurnWise::Double => 2,
			_ => 1,
		}
	}

	/// Expand the turn into generator moves.
	/// A double turn becomes two clockwise quarters, which is the same as two counter-clockwise ones.
	pub fn moves(&self) -> Vec<Move> {
		match self.wise {
			TurnWise::Clockwise => vec![Move::from_turn(self.layer, false)],
			TurnWise::CounterClockwise => vec![Move::from_turn(self.layer, true)],
			TurnWise::Double => vec![Move::from_turn(self.layer, false); 2],
		}
	}
}

impl From<Move> for Turn {
	fn from(mv: Move) -> Self {
		let wise = if mv.is_prime() {
			TurnWise::CounterClockwise
		} else {
			TurnWise::Clockwise
		};
		Self { layer: mv.layer(), wise }
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}{}", self.layer, self.wise)
	}
}

impl FromStr for Turn {
	type Err = LseError;

	fn from_str(item: &str) -> Result<Self, Self::Err> {
		let mut chars = item.chars();

		let layer = match chars.next() {
			Some('U') => Layer::U,
			Some('M') => Layer::M,
			_ => return Err(LseError::InvalidMove(item.to_string())),
		};

		let wise = match (chars.next(), chars.next()) {
			(None, _) => TurnWise::Clockwise,
			(Some('\''), None) => TurnWise::CounterClockwise,
			(Some('2'), None) => TurnWise::Double,
			_ => return Err(LseError::InvalidMove(item.to_string())),
		};

		Ok(Self { layer, wise })
	}
}

/// Parse a whitespace separated sequence like "U M2 U'" into quarter turn moves.
pub fn parse_moves<T>(string: T) -> Result<Vec<Move>, LseError>
where
	T: AsRef<str>,
{
	let mut out = vec![];
	for token in string.as_ref().split_whitespace() {
		let turn = Turn::from_str(token)?;
		out.extend(turn.moves());
	}
	Ok(out)
}

/// Combine each pair of adjacent identical moves into a double turn.
/// Only the notation changes, the expanded moves stay equivalent.
pub fn compress_moves(moves: &[Move]) -> Vec<Turn> {
	let mut out: Vec<Turn> = vec![];
	let mut i = 0;

	while i < moves.len() {
		if i + 1 < moves.len() && moves[i] == moves[i + 1] {
			out.push(Turn {
				layer: moves[i].layer(),
				wise: TurnWise::Double,
			});
			i += 2;
		} else {
			out.push(Turn::from(moves[i]));
			i += 1;
		}
	}

	out
}

/// Render moves the way a cuber writes them, e.g. "M U2 M'"
pub fn format_moves(moves: &[Move]) -> String {
	compress_moves(moves)
		.iter()
		.map(|t| t.to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reverse_is_an_involution() {
		for mv in ALL_MOVES {
			assert_eq!(mv.reverse().reverse(), mv);
			assert_ne!(mv.reverse(), mv);
			assert_eq!(mv.reverse().layer(), mv.layer());
		}
	}

	#[test]
	fn moves_print_and_parse() {
		for mv in ALL_MOVES {
			assert_eq!(Move::from_str(&mv.to_string()).unwrap(), mv);
		}
		assert_eq!(Move::UPrime.to_string(), "U'");
		assert_eq!(Move::M.to_string(), "M");
	}

	#[test]
	fn parse_sequence_expands_doubles() {
		let moves = parse_moves("U2 M' U").unwrap();
		assert_eq!(moves, vec![Move::U, Move::U, Move::MPrime, Move::U]);

		assert_eq!(parse_moves("").unwrap(), vec![]);
		assert_eq!(parse_moves("U X"), Err(LseError::InvalidMove("X".into())));
		assert_eq!(parse_moves("U3"), Err(LseError::InvalidMove("U3".into())));
		assert_eq!(parse_moves("M'2"), Err(LseError::InvalidMove("M'2".into())));
	}

	#[test]
	fn compress_only_pairs() {
		let moves = vec![Move::M, Move::U, Move::U, Move::MPrime, Move::MPrime, Move::MPrime];
		assert_eq!(format_moves(&moves), "M U2 M2 M'");

		let turns = compress_moves(&moves);
		let quarters: usize = turns.iter().map(|t| t.quarter_turns()).sum();
		assert_eq!(quarters, moves.len());

		assert_eq!(format_moves(&[Move::UPrime, Move::UPrime]), "U2");
		assert_eq!(format_moves(&[]), "");
	}
}
