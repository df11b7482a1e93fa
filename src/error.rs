/// Everything that can go wrong while reading, encoding or searching states.
///
/// Apart from the parsing variants, all of these point at a broken invariant:
/// the move model only ever produces valid states, so the codec and the search
/// never fail on states they generated themselves.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LseError {
	#[error("The edge orientation {0:06b} has an odd number of flipped edges")]
	OddOrientation(u8),
	#[error("The edges {0} are not a permutation of the six edges")]
	NotAPermutation(String),
	#[error("The layer offset {0} is out of range (must be 0-3)")]
	OffsetOutOfRange(u8),
	#[error("The state code {0} is out of range")]
	CodeOutOfRange(u32),
	#[error("The visited-state cache is exhausted (capacity {0})")]
	CacheExhausted(usize),
	#[error("Popped an empty search frontier")]
	EmptyFrontier,
	#[error("Invalid state: {0}")]
	InvalidState(String),
	#[error("Invalid move: \"{0}\"")]
	InvalidMove(String),
}
