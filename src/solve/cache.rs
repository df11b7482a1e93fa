use bit_set::BitSet;

use crate::LseError;

/// Remembers which state codes the search has already seen.
pub struct VisitedCache {
	visited: BitSet,
	capacity: usize,
	len: usize,
}

impl VisitedCache {
	/// Create an empty cache accepting codes below `capacity`
	pub fn new(capacity: usize) -> Self {
		Self {
			visited: BitSet::with_capacity(capacity),
			capacity,
			len: 0,
		}
	}

	pub fn contains(&self, code: u32) -> bool {
		self.visited.contains(code as usize)
	}

	/// Mark the code as visited. Returns false if it was already there,
	/// in which case the count stays the same.
	pub fn record(&mut self, code: u32) -> Result<bool, LseError> {
		if code as usize >= self.capacity || self.len >= self.capacity {
			log::error!("Cannot record code {}, capacity is {}", code, self.capacity);
			return Err(LseError::CacheExhausted(self.capacity));
		}

		let fresh = self.visited.insert(code as usize);
		if fresh {
			self.len += 1;
		}
		Ok(fresh)
	}

	/// The number of distinct codes recorded
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}
}
