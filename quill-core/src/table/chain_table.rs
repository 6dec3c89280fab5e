use thiserror::Error;

use super::chain::Chain;

/// Prime multiplier of the Horner hash accumulation.
const HORNER_PRIME: u64 = 37;

/// Errors produced by [`ChainTable`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
	/// `delete` was called for a key the table does not hold.
	#[error("key not found: {0:?}")]
	KeyNotFound(String),

	/// Construction parameters that cannot yield a working table.
	#[error("invalid table configuration: {0}")]
	InvalidConfig(String),
}

/// Separate-chaining hash table mapping string keys to counts.
///
/// Every slot owns one [`Chain`]; colliding keys share a slot and are found
/// by a linear scan of its chain. Once `size / capacity` exceeds the load
/// factor after an insertion, the table immediately rehashes into
/// `capacity * growth_factor` slots.
///
/// # Responsibilities
/// - Insert or overwrite counts (`set`), never failing
/// - Look up counts with a configured absent-key default (`get`)
/// - Remove keys with an explicit not-found error (`delete`)
/// - Grow transparently while preserving every stored mapping
///
/// # Invariants
/// - `size` equals the number of distinct keys over all chains
/// - `size / capacity` never rests above `load_factor` after `set` returns
/// - A key is reachable under exactly one slot index at any time
#[derive(Debug)]
pub struct ChainTable {
	/// One chain per slot; the vector length is the current capacity.
	buckets: Vec<Chain>,

	/// Number of distinct keys currently held.
	size: usize,

	/// Current slot count.
	capacity: usize,

	/// Count returned by `get` for absent keys.
	default_value: u64,

	/// Occupancy ratio above which the table grows.
	load_factor: f64,

	/// Capacity multiplier applied on every rehash.
	growth_factor: usize,
}

impl ChainTable {
	/// Creates a table with explicit growth parameters.
	///
	/// # Parameters
	/// - `capacity`: initial slot count, at least 1.
	/// - `default_value`: count reported by [`get`](Self::get) for absent keys.
	/// - `load_factor`: occupancy threshold in `(0.0, 1.0]` that triggers
	///   growth once strictly exceeded.
	/// - `growth_factor`: capacity multiplier, at least 2. A multiplier of 1
	///   (or 0) could rehash forever without lowering the occupancy.
	///
	/// # Errors
	/// Returns [`TableError::InvalidConfig`] if any parameter is outside the
	/// ranges above.
	pub fn new(
		capacity: usize,
		default_value: u64,
		load_factor: f64,
		growth_factor: usize,
	) -> Result<Self, TableError> {
		if capacity == 0 {
			return Err(TableError::InvalidConfig("capacity must be at least 1".to_owned()));
		}
		if growth_factor < 2 {
			return Err(TableError::InvalidConfig(format!(
				"growth factor must be at least 2, got {}",
				growth_factor
			)));
		}
		if !(load_factor > 0.0 && load_factor <= 1.0) {
			return Err(TableError::InvalidConfig(format!(
				"load factor must be within (0.0, 1.0], got {}",
				load_factor
			)));
		}

		Ok(Self {
			buckets: Self::empty_buckets(capacity),
			size: 0,
			capacity,
			default_value,
			load_factor,
			growth_factor,
		})
	}

	/// Inserts or overwrites the count for `key`.
	///
	/// Only a first insertion changes `size`; overwriting leaves the key at
	/// its current chain position. When an insertion pushes the occupancy
	/// strictly above the load factor, the table rehashes before returning,
	/// so callers never observe an overfull table.
	pub fn set(&mut self, key: &str, value: u64) {
		let index = self.slot(key);
		if self.buckets[index].add(key, value) {
			self.size += 1;
			if self.size as f64 / self.capacity as f64 > self.load_factor {
				self.rehash();
			}
		}
	}

	/// Returns the count stored for `key`, or the configured default when
	/// the key is absent. Never fails.
	pub fn get(&self, key: &str) -> u64 {
		let index = self.slot(key);
		self.buckets[index].get(key).unwrap_or(self.default_value)
	}

	/// Removes `key` and returns its count.
	///
	/// # Errors
	/// Returns [`TableError::KeyNotFound`] when the key is absent; removal
	/// is never a silent no-op.
	pub fn delete(&mut self, key: &str) -> Result<u64, TableError> {
		let index = self.slot(key);
		match self.buckets[index].delete(key) {
			Some(value) => {
				self.size -= 1;
				Ok(value)
			}
			None => Err(TableError::KeyNotFound(key.to_owned())),
		}
	}

	/// Number of distinct keys currently held.
	pub fn len(&self) -> usize {
		self.size
	}

	/// Whether the table holds no keys.
	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Current slot count. Grows by `growth_factor` on every rehash.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Iterates all `(key, count)` pairs, slot by slot, chains front-to-back.
	///
	/// The order is a hashing artifact, not insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.buckets.iter().flat_map(|chain| chain.iter())
	}

	/// Horner polynomial hash over the key's character scalar values.
	///
	/// The accumulation wraps in `u64`, i.e. it is defined as the polynomial
	/// reduced modulo 2^64; only the final value is reduced by the capacity.
	fn hash(key: &str) -> u64 {
		key.chars()
			.fold(0u64, |acc, c| acc.wrapping_mul(HORNER_PRIME).wrapping_add(c as u64))
	}

	/// Slot index for `key` under the current capacity.
	fn slot(&self, key: &str) -> usize {
		(Self::hash(key) % self.capacity as u64) as usize
	}

	/// Grows the table by `growth_factor` and reinserts every entry.
	///
	/// Entries are re-added per old slot, chains front-to-back, so their
	/// distribution is recomputed while every mapping is preserved. With a
	/// growth factor of at least 2 the occupancy halves (or better) per
	/// step, so growth always terminates; under typical parameters a single
	/// step already lands back under the load factor.
	fn rehash(&mut self) {
		self.capacity *= self.growth_factor;
		let old = std::mem::replace(&mut self.buckets, Self::empty_buckets(self.capacity));
		self.size = 0;

		for mut chain in old {
			for (key, value) in chain.drain() {
				self.set(&key, value);
			}
		}
	}

	fn empty_buckets(capacity: usize) -> Vec<Chain> {
		let mut buckets = Vec::with_capacity(capacity);
		buckets.resize_with(capacity, Chain::new);
		buckets
	}
}
