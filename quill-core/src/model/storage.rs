use std::collections::HashMap;

use crate::table::chain_table::ChainTable;

/// Initial slot count of the chained backend.
const INITIAL_CELLS: usize = 57;

/// Occupancy ratio above which the chained backend grows.
const LOAD_FACTOR: f64 = 0.5;

/// Capacity multiplier applied when the chained backend grows.
const GROWTH_FACTOR: usize = 2;

/// Backend used to store a model's gram counts.
///
/// A closed two-valued selector, fixed at model construction time. Both
/// backends produce bit-identical scores; they only differ in performance,
/// which is what the driver's timing mode compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
	/// The crate's own separate-chaining [`ChainTable`].
	Chained,
	/// The standard library's `HashMap`.
	Native,
}

/// Gram-to-count store selected by a [`StorageKind`].
///
/// Lookup misses report a count of zero in either variant, so the scorer
/// never needs to know which backend it is reading.
#[derive(Debug)]
pub(crate) enum GramStore {
	Chained(ChainTable),
	Native(HashMap<String, u64>),
}

impl GramStore {
	/// Creates an empty store of the requested kind.
	pub(crate) fn new(kind: StorageKind) -> Self {
		match kind {
			StorageKind::Chained => {
				// Fixed construction parameters, valid by inspection.
				let table = ChainTable::new(INITIAL_CELLS, 0, LOAD_FACTOR, GROWTH_FACTOR)
					.expect("chained backend parameters are valid");
				GramStore::Chained(table)
			}
			StorageKind::Native => GramStore::Native(HashMap::new()),
		}
	}

	/// Increments the count of `gram` by one, starting absent grams at 1.
	pub(crate) fn increment(&mut self, gram: &str) {
		match self {
			GramStore::Chained(table) => {
				let count = table.get(gram);
				table.set(gram, count + 1);
			}
			GramStore::Native(map) => match map.get_mut(gram) {
				Some(count) => *count += 1,
				None => {
					map.insert(gram.to_owned(), 1);
				}
			},
		}
	}

	/// Returns the count of `gram`, zero when absent.
	pub(crate) fn count(&self, gram: &str) -> u64 {
		match self {
			GramStore::Chained(table) => table.get(gram),
			GramStore::Native(map) => map.get(gram).copied().unwrap_or(0),
		}
	}

	/// Number of distinct grams held.
	pub(crate) fn len(&self) -> usize {
		match self {
			GramStore::Chained(table) => table.len(),
			GramStore::Native(map) => map.len(),
		}
	}
}
