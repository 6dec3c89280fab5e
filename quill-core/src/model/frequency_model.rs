use std::collections::HashSet;

use thiserror::Error;

use super::storage::{GramStore, StorageKind};

/// Errors produced while building or comparing frequency models.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// The requested order cannot produce meaningful grams for the text.
	#[error("model order must satisfy 1 <= k < text length, got k={k} for length {len}")]
	InvalidOrder { k: usize, len: usize },

	/// The unknown text handed to the comparator has no characters.
	#[error("unknown text is empty, nothing to score")]
	EmptyUnknownText,
}

/// Order-k character frequency model of one training text.
///
/// Stores occurrence counts of every circular k-gram and (k+1)-gram of the
/// training text, together with the text's alphabet size. The model is
/// immutable once built; scoring only reads counts.
///
/// # Responsibilities
/// - Count circular grams of length k and k+1 over the training text
/// - Record the alphabet size used for Laplace smoothing
/// - Score query strings with smoothed per-position log-likelihoods
///
/// # Invariants
/// - `1 <= k < L` where `L` is the training text's character count
/// - `alphabet_size >= 1`
/// - The total (k+1)-gram occurrence count over all distinct grams equals `L`
#[derive(Debug)]
pub struct FrequencyModel {
	/// Gram length the model conditions on.
	k: usize,

	/// Distinct characters observed in the training text.
	alphabet_size: usize,

	/// Counts of circular k-grams and (k+1)-grams.
	grams: GramStore,
}

impl FrequencyModel {
	/// Builds a model of order `k` from `text`, counting into the backend
	/// selected by `kind`.
	///
	/// Every position of the text contributes exactly one k-gram and one
	/// (k+1)-gram; grams starting near the end wrap around to the front, so
	/// the text is treated as circular.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidOrder`] when `k == 0` or `k` is not
	/// smaller than the text's character count (which also rejects empty
	/// training texts).
	pub fn new(k: usize, text: &str, kind: StorageKind) -> Result<Self, ModelError> {
		let chars: Vec<char> = text.chars().collect();
		if k == 0 || k >= chars.len() {
			return Err(ModelError::InvalidOrder { k, len: chars.len() });
		}

		let alphabet_size = chars.iter().collect::<HashSet<_>>().len();

		let mut grams = GramStore::new(kind);
		for i in 0..chars.len() {
			for len in [k, k + 1] {
				grams.increment(&circular_gram(&chars, i, len));
			}
		}

		Ok(Self { k, alphabet_size, grams })
	}

	/// The model's order.
	pub fn order(&self) -> usize {
		self.k
	}

	/// Number of distinct characters in the training text.
	pub fn alphabet_size(&self) -> usize {
		self.alphabet_size
	}

	/// Occurrence count recorded for `gram`, zero when never observed.
	pub fn count(&self, gram: &str) -> u64 {
		self.grams.count(gram)
	}

	/// Number of distinct grams (both lengths together) the model holds.
	pub fn distinct_grams(&self) -> usize {
		self.grams.len()
	}

	/// Smoothed log-probability of `s` under this model.
	///
	/// For every position of `s`, the circular k-gram and (k+1)-gram are
	/// extracted from `s` itself (wrapping within `s`, not within the
	/// training text) and their counts `N` and `P` looked up. Each position
	/// contributes `ln((P + 1) / (N + S))` where `S` is the training
	/// alphabet size, so unseen grams stay finite instead of collapsing the
	/// product to zero.
	///
	/// The result is an un-normalized natural-log total over all positions:
	/// a likelihood proxy only meaningful relative to another model scoring
	/// the same string. An empty `s` scores 0.0.
	pub fn log_probability(&self, s: &str) -> f64 {
		let chars: Vec<char> = s.chars().collect();
		let smoothing = self.alphabet_size as f64;

		let mut total = 0.0;
		for i in 0..chars.len() {
			let n = self.count(&circular_gram(&chars, i, self.k));
			let p = self.count(&circular_gram(&chars, i, self.k + 1));
			total += ((p as f64 + 1.0) / (n as f64 + smoothing)).ln();
		}
		total
	}
}

/// Circular substring of `len` characters starting at `start`.
///
/// Indices wrap modulo the text length, so a gram may wrap a short text
/// more than once. `chars` must be non-empty.
fn circular_gram(chars: &[char], start: usize, len: usize) -> String {
	(0..len).map(|offset| chars[(start + offset) % chars.len()]).collect()
}
