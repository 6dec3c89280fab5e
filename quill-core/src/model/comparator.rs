use std::fmt;

use serde::Serialize;

use super::frequency_model::{FrequencyModel, ModelError};
use super::storage::StorageKind;

/// The speaker picked by a comparison.
///
/// Displays as `"A"` / `"B"`, matching the labels of the two reference
/// texts handed to [`identify_speaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
	A,
	B,
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Verdict::A => f.write_str("A"),
			Verdict::B => f.write_str("B"),
		}
	}
}

/// Result of one speaker comparison.
///
/// Holds the per-position normalized log-likelihood of the unknown text
/// under each reference model, and the verdict derived from them. Scores
/// are only comparable to each other, not across different unknown texts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attribution {
	/// Normalized log-likelihood under the first speaker's model.
	pub score_a: f64,

	/// Normalized log-likelihood under the second speaker's model.
	pub score_b: f64,

	/// The more probable speaker; exact ties resolve to `B`.
	pub verdict: Verdict,
}

/// Decides which of two speakers most likely produced `text_c`.
///
/// Builds one order-`k` frequency model per reference text (both on the
/// backend selected by `kind`), scores `text_c` under each and divides by
/// the character count of `text_c`. The division turns length-dependent
/// totals into average per-position log-likelihoods, so reference texts of
/// different sizes stay comparable for a fixed unknown text.
///
/// The verdict is [`Verdict::A`] iff `score_a > score_b`; an exact tie
/// resolves to [`Verdict::B`].
///
/// # Errors
/// - [`ModelError::EmptyUnknownText`] when `text_c` has no characters (the
///   normalization would divide by zero).
/// - [`ModelError::InvalidOrder`] when `k` does not fit either reference
///   text.
pub fn identify_speaker(
	text_a: &str,
	text_b: &str,
	text_c: &str,
	k: usize,
	kind: StorageKind,
) -> Result<Attribution, ModelError> {
	let positions = text_c.chars().count();
	if positions == 0 {
		return Err(ModelError::EmptyUnknownText);
	}

	let model_a = FrequencyModel::new(k, text_a, kind)?;
	let model_b = FrequencyModel::new(k, text_b, kind)?;

	let score_a = model_a.log_probability(text_c) / positions as f64;
	let score_b = model_b.log_probability(text_c) / positions as f64;

	let verdict = if score_a > score_b { Verdict::A } else { Verdict::B };

	Ok(Attribution { score_a, score_b, verdict })
}
