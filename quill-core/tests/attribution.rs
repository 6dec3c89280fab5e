//! End-to-end attribution scenarios across both storage backends.

use quill_core::model::comparator::{identify_speaker, Verdict};
use quill_core::model::frequency_model::FrequencyModel;
use quill_core::model::storage::StorageKind;
use quill_core::table::chain_table::ChainTable;

const FEDERALIST_LIKE_A: &str = "\
to the people of the state of new york: after an unequivocal experience of the \
inefficiency of the subsisting federal government, you are called upon to \
deliberate on a new constitution for the united states of america.";

const FEDERALIST_LIKE_B: &str = "\
among the numerous advantages promised by a well constructed union, none \
deserves to be more accurately developed than its tendency to break and \
control the violence of faction.";

const UNKNOWN: &str = "\
the subject speaks its own importance; comprehending in its consequences \
nothing less than the existence of the union.";

#[test]
fn attribution_is_deterministic_across_backends() {
	for k in 1..=4 {
		let chained = identify_speaker(
			FEDERALIST_LIKE_A,
			FEDERALIST_LIKE_B,
			UNKNOWN,
			k,
			StorageKind::Chained,
		)
		.expect("valid comparison");
		let native = identify_speaker(
			FEDERALIST_LIKE_A,
			FEDERALIST_LIKE_B,
			UNKNOWN,
			k,
			StorageKind::Native,
		)
		.expect("valid comparison");

		assert_eq!(chained.score_a.to_bits(), native.score_a.to_bits(), "k={}", k);
		assert_eq!(chained.score_b.to_bits(), native.score_b.to_bits(), "k={}", k);
		assert_eq!(chained.verdict, native.verdict, "k={}", k);
	}
}

#[test]
fn reference_text_scores_best_under_its_own_model() {
	// Scoring a reference text as the unknown should favor its own speaker.
	let attribution = identify_speaker(
		FEDERALIST_LIKE_A,
		FEDERALIST_LIKE_B,
		FEDERALIST_LIKE_A,
		2,
		StorageKind::Chained,
	)
	.expect("valid comparison");
	assert_eq!(attribution.verdict, Verdict::A);

	let attribution = identify_speaker(
		FEDERALIST_LIKE_A,
		FEDERALIST_LIKE_B,
		FEDERALIST_LIKE_B,
		2,
		StorageKind::Chained,
	)
	.expect("valid comparison");
	assert_eq!(attribution.verdict, Verdict::B);
}

#[test]
fn scores_are_negative_averages() {
	let attribution =
		identify_speaker(FEDERALIST_LIKE_A, FEDERALIST_LIKE_B, UNKNOWN, 2, StorageKind::Native)
			.expect("valid comparison");

	// Per-position log-likelihoods of a smoothed model are always below zero.
	assert!(attribution.score_a < 0.0);
	assert!(attribution.score_b < 0.0);
	assert!(attribution.score_a.is_finite());
	assert!(attribution.score_b.is_finite());
}

#[test]
fn model_counts_every_position_of_the_training_text() {
	let model =
		FrequencyModel::new(3, FEDERALIST_LIKE_A, StorageKind::Chained).expect("valid model");
	let length = FEDERALIST_LIKE_A.chars().count() as u64;

	// Circular scanning yields exactly one (k+1)-gram per position.
	let chars: Vec<char> = FEDERALIST_LIKE_A.chars().collect();
	let mut total = 0;
	let mut seen = std::collections::HashSet::new();
	for i in 0..chars.len() {
		let gram: String = (0..4).map(|offset| chars[(i + offset) % chars.len()]).collect();
		if seen.insert(gram.clone()) {
			total += model.count(&gram);
		}
	}
	assert_eq!(total, length);
}

#[test]
fn table_is_usable_outside_the_markov_context() {
	// The container stands on its own as a string-to-count store.
	let mut votes = ChainTable::new(8, 0, 0.75, 2).expect("valid parameters");
	for candidate in ["ada", "grace", "ada", "alan", "ada", "grace"] {
		let tally = votes.get(candidate);
		votes.set(candidate, tally + 1);
	}

	assert_eq!(votes.len(), 3);
	assert_eq!(votes.get("ada"), 3);
	assert_eq!(votes.get("grace"), 2);
	assert_eq!(votes.get("alan"), 1);
	assert_eq!(votes.get("katherine"), 0);

	votes.delete("alan").expect("alan was tallied");
	assert_eq!(votes.len(), 2);
	assert!(votes.delete("alan").is_err());
}
