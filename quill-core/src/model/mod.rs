//! Order-k character frequency models and speaker attribution.
//!
//! This module provides:
//! - Circular gram counting over a training text (`FrequencyModel`)
//! - Smoothed log-probability scoring of arbitrary query strings
//! - Backend selection between the custom hash table and `HashMap`
//! - The two-speaker comparator (`identify_speaker`)

/// Order-k frequency model and its log-probability scorer.
///
/// Builds circular k-gram and (k+1)-gram counts from a training text and
/// scores query strings with Laplace-smoothed log-likelihoods.
pub mod frequency_model;

/// Two-model comparison producing a speaker verdict.
///
/// Builds one model per reference speaker, scores the unknown text under
/// both, normalizes by its length and picks the more probable speaker.
pub mod comparator;

/// Gram count storage behind the frequency model.
///
/// Exposes the backend selector (`StorageKind`); the store itself is kept
/// internal so both backends stay observably identical.
pub mod storage;
