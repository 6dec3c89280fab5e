//! Character-level Markov speaker attribution library.
//!
//! This crate decides which of two reference speakers most likely produced
//! an unlabeled text, using order-k character statistics. It provides:
//! - A separate-chaining hash table with automatic growth (`table`)
//! - Circular order-k frequency models built from raw text (`model`)
//! - A smoothed log-probability scorer and a two-model comparator
//!
//! The frequency model can be backed either by the custom hash table or by
//! the standard `HashMap`; both backends produce identical scores and exist
//! side by side for performance comparison.

/// Separate-chaining hash table used as the model's gram store.
///
/// Usable on its own as a general string-to-count store with
/// explicit capacity, load factor and growth configuration.
pub mod table;

/// Frequency models, scoring and speaker comparison.
///
/// This module exposes the high-level attribution interface while keeping
/// internal storage representations private.
pub mod model;
