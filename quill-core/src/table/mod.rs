//! Separate-chaining hash table with automatic growth.
//!
//! The table maps owned string keys to non-negative counts. Collisions are
//! resolved by chaining: every slot owns a singly-linked chain of entries,
//! and crossing the configured load factor triggers a rehash that multiplies
//! the capacity by the configured growth factor.

/// Public hash table type (`ChainTable`) and its configuration errors.
///
/// Handles hashing, slot selection, load-factor tracking and rehashing.
pub mod chain_table;

/// Internal bucket chain (`Chain`).
///
/// An exclusively owned singly-linked list of key/count entries with
/// in-place update, front insertion and unlink-based removal.
/// This module is not exposed publicly.
mod chain;
