#![deny(missing_docs)]

//! Radiant indexer codec - Complete SDK.
//!
//! Re-exports all codec components for convenient single-crate usage.

pub use rxd_primitives as primitives;
pub use rxd_script as script;
pub use rxd_transaction as transaction;
pub use rxd_chain as chain;
