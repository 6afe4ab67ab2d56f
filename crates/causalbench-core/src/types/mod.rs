//! Shared types: collections and ordered variable-set algebra.

pub mod collections;
pub mod variables;
