//! Serialization helpers shared across the crate.

pub mod serdes;
