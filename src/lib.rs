// src/lib.rs
//! Shamir secret sharing of secp256k1 scalars.

pub mod cli;
pub mod core;
pub mod security;
pub mod shamir;
pub mod tools;

pub use crate::core::errors::ShamirError;
pub use crate::core::validation::is_valid_share;
