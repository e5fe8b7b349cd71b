//! # Shamir secret sharing over the secp256k1 scalar field
//!
//! Splits a 256-bit scalar (typically a signing key) into `n` shares so that
//! any `t` of them recover it, and supports distributed recombination through
//! per-participant Lagrange coefficients.
//!
//! ## Modules
//!
//! - `field`: arithmetic modulo the secp256k1 group order.
//! - `polynomial`: random polynomial generation and Horner evaluation.
//! - `share`: share type, label-keyed share sets, canonical base64 encoding.
//! - `dealer`: share generation.
//! - `reconstruct`: Lagrange interpolation at zero.
//! - `lagrange`: numerator/denominator parts and partial contributions.
//!
//! ## Example
//!
//! ```rust
//! # use keyshare::shamir::{combine, create, FieldElement};
//! let mut rng = rand::rngs::OsRng;
//! let secret = [7u8; 32];
//! let labels: Vec<FieldElement> = [11u64, 22, 33, 44, 55].into_iter().map(Into::into).collect();
//!
//! // 5 shares, any 3 recover the secret
//! let dealing = create(3, 5, &secret, &labels, &mut rng).unwrap();
//! let subset = dealing.shares.select(&labels[1..4]).unwrap();
//! assert_eq!(combine(&subset).unwrap().to_be_bytes(), secret);
//! ```

pub mod dealer;
pub mod field;
pub mod lagrange;
pub mod polynomial;
pub mod reconstruct;
pub mod share;

pub use crate::core::errors::ShamirError;
pub use dealer::{create, create_from_element, create_with_sequential_labels, sequential_labels, Dealing};
pub use field::FieldElement;
pub use lagrange::{coefficient_parts, lagrange_coefficient, partial_contribution, LagrangeParts};
pub use reconstruct::{combine, combine_secret, combine_with_threshold};
pub use share::{Share, ShareLabel, ShareSet};

