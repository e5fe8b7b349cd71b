//! Share generation.
//!
//! The dealer builds a random polynomial of degree `threshold - 1` around the
//! secret and evaluates it at every caller-supplied label.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::core::errors::ShamirError;
use crate::shamir::field::{FieldElement, ELEMENT_BYTES};
use crate::shamir::polynomial::{Polynomial, MAX_SAMPLING_ATTEMPTS};
use crate::shamir::share::{Share, ShareSet};

/// Output of one dealing.
pub struct Dealing {
    /// Shares keyed by label.
    pub shares: ShareSet,
    /// The raw polynomial, lowest degree first. Anyone holding this holds the
    /// secret; it exists for debugging and tests and must not be distributed.
    pub coefficients: Zeroizing<Vec<FieldElement>>,
}

impl std::fmt::Debug for Dealing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dealing")
            .field("shares", &self.shares)
            .field("coefficients", &format_args!("<redacted len={}>", self.coefficients.len()))
            .finish()
    }
}

/// Splits a 32-byte big-endian secret into `total_shares` shares, any `minimum` of
/// which reconstruct it.
///
/// `labels` are the public x-coordinates, one per share; they must be non-zero
/// and distinct.
///
/// # Errors
/// * `InputTooLarge` if the secret is not below the field modulus.
/// * `InvalidConfiguration` for `minimum == 0`, `total_shares == 0`,
///   `minimum > total_shares`, or a label count that differs from `total_shares`.
/// * `InvalidLabel` / `DegenerateShareSet` for a zero or repeated label.
pub fn create<R: RngCore + CryptoRng + ?Sized>(
    minimum: usize,
    total_shares: usize,
    secret: &[u8; ELEMENT_BYTES],
    labels: &[FieldElement],
    rng: &mut R,
) -> Result<Dealing, ShamirError> {
    let secret = FieldElement::from_be_bytes(secret)?;
    create_from_element(minimum, total_shares, secret, labels, rng)
}

/// [`create`] for a secret that is already a field element.
pub fn create_from_element<R: RngCore + CryptoRng + ?Sized>(
    minimum: usize,
    total_shares: usize,
    secret: FieldElement,
    labels: &[FieldElement],
    rng: &mut R,
) -> Result<Dealing, ShamirError> {
    create_bounded(minimum, total_shares, secret, labels, rng, MAX_SAMPLING_ATTEMPTS)
}

/// [`create_from_element`] with an explicit coefficient resampling budget.
pub fn create_bounded<R: RngCore + CryptoRng + ?Sized>(
    minimum: usize,
    total_shares: usize,
    secret: FieldElement,
    labels: &[FieldElement],
    rng: &mut R,
    max_sampling_attempts: usize,
) -> Result<Dealing, ShamirError> {
    validate_parameters(minimum, total_shares, labels)?;

    let polynomial = Polynomial::generate_bounded(minimum, secret, rng, max_sampling_attempts)?;

    let mut shares = ShareSet::new();
    for &x in labels {
        shares.insert(Share::new(x, polynomial.evaluate(x))?)?;
    }

    tracing::debug!(threshold = minimum, total = total_shares, "dealt secret shares");

    Ok(Dealing {
        shares,
        coefficients: Zeroizing::new(polynomial.coefficients().to_vec()),
    })
}

/// [`create`] with labels `1..=total_shares`.
pub fn create_with_sequential_labels<R: RngCore + CryptoRng + ?Sized>(
    minimum: usize,
    total_shares: usize,
    secret: &[u8; ELEMENT_BYTES],
    rng: &mut R,
) -> Result<Dealing, ShamirError> {
    let labels = sequential_labels(total_shares);
    create(minimum, total_shares, secret, &labels, rng)
}

/// Labels `1..=n`.
pub fn sequential_labels(n: usize) -> Vec<FieldElement> {
    (1..=n as u64).map(FieldElement::from).collect()
}

fn validate_parameters(
    minimum: usize,
    total_shares: usize,
    labels: &[FieldElement],
) -> Result<(), ShamirError> {
    if minimum == 0 {
        return Err(ShamirError::InvalidConfiguration("threshold cannot be zero".to_string()));
    }
    if total_shares == 0 {
        return Err(ShamirError::InvalidConfiguration(
            "total shares cannot be zero".to_string(),
        ));
    }
    if minimum > total_shares {
        return Err(ShamirError::cannot_require_more_shares(minimum, total_shares));
    }
    if labels.len() != total_shares {
        return Err(ShamirError::InvalidConfiguration(format!(
            "expected {} labels, got {}",
            total_shares,
            labels.len()
        )));
    }
    for (i, x) in labels.iter().enumerate() {
        if x.is_zero() {
            return Err(ShamirError::InvalidLabel);
        }
        if labels[..i].contains(x) {
            tracing::warn!(label = %x, "duplicate share label");
            return Err(ShamirError::DegenerateShareSet);
        }
    }
    Ok(())
}
