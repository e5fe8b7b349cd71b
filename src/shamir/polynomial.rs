//! Secret-bearing polynomials used by the dealer.
//!
//! f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1), with c[0] the secret. The
//! coefficients are wiped when the polynomial is dropped.

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::errors::ShamirError;
use crate::shamir::field::FieldElement;

/// Upper bound on resampling attempts for a single coefficient.
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Builds a random polynomial with `minimum` coefficients whose constant term is `secret`.
    ///
    /// Random coefficients are non-zero and pairwise distinct; a collision is resampled
    /// up to [`MAX_SAMPLING_ATTEMPTS`] times before giving up.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        minimum: usize,
        secret: FieldElement,
        rng: &mut R,
    ) -> Result<Self, ShamirError> {
        Self::generate_bounded(minimum, secret, rng, MAX_SAMPLING_ATTEMPTS)
    }

    /// [`Polynomial::generate`] with an explicit per-coefficient attempt budget.
    pub fn generate_bounded<R: RngCore + CryptoRng + ?Sized>(
        minimum: usize,
        secret: FieldElement,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self, ShamirError> {
        if minimum == 0 {
            return Err(ShamirError::InvalidConfiguration(
                "polynomial needs at least one coefficient".to_string(),
            ));
        }

        let mut coefficients = Vec::with_capacity(minimum);
        coefficients.push(secret);

        for _ in 1..minimum {
            let mut attempts = 0;
            let number = loop {
                if attempts == max_attempts {
                    // `coefficients` is dropped here; wipe it first.
                    coefficients.zeroize();
                    return Err(ShamirError::RandomSourceExhausted);
                }
                attempts += 1;
                let candidate = FieldElement::random(rng);
                // Index 0 holds the secret, not a drawn value, so only compare against 1..
                if candidate.is_zero() || coefficients[1..].contains(&candidate) {
                    tracing::trace!(attempt = attempts, "coefficient collision, resampling");
                    continue;
                }
                break candidate;
            };
            coefficients.push(number);
        }

        Ok(Self { coefficients })
    }

    /// Wraps explicit coefficients, lowest degree first.
    pub fn from_coefficients(coefficients: Vec<FieldElement>) -> Result<Self, ShamirError> {
        if coefficients.is_empty() {
            return Err(ShamirError::InvalidConfiguration(
                "polynomial needs at least one coefficient".to_string(),
            ));
        }
        Ok(Self { coefficients })
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: FieldElement) -> FieldElement {
        self.coefficients
            .iter()
            .rev()
            .fold(FieldElement::ZERO, |acc, c| acc * x + *c)
    }

    /// Number of coefficients, i.e. the reconstruction threshold.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }
}
