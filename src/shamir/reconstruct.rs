//! Secret reconstruction from shares.
//!
//! Lagrange interpolation at x = 0. The threshold is not part of a share, so
//! `combine` cannot tell a short set from a complete one: with fewer than
//! `threshold` shares it returns a well-defined value unrelated to the secret.
//! Callers that know the threshold should use [`combine_with_threshold`].

use zeroize::Zeroizing;

use crate::core::errors::ShamirError;
use crate::shamir::field::{FieldElement, ELEMENT_BYTES};
use crate::shamir::lagrange::{parts_at, partial_contribution};
use crate::shamir::share::Share;

/// Recovers `f(0)` from the given shares.
///
/// # Errors
/// * `EmptyShareSet` when no share is given.
/// * `DegenerateShareSet` when two shares have the same x-coordinate.
pub fn combine<'a, I>(shares: I) -> Result<FieldElement, ShamirError>
where
    I: IntoIterator<Item = &'a Share>,
{
    let shares: Vec<&Share> = shares.into_iter().collect();
    if shares.is_empty() {
        return Err(ShamirError::EmptyShareSet);
    }

    let xs: Vec<FieldElement> = shares.iter().map(|s| s.x()).collect();

    let mut secret = FieldElement::ZERO;
    for (i, share) in shares.iter().enumerate() {
        let parts = parts_at(&xs, i);
        secret += partial_contribution(share.y(), &parts)?;
    }

    tracing::debug!(shares = shares.len(), "combined shares");
    Ok(secret)
}

/// [`combine`], refusing sets smaller than `threshold`.
pub fn combine_with_threshold<'a, I>(shares: I, threshold: usize) -> Result<FieldElement, ShamirError>
where
    I: IntoIterator<Item = &'a Share>,
{
    let shares: Vec<&Share> = shares.into_iter().collect();
    if threshold == 0 {
        return Err(ShamirError::InvalidConfiguration("threshold cannot be zero".to_string()));
    }
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }
    combine(shares)
}

/// [`combine`] returning the 32-byte big-endian secret in a zeroizing buffer.
pub fn combine_secret<'a, I>(shares: I) -> Result<Zeroizing<[u8; ELEMENT_BYTES]>, ShamirError>
where
    I: IntoIterator<Item = &'a Share>,
{
    let secret = Zeroizing::new(combine(shares)?);
    Ok(Zeroizing::new(secret.to_be_bytes()))
}
