//! Lagrange coefficients at x = 0, split into parts.
//!
//! For a participant set `{x_k}` and one member `x_i`:
//!
//! ```text
//! numerator   = prod_{k != i} (-x_k)
//! denominator = prod_{k != i} (x_i - x_k)
//! weight      = numerator * denominator^-1
//! ```
//!
//! Each party can compute its own `y_i * weight` locally, so the secret
//! `sum_i y_i * weight_i` never has to be assembled in one place; the terms
//! are typically combined homomorphically (e.g. as curve points) by a
//! separate step.

use std::collections::HashSet;

use crate::core::errors::ShamirError;
use crate::shamir::field::FieldElement;
use crate::shamir::share::{Share, ShareLabel};

/// Numerator and denominator of one participant's Lagrange coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LagrangeParts {
    pub numerator: FieldElement,
    pub denominator: FieldElement,
}

impl LagrangeParts {
    fn one() -> Self {
        Self { numerator: FieldElement::ONE, denominator: FieldElement::ONE }
    }

    fn absorb(&mut self, origin: FieldElement, other: FieldElement) {
        self.numerator *= -other;
        self.denominator *= origin - other;
    }

    /// `numerator / denominator`.
    pub fn weight(&self) -> Result<FieldElement, ShamirError> {
        lagrange_coefficient(self)
    }
}

/// Lagrange parts for `label` within `participants`.
///
/// `participants` is the full reconstruction set and must contain `label`.
/// Share values are not involved.
///
/// # Errors
/// * `InvalidLabel` if a participant is zero.
/// * `DegenerateShareSet` if a participant appears twice.
/// * `InvalidConfiguration` if `label` is not a participant.
pub fn coefficient_parts(
    participants: &[FieldElement],
    label: FieldElement,
) -> Result<LagrangeParts, ShamirError> {
    let mut seen = HashSet::with_capacity(participants.len());
    for &x in participants {
        if x.is_zero() {
            return Err(ShamirError::InvalidLabel);
        }
        if !seen.insert(ShareLabel::from(x)) {
            tracing::warn!("participant set contains a repeated x-coordinate");
            return Err(ShamirError::DegenerateShareSet);
        }
    }
    let index = participants.iter().position(|&x| x == label).ok_or_else(|| {
        ShamirError::InvalidConfiguration(format!("label {} is not among the participants", label))
    })?;
    Ok(parts_at(participants, index))
}

/// Parts for the `index`-th entry of `xs`, comparing by position so repeated
/// x-coordinates produce a zero denominator.
pub(crate) fn parts_at(xs: &[FieldElement], index: usize) -> LagrangeParts {
    let origin = xs[index];
    let mut parts = LagrangeParts::one();
    for (k, &other) in xs.iter().enumerate() {
        if k != index {
            parts.absorb(origin, other);
        }
    }
    parts
}

/// The interpolation weight `numerator * denominator^-1`.
pub fn lagrange_coefficient(parts: &LagrangeParts) -> Result<FieldElement, ShamirError> {
    Ok(parts.numerator * invert_denominator(parts.denominator)?)
}

/// One participant's term of the reconstruction sum:
/// `share_value * numerator * denominator^-1`.
pub fn partial_contribution(
    share_value: FieldElement,
    parts: &LagrangeParts,
) -> Result<FieldElement, ShamirError> {
    Ok(share_value * parts.numerator * invert_denominator(parts.denominator)?)
}

/// [`partial_contribution`] for a share held by one of `participants`.
pub fn share_contribution(
    share: &Share,
    participants: &[FieldElement],
) -> Result<FieldElement, ShamirError> {
    let parts = coefficient_parts(participants, share.x())?;
    partial_contribution(share.y(), &parts)
}

fn invert_denominator(denominator: FieldElement) -> Result<FieldElement, ShamirError> {
    denominator.invert().ok_or_else(|| {
        tracing::warn!("zero Lagrange denominator: share set contains a repeated x-coordinate");
        ShamirError::DegenerateShareSet
    })
}
