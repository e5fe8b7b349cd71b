//! Arithmetic in the scalar field of secp256k1.
//!
//! Every value is kept canonical in `[0, P)` where `P` is the secp256k1 group
//! order. The modulus is a compile-time constant of `k256`, so there is no
//! process-wide state to initialise and nothing a caller can reassign.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use k256::elliptic_curve::{Field, PrimeField};
use k256::{FieldBytes, Scalar};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::DefaultIsZeroes;

use crate::core::errors::ShamirError;

/// Width of the canonical big-endian encoding.
pub const ELEMENT_BYTES: usize = 32;

/// The field modulus, big-endian hex.
pub const MODULUS_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// An integer modulo the secp256k1 group order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldElement(#[serde(with = "crate::tools::serdes::prime_field")] Scalar);

impl DefaultIsZeroes for FieldElement {}

impl FieldElement {
    pub const ZERO: Self = Self(Scalar::ZERO);
    pub const ONE: Self = Self(Scalar::ONE);

    /// Parses a 32-byte big-endian integer, rejecting anything `>= P`.
    pub fn from_be_bytes(bytes: &[u8; ELEMENT_BYTES]) -> Result<Self, ShamirError> {
        let repr = FieldBytes::clone_from_slice(bytes);
        Option::<Scalar>::from(Scalar::from_repr(repr))
            .map(Self)
            .ok_or(ShamirError::InputTooLarge)
    }

    /// Like [`FieldElement::from_be_bytes`] for an arbitrary slice; the slice must be 32 bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, ShamirError> {
        let fixed: &[u8; ELEMENT_BYTES] = bytes.try_into().map_err(|_| {
            ShamirError::MalformedEncoding(format!(
                "expected {} bytes, got {}",
                ELEMENT_BYTES,
                bytes.len()
            ))
        })?;
        Self::from_be_bytes(fixed)
    }

    /// Parses 64 hex digits, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, ShamirError> {
        let digits = text.trim();
        let digits = digits.strip_prefix("0x").unwrap_or(digits);
        let bytes = hex::decode(digits)
            .map_err(|e| ShamirError::MalformedEncoding(format!("invalid hex: {}", e)))?;
        Self::from_be_slice(&bytes)
    }

    /// Canonical 32-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; ELEMENT_BYTES] {
        let repr = self.0.to_repr();
        let mut out = [0u8; ELEMENT_BYTES];
        out.copy_from_slice(&repr);
        out
    }

    /// Uniform sample from `[0, P)`.
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self(Scalar::random(&mut *rng))
    }

    pub fn is_zero(&self) -> bool {
        bool::from(self.0.is_zero())
    }

    /// Multiplicative inverse. Zero has none, and callers must surface that as an error.
    pub fn invert(&self) -> Option<Self> {
        Option::<Scalar>::from(self.0.invert()).map(Self)
    }

    pub fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self(Scalar::from(value))
    }
}

impl FromStr for FieldElement {
    type Err = ShamirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", self)
    }
}

impl Add for FieldElement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for FieldElement {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p_minus_one() -> FieldElement {
        -FieldElement::ONE
    }

    #[test]
    fn test_modulus_constant_matches_curve_order() {
        let mut modulus = [0u8; ELEMENT_BYTES];
        hex::decode_to_slice(MODULUS_HEX, &mut modulus).unwrap();
        assert_eq!(FieldElement::from_be_bytes(&modulus), Err(ShamirError::InputTooLarge));

        let mut below = modulus;
        below[31] -= 1;
        assert_eq!(FieldElement::from_be_bytes(&below).unwrap(), p_minus_one());
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(p_minus_one() + FieldElement::ONE, FieldElement::ZERO);
        assert_eq!(FieldElement::ZERO - FieldElement::ONE, p_minus_one());
        assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
        assert_eq!(p_minus_one() * p_minus_one(), FieldElement::ONE);
    }

    #[test]
    fn test_small_arithmetic() {
        let a = FieldElement::from(7u64);
        let b = FieldElement::from(5u64);
        assert_eq!(a + b, FieldElement::from(12u64));
        assert_eq!(a - b, FieldElement::from(2u64));
        assert_eq!(a * b, FieldElement::from(35u64));
        assert_eq!(b - a, -FieldElement::from(2u64));
        assert_eq!(a.square(), FieldElement::from(49u64));
    }

    #[test]
    fn test_inverse_of_random_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let a = FieldElement::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            let inv = a.invert().expect("non-zero element must be invertible");
            assert_eq!(a * inv, FieldElement::ONE);
        }
    }

    #[test]
    fn test_inverse_of_edge_values() {
        assert_eq!(FieldElement::ONE.invert(), Some(FieldElement::ONE));
        assert_eq!(p_minus_one().invert(), Some(p_minus_one()));
        assert_eq!(FieldElement::ZERO.invert(), None);
    }

    #[test]
    fn test_hex_roundtrip_and_display() {
        let a = FieldElement::from(0xdead_beefu64);
        let text = a.to_string();
        assert_eq!(text.len(), 64);
        assert!(text.ends_with("deadbeef"));
        assert_eq!(text.parse::<FieldElement>().unwrap(), a);
        assert_eq!(FieldElement::from_hex(&format!("0x{}", text)).unwrap(), a);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            FieldElement::from_hex("zz"),
            Err(ShamirError::MalformedEncoding(_))
        ));
        assert!(matches!(
            FieldElement::from_hex("00ff"),
            Err(ShamirError::MalformedEncoding(_))
        ));
        assert_eq!(FieldElement::from_hex(MODULUS_HEX), Err(ShamirError::InputTooLarge));
    }

    #[test]
    fn test_sum() {
        let total: FieldElement = (1..=4u64).map(FieldElement::from).sum();
        assert_eq!(total, FieldElement::from(10u64));
    }
}
