//! Secret share definition and its canonical external encoding.
//!
//! A share is a point `(x, y)` on the dealer's polynomial:
//! - `x` (label): non-zero, public, unique within one dealing.
//! - `y` (value): `f(x)`, sensitive.
//!
//! Encoded form: `base64(x) || base64(y)` where each element is its 32-byte
//! big-endian representation in standard padded base64, 44 characters each.

use std::fmt;
use std::collections::btree_map::{self, BTreeMap};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::core::errors::ShamirError;
use crate::shamir::field::{FieldElement, ELEMENT_BYTES};

/// Length of one base64-encoded field element.
pub const ENCODED_ELEMENT_LEN: usize = 44;

/// Length of one encoded `(x, y)` share.
pub const ENCODED_SHARE_LEN: usize = 2 * ENCODED_ELEMENT_LEN;

/// Public identifier of a share: its x-coordinate, ordered and hashed by the
/// canonical 32-byte big-endian form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShareLabel(FieldElement);

impl ShareLabel {
    pub fn element(&self) -> FieldElement {
        self.0
    }

    pub fn to_bytes(&self) -> [u8; ELEMENT_BYTES] {
        self.0.to_be_bytes()
    }
}

impl From<FieldElement> for ShareLabel {
    fn from(x: FieldElement) -> Self {
        Self(x)
    }
}

impl PartialOrd for ShareLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShareLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_bytes().cmp(&other.to_bytes())
    }
}

impl std::hash::Hash for ShareLabel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl fmt::Display for ShareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for ShareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShareLabel({})", self.0)
    }
}

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(try_from = "RawShare")]
pub struct Share {
    #[zeroize(skip)]
    x: FieldElement,
    y: FieldElement,
}

#[derive(Deserialize)]
struct RawShare {
    x: FieldElement,
    y: FieldElement,
}

impl TryFrom<RawShare> for Share {
    type Error = ShamirError;

    fn try_from(raw: RawShare) -> Result<Self, Self::Error> {
        Share::new(raw.x, raw.y)
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a share, rejecting a zero x-coordinate.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, ShamirError> {
        if x.is_zero() {
            return Err(ShamirError::InvalidLabel);
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> FieldElement {
        self.x
    }

    pub fn y(&self) -> FieldElement {
        self.y
    }

    pub fn label(&self) -> ShareLabel {
        ShareLabel(self.x)
    }

    /// Canonical 88-character string form.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(ENCODED_SHARE_LEN);
        STANDARD.encode_string(self.x.to_be_bytes(), &mut out);
        STANDARD.encode_string(self.y.to_be_bytes(), &mut out);
        out
    }

    /// Parses the canonical string form.
    pub fn decode(encoded: &str) -> Result<Self, ShamirError> {
        if encoded.len() != ENCODED_SHARE_LEN {
            return Err(ShamirError::MalformedEncoding(format!(
                "expected {} characters, got {}",
                ENCODED_SHARE_LEN,
                encoded.len()
            )));
        }
        let (x_block, y_block) = split_block(encoded)?;
        let x = decode_element_block(x_block)?;
        let y = decode_element_block(y_block)?;
        Share::new(x, y).map_err(|_| {
            ShamirError::MalformedEncoding("x-coordinate must be non-zero".to_string())
        })
    }
}

fn split_block(encoded: &str) -> Result<(&str, &str), ShamirError> {
    if !encoded.is_char_boundary(ENCODED_ELEMENT_LEN) {
        return Err(ShamirError::MalformedEncoding("non-ascii input".to_string()));
    }
    Ok(encoded.split_at(ENCODED_ELEMENT_LEN))
}

/// Decodes one 44-character block into a field element.
///
/// The block must be padded standard base64 of a big-endian integer below the
/// field modulus. [`Share::encode`] always emits 32 bytes, but 31- and 33-byte
/// forms of the same integer are accepted.
pub fn decode_element_block(block: &str) -> Result<FieldElement, ShamirError> {
    if block.len() != ENCODED_ELEMENT_LEN {
        return Err(ShamirError::MalformedEncoding(format!(
            "expected {} characters per element, got {}",
            ENCODED_ELEMENT_LEN,
            block.len()
        )));
    }
    let bytes = Zeroizing::new(
        STANDARD
            .decode(block)
            .map_err(|e| ShamirError::MalformedEncoding(format!("invalid base64: {}", e)))?,
    );

    // A block may carry 31 to 33 bytes. The integer is what counts: short
    // forms are left-padded, long forms may only add leading zeros.
    let out_of_range = || ShamirError::MalformedEncoding("element out of field range".to_string());
    let digits = match bytes.len().checked_sub(ELEMENT_BYTES) {
        Some(extra) => {
            let (leading, rest) = bytes.split_at(extra);
            if leading.iter().any(|&b| b != 0) {
                return Err(out_of_range());
            }
            rest
        }
        None => &bytes[..],
    };
    let mut padded = Zeroizing::new([0u8; ELEMENT_BYTES]);
    padded[ELEMENT_BYTES - digits.len()..].copy_from_slice(digits);
    FieldElement::from_be_bytes(&padded).map_err(|_| out_of_range())
}

/// Shares keyed by label.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ShareSet {
    shares: BTreeMap<ShareLabel, Share>,
}

impl fmt::Debug for ShareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.shares.values()).finish()
    }
}

impl ShareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a share; a second share with the same label is a degenerate set.
    pub fn insert(&mut self, share: Share) -> Result<(), ShamirError> {
        match self.shares.entry(share.label()) {
            btree_map::Entry::Occupied(_) => Err(ShamirError::DegenerateShareSet),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(share);
                Ok(())
            }
        }
    }

    pub fn get(&self, label: &ShareLabel) -> Option<&Share> {
        self.shares.get(label)
    }

    pub fn get_by_x(&self, x: FieldElement) -> Option<&Share> {
        self.shares.get(&ShareLabel(x))
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = ShareLabel> + '_ {
        self.shares.keys().copied()
    }

    /// The x-coordinates in label order.
    pub fn xs(&self) -> Vec<FieldElement> {
        self.shares.keys().map(ShareLabel::element).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ShareLabel, &Share)> {
        self.shares.iter()
    }

    pub fn shares(&self) -> btree_map::Values<'_, ShareLabel, Share> {
        self.shares.values()
    }

    /// Copies out the shares whose x-coordinates are listed.
    pub fn select(&self, xs: &[FieldElement]) -> Result<ShareSet, ShamirError> {
        let mut out = ShareSet::new();
        for x in xs {
            let share = self.get_by_x(*x).ok_or_else(|| {
                ShamirError::InvalidConfiguration(format!("no share with label {}", x))
            })?;
            out.insert(share.clone())?;
        }
        Ok(out)
    }

    pub fn encode_all(&self) -> Vec<String> {
        self.shares.values().map(Share::encode).collect()
    }

    pub fn decode_all<I, S>(encoded: I) -> Result<ShareSet, ShamirError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = ShareSet::new();
        for item in encoded {
            out.insert(Share::decode(item.as_ref().trim())?)?;
        }
        Ok(out)
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = btree_map::Values<'a, ShareLabel, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.values()
    }
}

impl TryFrom<Vec<Share>> for ShareSet {
    type Error = ShamirError;

    fn try_from(shares: Vec<Share>) -> Result<Self, Self::Error> {
        let mut out = ShareSet::new();
        for share in shares {
            out.insert(share)?;
        }
        Ok(out)
    }
}
