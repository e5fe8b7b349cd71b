use crate::shamir::share::{decode_element_block, ENCODED_ELEMENT_LEN, ENCODED_SHARE_LEN};

/// Structural check of an encoded share string.
///
/// Requirements:
/// - length is a non-zero multiple of 88 (one or more `(x, y)` pairs);
/// - every 44-character block is padded standard base64 of a big-endian
///   integer below the field modulus.
///
/// An empty string carries no share and is rejected.
///
/// Only reports success/failure; never panics.
pub fn is_valid_share(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() % ENCODED_SHARE_LEN != 0 {
        return false;
    }
    // Base64 is ASCII; anything else cannot be sliced into 44-byte blocks safely.
    if !candidate.is_ascii() {
        return false;
    }

    candidate
        .as_bytes()
        .chunks(ENCODED_ELEMENT_LEN)
        .all(|block| match std::str::from_utf8(block) {
            Ok(text) => decode_element_block(text).is_ok(),
            Err(_) => false,
        })
}

/// Validates a list of encoded shares, returning the index of the first bad one.
pub fn first_invalid_share<S: AsRef<str>>(candidates: &[S]) -> Option<usize> {
    candidates.iter().position(|c| !is_valid_share(c.as_ref()))
}
