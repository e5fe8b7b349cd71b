//! Small helpers and aliases for secret buffers that must be zeroized on drop.
use zeroize::Zeroizing;

use crate::core::errors::ShamirError;
use crate::shamir::field::ELEMENT_BYTES;

/// Common alias for secret byte buffers which will be zeroed when dropped.
pub type SecretVec = Zeroizing<Vec<u8>>;

/// A 32-byte scalar secret which will be zeroed when dropped.
pub type SecretScalarBytes = Zeroizing<[u8; ELEMENT_BYTES]>;

/// Convert a Vec<u8> into a `SecretVec` which will be zeroized on drop.
pub fn vec_to_secret(v: Vec<u8>) -> SecretVec {
    Zeroizing::new(v)
}

/// Decode a 64-digit hex secret (optional `0x`) into a zeroizing 32-byte buffer.
pub fn secret_from_hex(text: &str) -> Result<SecretScalarBytes, ShamirError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let decoded = vec_to_secret(
        hex::decode(digits)
            .map_err(|e| ShamirError::MalformedEncoding(format!("invalid hex secret: {}", e)))?,
    );
    if decoded.len() != ELEMENT_BYTES {
        return Err(ShamirError::MalformedEncoding(format!(
            "secret must be {} bytes, got {}",
            ELEMENT_BYTES,
            decoded.len()
        )));
    }
    let mut out = Zeroizing::new([0u8; ELEMENT_BYTES]);
    out.copy_from_slice(&decoded);
    Ok(out)
}
