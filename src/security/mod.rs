// src/security/mod.rs
//! Secret-handling helpers: zeroizing buffers and redacted output.

pub mod redaction;
pub mod secret;

// Secret buffer alias re-export
pub use secret::{SecretScalarBytes, SecretVec};

// Redaction helpers to avoid accidental secret prints
pub use redaction::{redact_body, redact_hex_bytes};
