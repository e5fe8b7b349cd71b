// Simple helpers to avoid accidental printing of secrets in logs and CLI output.
use std::env;

pub const DEV_PRINT_SECRETS: &str = "DEV_PRINT_SECRETS";

/// True when DEV_PRINT_SECRETS=1 is set in the environment.
pub fn secrets_printable() -> bool {
    env::var(DEV_PRINT_SECRETS).ok().as_deref() == Some("1")
}

/// Redact a text body unless DEV_PRINT_SECRETS=1 is set in the environment.
/// By default this returns a short placeholder containing only the length.
pub fn redact_body(s: &str) -> String {
    redact_body_if(s, secrets_printable())
}

/// Redact bytes as hex unless DEV_PRINT_SECRETS=1 is set.
pub fn redact_hex_bytes(bytes: &[u8]) -> String {
    redact_hex_bytes_if(bytes, secrets_printable())
}

pub fn redact_body_if(s: &str, reveal: bool) -> String {
    if reveal {
        return s.to_string();
    }
    format!("<redacted len={}>", s.len())
}

pub fn redact_hex_bytes_if(bytes: &[u8], reveal: bool) -> String {
    if reveal {
        return format!("0x{}", hex::encode(bytes));
    }
    format!("<redacted hex len={}>", bytes.len())
}
