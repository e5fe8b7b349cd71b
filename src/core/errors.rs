use thiserror::Error;

/// Errors raised by share generation, reconstruction and share decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    /// The secret (or a decoded integer) is not smaller than the field modulus.
    #[error("input too large: value must be below the secp256k1 group order")]
    InputTooLarge,

    /// Threshold / share count / label list do not describe a usable scheme.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A share label (x-coordinate) of zero would expose the secret itself.
    #[error("invalid share label: x-coordinate must be non-zero")]
    InvalidLabel,

    /// Two shares carry the same x-coordinate, so the interpolation denominator is zero.
    #[error("one of the shares is invalid: duplicate x-coordinate")]
    DegenerateShareSet,

    /// Reconstruction was asked to work on nothing.
    #[error("share set is empty")]
    EmptyShareSet,

    /// Fewer shares than the caller-declared threshold.
    #[error("insufficient shares: required {required}, provided {provided}")]
    InsufficientShares { required: usize, provided: usize },

    /// External share string could not be decoded.
    #[error("malformed share encoding: {0}")]
    MalformedEncoding(String),

    /// The random source kept producing colliding coefficients.
    #[error("random source exhausted while sampling distinct coefficients")]
    RandomSourceExhausted,
}

impl ShamirError {
    /// Shorthand used for the `threshold > total` case.
    pub fn cannot_require_more_shares(threshold: usize, total: usize) -> Self {
        ShamirError::InvalidConfiguration(format!(
            "cannot require more shares than existing: threshold {} > total {}",
            threshold, total
        ))
    }

    /// Errors that indicate tampered or mismatched share material rather than bad parameters.
    pub fn is_share_fault(&self) -> bool {
        matches!(
            self,
            ShamirError::DegenerateShareSet
                | ShamirError::InvalidLabel
                | ShamirError::MalformedEncoding(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_configuration() {
        let err = ShamirError::cannot_require_more_shares(4, 3);
        assert_eq!(
            format!("{}", err),
            "invalid configuration: cannot require more shares than existing: threshold 4 > total 3"
        );
    }

    #[test]
    fn test_display_insufficient_shares() {
        let err = ShamirError::InsufficientShares { required: 3, provided: 2 };
        assert_eq!(format!("{}", err), "insufficient shares: required 3, provided 2");
    }

    #[test]
    fn test_share_fault_classification() {
        assert!(ShamirError::DegenerateShareSet.is_share_fault());
        assert!(ShamirError::MalformedEncoding("x".into()).is_share_fault());
        assert!(!ShamirError::InputTooLarge.is_share_fault());
        assert!(!ShamirError::RandomSourceExhausted.is_share_fault());
    }
}
