use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::ShamirError;
use crate::shamir::dealer::sequential_labels;
use crate::shamir::field::FieldElement;
use crate::shamir::polynomial::MAX_SAMPLING_ATTEMPTS;

pub const ENV_THRESHOLD: &str = "KEYSHARE_THRESHOLD";
pub const ENV_TOTAL_SHARES: &str = "KEYSHARE_TOTAL_SHARES";
pub const ENV_LABELS: &str = "KEYSHARE_LABELS";

/// Dealing parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Shares required to reconstruct
    #[serde(default = "SharingConfig::default_threshold")]
    pub threshold: usize,

    /// Shares produced
    #[serde(default = "SharingConfig::default_total_shares")]
    pub total_shares: usize,

    /// Public x-coordinates; `1..=total_shares` when absent
    #[serde(default)]
    pub labels: Option<Vec<u64>>,

    /// Resampling budget per polynomial coefficient
    #[serde(default = "SharingConfig::default_max_sampling_attempts")]
    pub max_sampling_attempts: usize,
}

impl SharingConfig {
    fn default_threshold() -> usize { 2 }
    fn default_total_shares() -> usize { 3 }
    fn default_max_sampling_attempts() -> usize { MAX_SAMPLING_ATTEMPTS }

    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ShamirError> {
        toml::from_str(text)
            .map_err(|e| ShamirError::InvalidConfiguration(format!("invalid config file: {}", e)))
    }

    /// Reads a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ShamirError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ShamirError::InvalidConfiguration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies `KEYSHARE_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ShamirError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ShamirError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_THRESHOLD) {
            self.threshold = parse_count(ENV_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_TOTAL_SHARES) {
            self.total_shares = parse_count(ENV_TOTAL_SHARES, &v)?;
        }
        if let Some(v) = lookup(ENV_LABELS) {
            self.labels = Some(parse_label_list(&v)?);
        }
        Ok(())
    }

    /// Checks `1 <= threshold <= total_shares` and the label list.
    pub fn validate(&self) -> Result<(), ShamirError> {
        if self.threshold == 0 {
            return Err(ShamirError::InvalidConfiguration("threshold cannot be zero".to_string()));
        }
        if self.total_shares == 0 {
            return Err(ShamirError::InvalidConfiguration(
                "total shares cannot be zero".to_string(),
            ));
        }
        if self.threshold > self.total_shares {
            return Err(ShamirError::cannot_require_more_shares(self.threshold, self.total_shares));
        }
        if self.max_sampling_attempts == 0 {
            return Err(ShamirError::InvalidConfiguration(
                "max_sampling_attempts must be positive".to_string(),
            ));
        }
        if let Some(labels) = &self.labels {
            if labels.len() != self.total_shares {
                return Err(ShamirError::InvalidConfiguration(format!(
                    "expected {} labels, got {}",
                    self.total_shares,
                    labels.len()
                )));
            }
            for (i, label) in labels.iter().enumerate() {
                if *label == 0 {
                    return Err(ShamirError::InvalidLabel);
                }
                if labels[..i].contains(label) {
                    return Err(ShamirError::DegenerateShareSet);
                }
            }
        }
        Ok(())
    }

    /// The effective labels as field elements.
    pub fn label_elements(&self) -> Vec<FieldElement> {
        match &self.labels {
            Some(labels) => labels.iter().copied().map(FieldElement::from).collect(),
            None => sequential_labels(self.total_shares),
        }
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            total_shares: Self::default_total_shares(),
            labels: None,
            max_sampling_attempts: Self::default_max_sampling_attempts(),
        }
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, ShamirError> {
    value
        .trim()
        .parse()
        .map_err(|_| ShamirError::InvalidConfiguration(format!("{} must be an integer", key)))
}

/// Parses `"12345, 23451,34512"` into labels.
pub fn parse_label_list(value: &str) -> Result<Vec<u64>, ShamirError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| ShamirError::InvalidConfiguration(format!("invalid label '{}'", s)))
        })
        .collect()
}
