use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::OsRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use zeroize::Zeroizing;

use crate::core::config::SharingConfig;
use crate::core::validation::is_valid_share;
use crate::core::errors::ShamirError;
use crate::security::redaction::{redact_body, redact_hex_bytes};
use crate::security::secret::{secret_from_hex, SecretScalarBytes};
use crate::shamir::dealer::create_bounded;
use crate::shamir::{
    coefficient_parts, combine_secret, combine_with_threshold, lagrange_coefficient, FieldElement,
    ShareSet,
};

/// Shamir secret sharing of secp256k1 scalars
#[derive(Debug, Parser)]
#[command(name = "keyshare", about = "Split and recombine secp256k1 scalars", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a secret into encoded shares, one per line.
    /// Without --secret-hex or --random the hex secret is read from stdin.
    Split {
        /// TOML file with sharing parameters
        #[arg(long)]
        config: Option<PathBuf>,
        /// Shares required to reconstruct
        #[arg(long)]
        threshold: Option<usize>,
        /// Shares to produce; defaults to the number of --labels when those are given
        #[arg(long)]
        total: Option<usize>,
        /// Comma-separated x-coordinates
        #[arg(long, value_delimiter = ',')]
        labels: Option<Vec<u64>>,
        /// 32-byte secret as hex
        #[arg(long, conflicts_with = "random")]
        secret_hex: Option<String>,
        /// Generate a fresh random secret
        #[arg(long)]
        random: bool,
        /// Print the polynomial to stderr (redacted unless DEV_PRINT_SECRETS=1)
        #[arg(long)]
        show_coefficients: bool,
    },
    /// Recombine encoded shares and print the secret as hex
    Combine {
        #[arg(required = true)]
        shares: Vec<String>,
        /// Refuse to combine fewer shares than this
        #[arg(long)]
        threshold: Option<usize>,
    },
    /// Check the structure of an encoded share string
    Validate { candidate: String },
    /// Print the Lagrange parts and weight of one participant
    Weight {
        #[arg(long, value_delimiter = ',', required = true)]
        participants: Vec<u64>,
        #[arg(long)]
        label: u64,
    },
}

/// Executes a parsed command. Returns `false` when the command ran but the
/// answer is negative (an invalid share), which the binary maps to exit code 1.
pub fn run<R, W, E>(cli: Cli, input: &mut R, out: &mut W, err: &mut E) -> anyhow::Result<bool>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    match cli.command {
        Commands::Split { config, threshold, total, labels, secret_hex, random, show_coefficients } => {
            let mut cfg = match config.as_deref() {
                Some(path) => SharingConfig::from_file(path)?,
                None => SharingConfig::default(),
            };
            cfg.apply_env().context("invalid KEYSHARE_* environment override")?;
            if let Some(t) = threshold {
                cfg.threshold = t;
            }
            if let Some(labels) = labels {
                if total.is_none() {
                    cfg.total_shares = labels.len();
                }
                cfg.labels = Some(labels);
            }
            if let Some(n) = total {
                cfg.total_shares = n;
            }
            cfg.validate().context("invalid sharing parameters")?;

            let mut rng = OsRng;
            let secret: SecretScalarBytes = if random {
                Zeroizing::new(FieldElement::random(&mut rng).to_be_bytes())
            } else if let Some(text) = secret_hex {
                secret_from_hex(&text)?
            } else {
                let mut line = Zeroizing::new(String::new());
                input.read_line(&mut line).context("failed to read secret from stdin")?;
                secret_from_hex(&line).map_err(|e| {
                    tracing::debug!(input = %redact_body(line.trim()), "rejected secret from stdin");
                    e
                })?
            };

            let dealing = create_bounded(
                cfg.threshold,
                cfg.total_shares,
                FieldElement::from_be_bytes(&secret)?,
                &cfg.label_elements(),
                &mut rng,
                cfg.max_sampling_attempts,
            )?;

            for encoded in dealing.shares.encode_all() {
                writeln!(out, "{}", encoded)?;
            }
            if show_coefficients {
                for (i, c) in dealing.coefficients.iter().enumerate() {
                    writeln!(err, "coefficient[{}] = {}", i, redact_hex_bytes(&c.to_be_bytes()))?;
                }
            }
            tracing::info!(threshold = cfg.threshold, total = cfg.total_shares, "split secret");
            Ok(true)
        }
        Commands::Combine { shares, threshold } => {
            let set = ShareSet::decode_all(&shares).map_err(report).context("failed to decode shares")?;
            let secret = match threshold {
                Some(t) => Zeroizing::new(combine_with_threshold(&set, t).map_err(report)?.to_be_bytes()),
                None => combine_secret(&set).map_err(report)?,
            };
            writeln!(out, "{}", hex::encode(*secret))?;
            Ok(true)
        }
        Commands::Validate { candidate } => {
            let ok = is_valid_share(candidate.trim());
            writeln!(out, "{}", if ok { "valid" } else { "invalid" })?;
            Ok(ok)
        }
        Commands::Weight { participants, label } => {
            let xs: Vec<FieldElement> = participants.into_iter().map(FieldElement::from).collect();
            let parts = coefficient_parts(&xs, FieldElement::from(label)).map_err(report)?;
            let weight = lagrange_coefficient(&parts)?;
            writeln!(out, "numerator={}", parts.numerator)?;
            writeln!(out, "denominator={}", parts.denominator)?;
            writeln!(out, "weight={}", weight)?;
            Ok(true)
        }
    }
}

fn report(e: ShamirError) -> anyhow::Error {
    if e.is_share_fault() {
        tracing::warn!(error = %e, "share material rejected");
    }
    e.into()
}
