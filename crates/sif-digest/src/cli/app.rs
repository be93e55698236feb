use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sif_integrity::{Algorithm, Digest, HashType};

#[derive(Clone, Debug, Parser)]
#[command(name = "sif-digest", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compute the digest of a file or stdin.
    #[command(alias = "c", name = "compute")]
    Compute(ComputeArg),
    /// Check a file or stdin against a stored digest.
    #[command(alias = "v", name = "verify")]
    Verify(VerifyArg),
    /// Extract the digest from a legacy signature plaintext.
    #[command(alias = "l", name = "legacy")]
    Legacy(LegacyArg),
    /// Show the parts of an encoded digest.
    #[command(alias = "i", name = "inspect")]
    Inspect(InspectArg),
}

#[derive(Clone, Debug, Args)]
pub struct ComputeArg {
    #[arg(short, long, env = "SIF_DIGEST_ALGORITHM", default_value = "sha256", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,
    /// Input path; `-` or nothing reads stdin.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct VerifyArg {
    /// Digest in `<algorithm>:<hex>` form.
    #[arg(value_parser = parse_digest)]
    pub digest: Digest,
    /// Input path; `-` or nothing reads stdin.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct LegacyArg {
    /// Hash type recorded in the signature descriptor: sha256, sha384,
    /// sha512, blake2s, blake2b or a raw numeric tag.
    #[arg(short = 't', long, value_parser = parse_hash_type)]
    pub hash_type: HashType,
    /// File holding the signed plaintext; `-` or nothing reads stdin.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArg {
    #[arg(value_parser = parse_digest)]
    pub digest: Digest,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> { s.parse().map_err(|e| format!("{e}")) }

fn parse_digest(s: &str) -> Result<Digest, String> { s.parse().map_err(|e| format!("{e}")) }

pub(crate) fn parse_hash_type(s: &str) -> Result<HashType, String> {
    if let Ok(raw) = s.parse::<u32>() {
        return Ok(HashType::from_raw(raw));
    }
    match s.to_ascii_lowercase().as_str() {
        "sha256" => Ok(HashType::Sha256),
        "sha384" => Ok(HashType::Sha384),
        "sha512" => Ok(HashType::Sha512),
        "blake2s" => Ok(HashType::Blake2s),
        "blake2b" => Ok(HashType::Blake2b),
        _ => Err(format!("unknown hash type: {s}")),
    }
}
