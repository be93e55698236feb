use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sif_integrity::{compute, encode, extract_legacy};

use super::app::{Commands, ComputeArg, InspectArg, LegacyArg, VerifyArg};

pub const EXIT_OK: u8 = 0;
pub const EXIT_MISMATCH: u8 = 1;

pub fn run(cmd: Commands) -> Result<u8> {
    match cmd {
        Commands::Compute(arg) => run_compute(arg),
        Commands::Verify(arg) => run_verify(arg),
        Commands::Legacy(arg) => run_legacy(arg),
        Commands::Inspect(arg) => run_inspect(arg),
    }
}

fn open(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(file))
        }
    }
}

fn run_compute(arg: ComputeArg) -> Result<u8> {
    tracing::debug!(algorithm = %arg.algorithm, path = ?arg.path, "computing digest");
    let digest = compute(arg.algorithm, open(arg.path.as_deref())?)?;
    println!("{}", encode(&digest));
    Ok(EXIT_OK)
}

fn run_verify(arg: VerifyArg) -> Result<u8> {
    tracing::debug!(digest = %arg.digest, path = ?arg.path, "verifying");
    if arg.digest.matches(open(arg.path.as_deref())?)? {
        println!("OK");
        Ok(EXIT_OK)
    } else {
        println!("MISMATCH");
        Ok(EXIT_MISMATCH)
    }
}

fn run_legacy(arg: LegacyArg) -> Result<u8> {
    let mut blob = Vec::new();
    open(arg.path.as_deref())?
        .read_to_end(&mut blob)
        .context("failed to read legacy plaintext")?;
    let digest = extract_legacy(arg.hash_type, &blob)
        .with_context(|| format!("legacy digest with hash type {}", arg.hash_type))?;
    println!("{}", encode(&digest));
    Ok(EXIT_OK)
}

fn run_inspect(arg: InspectArg) -> Result<u8> {
    let digest = arg.digest;
    println!("Algorithm: {}", digest.name());
    println!("Length:    {} bytes", digest.len());
    println!("Value:     {}", digest.to_hex());
    if !digest.algorithm().is_available() {
        println!("Note:      {} is not computable in this build", digest.name());
    }
    Ok(EXIT_OK)
}
