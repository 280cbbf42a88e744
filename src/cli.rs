//! `clap`-derived argument types for the `nums256` binary's sub-commands,
//! mirroring the CLI surface this crate's core exposes to as an external
//! driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nums256", about = "Keccak sponge + NUMS-256 cryptographic toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the hex SHA3-`suffix` digest of a file's bytes.
    Hash {
        #[arg(value_parser = ["224", "256", "384", "512"])]
        suffix: String,
        path: PathBuf,
    },
    /// Absorb a passphrase then a file, squeeze `out_bits` of SHAKE output.
    Mac {
        #[arg(value_parser = ["128", "256"])]
        suffix: String,
        passphrase: String,
        path: PathBuf,
        out_bits: usize,
    },
    /// Symmetric sponge-based authenticated encryption.
    Encrypt { passphrase: String, in_path: PathBuf, out_path: PathBuf },
    /// Inverse of `encrypt`; fails closed on a MAC mismatch.
    Decrypt { passphrase: String, in_path: PathBuf, out_path: PathBuf },
    /// Derive a keypair from a passphrase and write the public key.
    Keygen { passphrase: String, out_path: PathBuf },
    /// ECIES-style public-key encryption.
    EncryptPk { pk_path: PathBuf, msg_path: PathBuf, out_path: PathBuf },
    /// Inverse of `encrypt-pk`.
    DecryptPk { passphrase: String, in_path: PathBuf, out_path: PathBuf },
    /// Schnorr-sign a file's bytes.
    Sign { passphrase: String, msg_path: PathBuf, out_path: PathBuf },
    /// Verify a Schnorr signature against a message and public key.
    Verify { msg_path: PathBuf, sig_path: PathBuf, pk_path: PathBuf },
}
