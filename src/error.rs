//! Library-level error kinds surfaced by the protocol layer.
//!
//! Contract violations inside the sponge/permutation core (absorb after
//! finalize, an unsupported suffix) stay as `panic!`/`debug_assert!`;
//! those are programming errors, not conditions a caller recovers from.
//! `Error` is reserved for the handful of spots where a value supplied at
//! runtime (a file, a passphrase-derived key, a tag) can legitimately be
//! wrong, so the CLI can report it instead of aborting.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid point: decompression failed or point is outside the prime-order subgroup")]
    InvalidPoint,

    #[error("invalid tag: ciphertext failed authentication")]
    InvalidTag,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
