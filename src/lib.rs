#![cfg_attr(not(feature = "std"), no_std)]

//! A Keccak-sponge and NUMS-256 twisted-Edwards toolkit.
//!
//! The permutation and sponge ([`keccak`], [`sponge`], [`sha3`]) and the
//! curve layer ([`bigint`], [`field`], [`scalar`], [`edwards`]) build
//! without the standard library. [`keys`] derives keypairs on top of them
//! and is likewise `no_std`. The protocol layer ([`pke`], [`signature`],
//! [`symmetric`]) and the file/CLI plumbing ([`error`], [`io`], [`nist`],
//! [`cli`]) need an allocator and a filesystem, so they're gated behind
//! the `std` feature, which is on by default.

pub mod bigint;
pub mod edwards;
pub mod field;
pub mod keccak;
pub mod keys;
pub mod scalar;
pub mod sha3;
pub mod sponge;

#[cfg(feature = "std")]
pub mod error;
#[cfg(feature = "std")]
pub mod io;
#[cfg(feature = "std")]
pub mod nist;
#[cfg(feature = "std")]
pub mod pke;
#[cfg(feature = "std")]
pub mod signature;
#[cfg(feature = "std")]
pub mod symmetric;

#[cfg(feature = "std")]
pub mod cli;
