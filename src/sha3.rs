//! One-shot SHA-3/SHAKE entry points built on [`crate::sponge::Sponge`].
//!
//! These are the facade spec.md §4.3 describes: callers pass a suffix and a
//! message and get bytes back, without touching the absorb/squeeze state
//! machine directly.

use crate::sponge::{Sponge, Variant};

/// Computes one of the four fixed-length SHA-3 digests.
///
/// `suffix` must be one of 224, 256, 384, 512; any other value is a
/// contract violation and panics, per spec.md §4.2/§7.
pub fn sha3(suffix: usize, message: &[u8]) -> [u8; 64] {
    let variant = Variant::from_sha3_suffix(suffix);
    let mut sponge = Sponge::new(variant);
    sponge.absorb(message);
    let digest = sponge.digest();
    let mut out = [0u8; 64];
    out[..digest.as_ref().len()].copy_from_slice(digest.as_ref());
    out
}

/// Computes a SHA-3 digest into a caller-sized buffer, for callers that
/// don't want the padding of the fixed 64-byte return of [`sha3`].
pub fn sha3_into(suffix: usize, message: &[u8], out: &mut [u8]) {
    let variant = Variant::from_sha3_suffix(suffix);
    let mut sponge = Sponge::new(variant);
    sponge.absorb(message);
    sponge.squeeze(out);
}

/// Computes `length` bytes of SHAKE output for the given suffix (128 or 256).
#[cfg(feature = "std")]
pub fn shake(suffix: usize, message: &[u8], length: usize) -> std::vec::Vec<u8> {
    let variant = Variant::from_shake_suffix(suffix);
    let mut sponge = Sponge::new(variant);
    sponge.absorb(message);
    sponge.squeeze_to_vec(length)
}

/// Computes SHAKE output into a caller-supplied buffer, the `no_std`-safe
/// counterpart of [`shake`].
pub fn shake_into(suffix: usize, message: &[u8], out: &mut [u8]) {
    let variant = Variant::from_shake_suffix(suffix);
    let mut sponge = Sponge::new(variant);
    sponge.absorb(message);
    sponge.squeeze(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIST FIPS 202 short message test vectors, zero-length input.
    #[test]
    fn sha3_256_empty_message() {
        let expected = [
            0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
            0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
            0x80, 0xf8, 0x43, 0x4a,
        ];
        assert_eq!(&sha3(256, b"")[..32], &expected);
    }

    #[test]
    fn sha3_512_empty_message() {
        let expected = [
            0xa6, 0x9f, 0x73, 0xcc, 0xa2, 0x3a, 0x9a, 0xc5, 0xc8, 0xb5, 0x67, 0xdc, 0x18, 0x5a,
            0x75, 0x6e, 0x97, 0xc9, 0x82, 0x16, 0x4f, 0xe2, 0x58, 0x59, 0xe0, 0xd1, 0xdc, 0xc1,
            0x47, 0x5c, 0x80, 0xa6, 0x15, 0xb2, 0x12, 0x3a, 0xf1, 0xf5, 0xf9, 0x4c, 0x11, 0xe3,
            0xe9, 0x40, 0x2c, 0x3a, 0xc5, 0x58, 0xf5, 0x00, 0x19, 0x9d, 0x95, 0xb6, 0xd3, 0xe3,
            0x01, 0x75, 0x85, 0x86, 0x28, 0x1d, 0xcd, 0x26,
        ];
        assert_eq!(&sha3(512, b"")[..64], &expected);
    }

    #[test]
    fn shake128_empty_message_32_bytes() {
        let expected = [
            0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d, 0x61, 0x60, 0x45, 0x50, 0x76, 0x05,
            0x85, 0x3e, 0xd7, 0x3b, 0x80, 0x93, 0xf6, 0xef, 0xbc, 0x88, 0xeb, 0x1a, 0x6e, 0xac,
            0xfa, 0x66, 0xef, 0x26,
        ];
        let out = shake(128, b"", 32);
        assert_eq!(out, expected);
    }

    #[test]
    fn shake_into_matches_shake_vec() {
        let mut out = [0u8; 16];
        shake_into(256, b"abc", &mut out);
        let vec_out = shake(256, b"abc", 16);
        assert_eq!(&out[..], vec_out.as_slice());
    }
}
