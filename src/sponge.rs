//! The Keccak sponge construction: absorb input into a fixed-size state via
//! the permutation, squeeze output from the same state.
//!
//! This is the classic FIPS 202 sponge (rate/capacity split, `0x06`/`0x1F`
//! domain-separated padding), not the Cyclist duplex this crate's keccak.rs
//! is descended from. Cyclist's per-block domain separators don't produce
//! FIPS-conformant SHA-3/SHAKE output, so absorb/pad/squeeze are rebuilt
//! here against the byte-for-byte contract in spec.md §4.2.

use crate::keccak::{KeccakState, WIDTH};

/// Domain-separation byte appended before the final permutation of the
/// absorb phase: `0x06` for SHA-3, `0x1F` for SHAKE.
const SHA3_PAD: u8 = 0x06;
const SHAKE_PAD: u8 = 0x1F;

/// A SHA-3/SHAKE parameter set: capacity, rate, and the two derived sizes
/// a sponge needs to track its absorb/squeeze cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

impl Variant {
    /// The `suffix` parameter named throughout spec.md (the security
    /// strength in bits: capacity = 2 * suffix).
    fn suffix(self) -> usize {
        match self {
            Variant::Sha3_224 => 224,
            Variant::Sha3_256 => 256,
            Variant::Sha3_384 => 384,
            Variant::Sha3_512 => 512,
            Variant::Shake128 => 128,
            Variant::Shake256 => 256,
        }
    }

    fn is_shake(self) -> bool {
        matches!(self, Variant::Shake128 | Variant::Shake256)
    }

    /// Capacity in bytes: `2 * suffix / 8`.
    fn capacity_bytes(self) -> usize {
        2 * self.suffix() / 8
    }

    /// Rate in bytes: `200 - capacity_bytes`.
    pub fn rate_bytes(self) -> usize {
        WIDTH - self.capacity_bytes()
    }

    /// The default digest length for a SHA-3 variant (`suffix / 8` bytes).
    /// Not meaningful for SHAKE, which takes a caller-chosen output length.
    fn digest_bytes(self) -> usize {
        self.suffix() / 8
    }

    fn pad_byte(self) -> u8 {
        if self.is_shake() {
            SHAKE_PAD
        } else {
            SHA3_PAD
        }
    }

    /// Constructs a [`Variant`] from a raw suffix, per spec.md §4.2's
    /// contract ("init with an unsupported suffix ... is a contract
    /// violation").
    pub fn from_sha3_suffix(suffix: usize) -> Self {
        match suffix {
            224 => Variant::Sha3_224,
            256 => Variant::Sha3_256,
            384 => Variant::Sha3_384,
            512 => Variant::Sha3_512,
            other => panic!("unsupported SHA-3 suffix: {other}"),
        }
    }

    pub fn from_shake_suffix(suffix: usize) -> Self {
        match suffix {
            128 => Variant::Shake128,
            256 => Variant::Shake256,
            other => panic!("unsupported SHAKE suffix: {other}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Absorbing,
    Squeezing,
}

/// An owned sponge handle. Not safe for concurrent use: callers needing
/// parallel hashing allocate distinct handles (spec.md §5).
#[derive(Clone)]
pub struct Sponge {
    variant: Variant,
    state: KeccakState,
    pos: usize,
    phase: Phase,
    /// Set once a squeezed block has been fully consumed; cleared by the
    /// permutation that produces the next block. `false` immediately after
    /// `pad_and_finalize`, since that permutation already produced the
    /// first squeezable block.
    need_permute: bool,
}

impl Sponge {
    /// `init(suffix)`: zeroes the state and resets the absorb cursor.
    pub fn new(variant: Variant) -> Self {
        Sponge {
            variant,
            state: KeccakState::default(),
            pos: 0,
            phase: Phase::Absorbing,
            need_permute: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn rate_bytes(&self) -> usize {
        self.variant.rate_bytes()
    }

    /// `absorb(buffer)`: XORs input bytes into the state at successive
    /// positions starting at `pos`, permuting whenever a full rate block
    /// has been consumed. May be called repeatedly while absorbing.
    pub fn absorb(&mut self, input: &[u8]) {
        assert_eq!(self.phase, Phase::Absorbing, "absorb after finalize");
        let rate = self.rate_bytes();
        let mut offset = 0;
        while offset < input.len() {
            let state_bytes = self.state.as_mut();
            let take = (rate - self.pos).min(input.len() - offset);
            for i in 0..take {
                state_bytes[self.pos + i] ^= input[offset + i];
            }
            self.pos += take;
            offset += take;
            if self.pos == rate {
                self.state.permute();
                self.pos = 0;
            }
        }
        debug_assert!(self.pos < rate);
    }

    /// `pad_and_finalize`: XORs the domain-separation byte at the current
    /// position, XORs `0x80` at the last byte of the rate block, and
    /// permutes once. Closes the absorb phase.
    fn pad_and_finalize(&mut self) {
        assert_eq!(self.phase, Phase::Absorbing, "finalize called twice");
        let rate = self.rate_bytes();
        let pad = self.variant.pad_byte();
        let state_bytes = self.state.as_mut();
        state_bytes[self.pos] ^= pad;
        state_bytes[rate - 1] ^= 0x80;
        self.state.permute();
        self.pos = 0;
        self.phase = Phase::Squeezing;
        self.need_permute = false;
    }

    /// `squeeze(n)`: emits the first `rate_bytes` of the state, permuting
    /// between blocks as needed. Restartable across multiple calls: a call
    /// that stops exactly on a block boundary correctly permutes before the
    /// next call resumes, since `need_permute` persists across calls.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if self.phase == Phase::Absorbing {
            self.pad_and_finalize();
        }
        let rate = self.rate_bytes();
        let mut offset = 0;
        while offset < out.len() {
            if self.need_permute {
                self.state.permute();
                self.need_permute = false;
            }
            let state_bytes = self.state.as_ref();
            let take = (rate - self.pos).min(out.len() - offset);
            out[offset..offset + take].copy_from_slice(&state_bytes[self.pos..self.pos + take]);
            self.pos += take;
            offset += take;
            if self.pos == rate {
                self.pos = 0;
                self.need_permute = true;
            }
        }
    }

    #[cfg(feature = "std")]
    pub fn squeeze_to_vec(&mut self, n: usize) -> std::vec::Vec<u8> {
        let mut out = vec![0u8; n];
        self.squeeze(&mut out);
        out
    }

    /// `digest()`: `pad_and_finalize` followed by squeezing the variant's
    /// default output length. Only meaningful for SHA-3 variants, whose
    /// output always fits in a single rate block.
    pub fn digest(mut self) -> Digest {
        let mut out = [0u8; 64];
        let n = self.variant.digest_bytes();
        self.squeeze(&mut out[..n]);
        Digest { bytes: out, len: n }
    }
}

/// A fixed-capacity digest buffer sized for the largest SHA-3 output
/// (512 bits). [`AsRef<[u8]>`] exposes only the `len` bytes that are valid.
#[derive(Clone, Copy)]
pub struct Digest {
    bytes: [u8; 64],
    len: usize,
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_ref() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorbs_across_multiple_calls_like_one_call() {
        let msg = b"the quick brown fox jumps over the lazy dog";
        let mut one_shot = Sponge::new(Variant::Sha3_256);
        one_shot.absorb(msg);
        let d1 = one_shot.digest();

        let mut split = Sponge::new(Variant::Sha3_256);
        split.absorb(&msg[..10]);
        split.absorb(&msg[10..]);
        let d2 = split.digest();

        assert_eq!(d1.as_ref(), d2.as_ref());
    }

    #[test]
    fn squeeze_in_small_pieces_matches_one_shot_across_block_boundaries() {
        let rate = Variant::Shake128.rate_bytes();
        let mut one_shot = Sponge::new(Variant::Shake128);
        one_shot.absorb(b"squeeze me");
        let mut expected = vec![0u8; rate * 2 + 7];
        one_shot.squeeze(&mut expected);

        let mut piecewise = Sponge::new(Variant::Shake128);
        piecewise.absorb(b"squeeze me");
        let mut actual = vec![0u8; rate * 2 + 7];
        // First piece lands exactly on the rate boundary, forcing the next
        // call to resume with a pending permute rather than stale bytes.
        piecewise.squeeze(&mut actual[..rate]);
        piecewise.squeeze(&mut actual[rate..]);

        assert_eq!(expected, actual);
    }

    #[test]
    #[should_panic(expected = "absorb after finalize")]
    fn absorb_after_finalize_is_a_contract_violation() {
        let mut sponge = Sponge::new(Variant::Shake128);
        sponge.absorb(b"x");
        let mut out = [0u8; 4];
        sponge.squeeze(&mut out);
        sponge.absorb(b"y");
    }
}
