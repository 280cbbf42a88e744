//! Fixed-width 256-bit unsigned integer arithmetic.
//!
//! Neither field in use here (the NUMS-256 prime `p` or the group order `r`)
//! is expressible in a machine word, and nothing in the dependency set
//! offers wide modular multiplication, so the handful of operations the
//! curve layer needs are built directly on 4×64-bit limb arrays, little-
//! endian (limb 0 is least significant), in the spirit of the rest of this
//! crate's lane-major byte handling.

use zeroize::Zeroize;

/// A 256-bit unsigned integer, stored as four little-endian 64-bit limbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub [u64; 4]);

impl Zeroize for U256 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl U256 {
    pub const ZERO: U256 = U256([0, 0, 0, 0]);
    pub const ONE: U256 = U256([1, 0, 0, 0]);

    pub fn from_u64(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }

    /// Big-endian 32-byte encoding, matching the file/wire formats of §6.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (limb_index, limb) in self.0.iter().enumerate() {
            out[24 - limb_index * 8..32 - limb_index * 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb_index, limb) in limbs.iter_mut().enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes[24 - limb_index * 8..32 - limb_index * 8]);
            *limb = u64::from_be_bytes(buf);
        }
        U256(limbs)
    }

    pub fn is_zero(self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    /// Least significant bit, used by double-and-add scalar multiplication.
    pub fn bit(self, index: usize) -> bool {
        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Parity of the value, used for the public-key-canonicalization rule.
    pub fn is_odd(self) -> bool {
        self.0[0] & 1 == 1
    }

    /// `self + other`, returning the 256-bit result and a carry-out bit.
    pub fn adc(self, other: U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u128;
        for i in 0..4 {
            let sum = self.0[i] as u128 + other.0[i] as u128 + carry;
            out[i] = sum as u64;
            carry = sum >> 64;
        }
        (U256(out), carry != 0)
    }

    /// `self - other`, returning the 256-bit result and a borrow-out bit.
    pub fn sbb(self, other: U256) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0i128;
        for i in 0..4 {
            let diff = self.0[i] as i128 - other.0[i] as i128 - borrow;
            if diff < 0 {
                out[i] = (diff + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                out[i] = diff as u64;
                borrow = 0;
            }
        }
        (U256(out), borrow != 0)
    }

    /// `self << 1`, returning the shifted value and the bit shifted out.
    pub fn shl1(self) -> (U256, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;
        for i in 0..4 {
            out[i] = (self.0[i] << 1) | carry;
            carry = self.0[i] >> 63;
        }
        (U256(out), carry != 0)
    }

    /// `self < other`.
    pub fn less_than(self, other: U256) -> bool {
        self.sbb(other).1
    }

    /// Reduces an arbitrary-length big-endian byte string modulo `modulus`
    /// by the textbook bit-serial method (`remainder = remainder*2 + bit`,
    /// with a conditional subtraction whenever the remainder would exceed
    /// the modulus). Used both by [`mul_mod`]'s 512-bit product reduction
    /// and by private-scalar derivation, which reduces a 64-byte SHAKE
    /// output modulo the group order.
    pub fn reduce_be_bytes(bytes: &[u8], modulus: U256) -> U256 {
        let mut remainder = U256::ZERO;
        for &byte in bytes {
            for bit_index in (0..8).rev() {
                let bit = (byte >> bit_index) & 1;
                let (doubled, overflow) = remainder.shl1();
                let (with_bit, _) = doubled.adc(U256::from_u64(bit as u64));
                remainder = with_bit;
                if overflow || !remainder.less_than(modulus) {
                    let (reduced, borrow) = remainder.sbb(modulus);
                    debug_assert!(!borrow || overflow);
                    remainder = reduced;
                }
            }
        }
        remainder
    }

    /// `(self + other) mod modulus`.
    pub fn add_mod(self, other: U256, modulus: U256) -> U256 {
        let (sum, carry) = self.adc(other);
        if carry || !sum.less_than(modulus) {
            sum.sbb(modulus).0
        } else {
            sum
        }
    }

    /// `(self - other) mod modulus`.
    pub fn sub_mod(self, other: U256, modulus: U256) -> U256 {
        let (diff, borrow) = self.sbb(other);
        if borrow {
            diff.adc(modulus).0
        } else {
            diff
        }
    }

    /// `(self * other) mod modulus`, via a full 512-bit schoolbook product
    /// followed by [`reduce_be_bytes`].
    pub fn mul_mod(self, other: U256, modulus: U256) -> U256 {
        let wide = mul_wide(self, other);
        let mut be_bytes = [0u8; 64];
        for (limb_index, limb) in wide.iter().enumerate() {
            be_bytes[64 - (limb_index + 1) * 8..64 - limb_index * 8]
                .copy_from_slice(&limb.to_be_bytes());
        }
        U256::reduce_be_bytes(&be_bytes, modulus)
    }

    /// `self^exponent mod modulus` by fixed-iteration-count square-and-
    /// multiply (256 iterations regardless of the exponent's bit length),
    /// matching the fixed-iteration-count discipline used by scalar
    /// multiplication on the curve.
    pub fn pow_mod(self, exponent: U256, modulus: U256) -> U256 {
        let mut result = U256::ONE;
        let mut base = self;
        for bit_index in 0..256 {
            if exponent.bit(bit_index) {
                result = result.mul_mod(base, modulus);
            }
            base = base.mul_mod(base, modulus);
        }
        result
    }

    /// Modular inverse via Fermat's little theorem: `self^(modulus-2) mod
    /// modulus`. Valid because both moduli this crate reduces against (the
    /// field prime `p` and the group order `r`) are prime.
    pub fn inv_mod(self, modulus: U256) -> U256 {
        let two = U256::from_u64(2);
        let exponent = modulus.sbb(two).0;
        self.pow_mod(exponent, modulus)
    }
}

/// Full 512-bit product of two 256-bit values, as eight little-endian
/// 64-bit limbs. Carries are folded one column at a time rather than
/// summed into a single `u128` accumulator per column, since a column can
/// receive up to four full 64x64 products and those alone can exceed
/// `u128::MAX`.
fn mul_wide(a: U256, b: U256) -> [u64; 8] {
    let mut out = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let t = out[i + j] as u128 + a.0[i] as u128 * b.0[j] as u128 + carry;
            out[i + j] = t as u64;
            carry = t >> 64;
        }
        out[i + 4] = carry as u64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_be_bytes() {
        let value = U256([0x1122334455667788, 0x99aabbccddeeff00, 1, 2]);
        assert_eq!(U256::from_be_bytes(&value.to_be_bytes()), value);
    }

    #[test]
    fn add_mod_wraps_around_modulus() {
        let modulus = U256::from_u64(7);
        let five = U256::from_u64(5);
        let four = U256::from_u64(4);
        assert_eq!(five.add_mod(four, modulus), U256::from_u64(2));
    }

    #[test]
    fn sub_mod_wraps_below_zero() {
        let modulus = U256::from_u64(7);
        let two = U256::from_u64(2);
        let five = U256::from_u64(5);
        assert_eq!(two.sub_mod(five, modulus), U256::from_u64(4));
    }

    #[test]
    fn mul_mod_matches_small_arithmetic() {
        let modulus = U256::from_u64(1_000_000_007);
        let a = U256::from_u64(123_456);
        let b = U256::from_u64(987_654);
        let expected = U256::from_u64((123_456u64 * 987_654u64) % 1_000_000_007);
        assert_eq!(a.mul_mod(b, modulus), expected);
    }

    #[test]
    fn mul_mod_handles_operands_near_the_modulus() {
        // p = 2^256 - 189, the curve's field modulus; its limbs are all
        // near u64::MAX, which is exactly the shape that overflows a
        // naive per-column u128 accumulator in mul_wide. (p - 4)^2 mod p
        // is just (-4)^2 mod p = 16.
        let modulus = U256([
            0xffff_ffff_ffff_ff43,
            0xffff_ffff_ffff_ffff,
            0xffff_ffff_ffff_ffff,
            0xffff_ffff_ffff_ffff,
        ]);
        let p_minus_4 = modulus.sub_mod(U256::from_u64(4), modulus);
        assert_eq!(p_minus_4.mul_mod(p_minus_4, modulus), U256::from_u64(16));
    }

    #[test]
    fn pow_mod_matches_small_arithmetic() {
        let modulus = U256::from_u64(1_000_000_007);
        let base = U256::from_u64(3);
        let exponent = U256::from_u64(20);
        let expected = U256::from_u64(3u64.pow(20) % 1_000_000_007);
        assert_eq!(base.pow_mod(exponent, modulus), expected);
    }

    #[test]
    fn inv_mod_is_multiplicative_inverse() {
        let modulus = U256::from_u64(1_000_000_007);
        let a = U256::from_u64(123_456);
        let inv = a.inv_mod(modulus);
        assert_eq!(a.mul_mod(inv, modulus), U256::ONE);
    }

    #[test]
    fn reduce_be_bytes_matches_mod_for_small_value() {
        let modulus = U256::from_u64(97);
        let bytes = 12345u64.to_be_bytes();
        let expected = U256::from_u64(12345 % 97);
        assert_eq!(U256::reduce_be_bytes(&bytes, modulus), expected);
    }
}
