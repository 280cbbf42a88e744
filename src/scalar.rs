//! Arithmetic modulo `r`, the prime order of the NUMS-256 curve's group.
//!
//! `Scalar` holds private-key and nonce material, so unlike
//! [`crate::field::FieldElement`] it zeroizes on drop.

use crate::bigint::U256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// `r = 2^254 - 87175310462106073678594642380840586067`, the prime order
/// of the curve's group.
pub const ORDER: U256 = U256([
    0xe5b8_4e6f_1122_b4ad,
    0xbe6a_a55a_d0a6_bc64,
    0xffff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffff,
]);

/// An element of `Z/rZ`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Scalar = Scalar(U256::ZERO);
    pub const ONE: Scalar = Scalar(U256::ONE);

    pub fn new(value: U256) -> Self {
        if value.less_than(ORDER) {
            Scalar(value)
        } else {
            Scalar(value.sub_mod(ORDER, ORDER))
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Scalar::new(U256::from_u64(value))
    }

    /// Reduces an arbitrary-length big-endian byte string mod `r`. Used to
    /// turn a wide SHAKE128 output into a private scalar (spec.md §4.6) and
    /// a SHA3-256 challenge digest into a Schnorr challenge (spec.md §4.8).
    pub fn from_wide_be_bytes(bytes: &[u8]) -> Self {
        Scalar(U256::reduce_be_bytes(bytes, ORDER))
    }

    pub fn from_canonical_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let value = U256::from_be_bytes(bytes);
        if value.less_than(ORDER) {
            Some(Scalar(value))
        } else {
            None
        }
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn inner(self) -> U256 {
        self.0
    }

    pub fn add(self, other: Scalar) -> Self {
        Scalar(self.0.add_mod(other.0, ORDER))
    }

    pub fn sub(self, other: Scalar) -> Self {
        Scalar(self.0.sub_mod(other.0, ORDER))
    }

    pub fn mul(self, other: Scalar) -> Self {
        Scalar(self.0.mul_mod(other.0, ORDER))
    }

    pub fn neg(self) -> Self {
        Scalar::ZERO.sub(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_values_at_or_above_order() {
        assert_eq!(Scalar::new(ORDER), Scalar::ZERO);
    }

    #[test]
    fn add_sub_are_inverses() {
        let a = Scalar::from_u64(123_456);
        let b = Scalar::from_u64(654_321);
        assert_eq!(a.add(b).sub(b), a);
    }

    #[test]
    fn mul_distributes_over_add() {
        let a = Scalar::from_u64(7);
        let b = Scalar::from_u64(11);
        let c = Scalar::from_u64(13);
        assert_eq!(a.mul(b.add(c)), a.mul(b).add(a.mul(c)));
    }

    #[test]
    fn wide_reduction_matches_canonical_small_value() {
        let mut bytes = [0u8; 64];
        bytes[63] = 42;
        assert_eq!(Scalar::from_wide_be_bytes(&bytes), Scalar::from_u64(42));
    }
}
