//! Arithmetic in `F_p`, the base field of the NUMS-256 curve, where
//! `p = 2^256 - 189`.

use crate::bigint::U256;
use zeroize::Zeroize;

/// `p = 2^256 - 189`.
pub const MODULUS: U256 = U256([
    0xffff_ffff_ffff_ff43,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
]);

/// An element of `F_p`, always kept in `[0, p)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct FieldElement(U256);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement(U256::ZERO);
    pub const ONE: FieldElement = FieldElement(U256::ONE);

    /// Builds a field element by reducing `value` mod `p`.
    pub fn new(value: U256) -> Self {
        if value.less_than(MODULUS) {
            FieldElement(value)
        } else {
            FieldElement(value.sub_mod(MODULUS, MODULUS))
        }
    }

    pub fn from_u64(value: u64) -> Self {
        FieldElement::new(U256::from_u64(value))
    }

    /// Decodes a big-endian 32-byte encoding. Returns `None` if the
    /// encoding is not the canonical representative (i.e. >= p), per the
    /// "reject non-canonical encodings" discipline used throughout §6.
    pub fn from_canonical_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let value = U256::from_be_bytes(bytes);
        if value.less_than(MODULUS) {
            Some(FieldElement(value))
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

    pub fn is_odd(self) -> bool {
        self.0.is_odd()
    }

    pub fn add(self, other: FieldElement) -> Self {
        FieldElement(self.0.add_mod(other.0, MODULUS))
    }

    pub fn sub(self, other: FieldElement) -> Self {
        FieldElement(self.0.sub_mod(other.0, MODULUS))
    }

    pub fn mul(self, other: FieldElement) -> Self {
        FieldElement(self.0.mul_mod(other.0, MODULUS))
    }

    pub fn neg(self) -> Self {
        FieldElement::ZERO.sub(self)
    }

    pub fn square(self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse via Fermat's little theorem. The caller must
    /// not invoke this on zero; per spec, field inversion of zero is a
    /// contract violation.
    pub fn inverse(self) -> Self {
        debug_assert!(!self.is_zero(), "inverse of zero is a contract violation");
        FieldElement(self.0.inv_mod(MODULUS))
    }

    /// `self^exponent mod p`, exponent given as a `U256`.
    pub fn pow(self, exponent: U256) -> Self {
        FieldElement(self.0.pow_mod(exponent, MODULUS))
    }

    /// Square root in `F_p`, using the `p ≡ 3 (mod 4)` shortcut
    /// `sqrt(a) = a^((p+1)/4)`. Returns `None` if `self` is not a quadratic
    /// residue.
    pub fn sqrt(self) -> Option<Self> {
        // (p + 1) / 4 = 2^254 - 47, precomputed since it's a fixed constant
        // of this curve's field.
        const EXPONENT: U256 = U256([
            0xffff_ffff_ffff_ffd1,
            0xffff_ffff_ffff_ffff,
            0xffff_ffff_ffff_ffff,
            0x3fff_ffff_ffff_ffff,
        ]);
        let candidate = self.pow(EXPONENT);
        if candidate.square() == self {
            Some(candidate)
        } else {
            None
        }
    }

    /// Like [`sqrt`](Self::sqrt), but returns the root whose parity matches
    /// `want_odd`. Used by point decompression, which reconstructs `x`
    /// from `y` and a stored parity bit.
    pub fn sqrt_with_parity(self, want_odd: bool) -> Option<Self> {
        self.sqrt().map(|root| if root.is_odd() == want_odd { root } else { root.neg() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_values_at_or_above_modulus() {
        let at_modulus = FieldElement::new(MODULUS);
        assert_eq!(at_modulus, FieldElement::ZERO);
    }

    #[test]
    fn add_sub_are_inverses() {
        let a = FieldElement::from_u64(123_456_789);
        let b = FieldElement::from_u64(987_654_321);
        assert_eq!(a.add(b).sub(b), a);
    }

    #[test]
    fn mul_inverse_round_trips_to_one() {
        let a = FieldElement::from_u64(42);
        assert_eq!(a.mul(a.inverse()), FieldElement::ONE);
    }

    #[test]
    fn sqrt_of_square_round_trips() {
        let a = FieldElement::from_u64(12345);
        let squared = a.square();
        let root = squared.sqrt().expect("square must have a root");
        assert_eq!(root.square(), squared);
    }

    #[test]
    fn sqrt_with_parity_picks_requested_parity() {
        let a = FieldElement::from_u64(12345);
        let squared = a.square();
        let odd_root = squared.sqrt_with_parity(true).unwrap();
        let even_root = squared.sqrt_with_parity(false).unwrap();
        assert!(odd_root.is_odd());
        assert!(!even_root.is_odd());
    }

    #[test]
    fn canonical_decoding_rejects_values_at_or_above_modulus() {
        assert!(FieldElement::from_canonical_be_bytes(&MODULUS.to_be_bytes()).is_none());
    }
}
