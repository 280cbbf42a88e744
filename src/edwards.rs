//! The twisted Edwards curve NUMS-256: `x² + y² ≡ 1 + d·x²·y² (mod p)`,
//! `d = 15343`.
//!
//! [`Point`] is a free-standing value type (not nested inside some curve
//! handle) whose operations reference the curve constant `D` from this
//! module directly, matching how [`crate::scalar::Scalar`] stands apart
//! from [`crate::field::FieldElement`].

use crate::bigint::U256;
use crate::field::FieldElement;
use crate::scalar::{Scalar, ORDER};

/// The curve's non-square parameter. Its non-squareness is what makes the
/// unified addition law below complete (no case-split for the identity).
const D: u64 = 15343;

/// A point on the curve, always either the neutral element or a member of
/// the prime-order subgroup; public constructors enforce this, so a
/// `Point` value is always safe to add, negate, and multiply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    x: FieldElement,
    y: FieldElement,
}

impl Point {
    /// The neutral element `O = (0, 1)`.
    pub const IDENTITY: Point = Point { x: FieldElement::ZERO, y: FieldElement::ONE };

    fn d() -> FieldElement {
        FieldElement::from_u64(D)
    }

    /// `x² + y² ≡ 1 + d·x²·y² (mod p)`.
    pub fn is_on_curve(x: FieldElement, y: FieldElement) -> bool {
        let x2 = x.square();
        let y2 = y.square();
        let lhs = x2.add(y2);
        let rhs = FieldElement::ONE.add(Point::d().mul(x2).mul(y2));
        lhs == rhs
    }

    /// Builds a point from coordinates that are already known to lie on the
    /// curve and in the prime-order subgroup (used internally once a point
    /// has been validated by [`Point::decompress`] or derived from one).
    fn from_validated(x: FieldElement, y: FieldElement) -> Self {
        debug_assert!(Point::is_on_curve(x, y));
        Point { x, y }
    }

    pub fn x(&self) -> FieldElement {
        self.x
    }

    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// The generator: the point whose `y = -4 mod p`, with the even choice
    /// of `x`.
    pub fn generator() -> Self {
        let y = FieldElement::from_u64(4).neg();
        let one_minus_y2 = FieldElement::ONE.sub(y.square());
        let one_minus_dy2 = FieldElement::ONE.sub(Point::d().mul(y.square()));
        let x2 = one_minus_y2.mul(one_minus_dy2.inverse());
        let x = x2.sqrt_with_parity(false).expect("generator y must yield a square x^2");
        Point::from_validated(x, y)
    }

    /// Reconstructs a point from its `y` coordinate and the parity bit of
    /// `x`. Returns `None` if no square root exists, or if the candidate
    /// point fails the mandatory r-torsion check, which guards against
    /// small-subgroup attacks and is never skipped.
    pub fn decompress(y: FieldElement, x_is_odd: bool) -> Option<Self> {
        let one_minus_y2 = FieldElement::ONE.sub(y.square());
        let one_minus_dy2 = FieldElement::ONE.sub(Point::d().mul(y.square()));
        if one_minus_dy2.is_zero() {
            return None;
        }
        let x2 = one_minus_y2.mul(one_minus_dy2.inverse());
        let x = x2.sqrt_with_parity(x_is_odd)?;
        let candidate = Point::from_validated(x, y);
        if candidate.mul_by_u256(ORDER) == Point::IDENTITY {
            Some(candidate)
        } else {
            None
        }
    }

    /// Multiplies by a raw, unreduced [`U256`] exponent. Used only for the
    /// r-torsion check, which must multiply by the literal group order `r`
    /// rather than `r mod r` (which a [`Scalar`] would collapse to zero).
    fn mul_by_u256(self, exponent: U256) -> Point {
        let mut result = Point::IDENTITY;
        for bit_index in (0..256).rev() {
            result = result.add(result);
            if exponent.bit(bit_index) {
                result = result.add(self);
            }
        }
        result
    }

    /// Complete unified addition, valid for any two points including the
    /// identity (no case-split is needed because `d` is a non-square).
    pub fn add(self, other: Point) -> Point {
        let (x1, y1) = (self.x, self.y);
        let (x2, y2) = (other.x, other.y);
        let cross = Point::d().mul(x1).mul(x2).mul(y1).mul(y2);
        let x3_num = x1.mul(y2).add(y1.mul(x2));
        let x3_den = FieldElement::ONE.add(cross);
        let y3_num = y1.mul(y2).sub(x1.mul(x2));
        let y3_den = FieldElement::ONE.sub(cross);
        let x3 = x3_num.mul(x3_den.inverse());
        let y3 = y3_num.mul(y3_den.inverse());
        Point::from_validated(x3, y3)
    }

    pub fn negate(self) -> Point {
        Point { x: self.x.neg(), y: self.y }
    }

    /// Left-to-right double-and-add, iterating over all 256 bits of the
    /// reduced scalar regardless of its actual magnitude. A fixed
    /// iteration count, not a fully constant-time ladder.
    pub fn mul(self, scalar: Scalar) -> Point {
        let reduced = scalar.inner();
        let mut result = Point::IDENTITY;
        for bit_index in (0..256).rev() {
            result = result.add(result);
            if reduced.bit(bit_index) {
                result = result.add(self);
            }
        }
        result
    }
}
