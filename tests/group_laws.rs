//! Randomized checks of the Edwards group laws from random scalars, as
//! opposed to the fixed small values exercised by the unit tests inside
//! `src/edwards.rs`.

use nums256::edwards::Point;
use nums256::scalar::Scalar;
use proptest::prelude::*;

fn arbitrary_scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_map(|bytes| Scalar::from_wide_be_bytes(&bytes))
}

proptest! {
    #[test]
    fn scalar_mul_distributes_over_addition(k in arbitrary_scalar(), l in arbitrary_scalar()) {
        let g = Point::generator();
        prop_assert_eq!(g.mul(k.add(l)), g.mul(k).add(g.mul(l)));
    }

    #[test]
    fn scalar_mul_is_commutative_under_composition(k in arbitrary_scalar(), l in arbitrary_scalar()) {
        let g = Point::generator();
        prop_assert_eq!(g.mul(k).mul(l), g.mul(l).mul(k));
        prop_assert_eq!(g.mul(k).mul(l), g.mul(k.mul(l)));
    }

    #[test]
    fn addition_is_associative_for_random_multiples(
        k in arbitrary_scalar(),
        l in arbitrary_scalar(),
        m in arbitrary_scalar(),
    ) {
        let g = Point::generator();
        let (a, b, c) = (g.mul(k), g.mul(l), g.mul(m));
        prop_assert_eq!(a.add(b).add(c), a.add(b.add(c)));
    }

    #[test]
    fn negation_is_the_additive_inverse(k in arbitrary_scalar()) {
        let g = Point::generator();
        let p = g.mul(k);
        prop_assert_eq!(p.add(p.negate()), Point::IDENTITY);
    }

    #[test]
    fn decompression_round_trips_every_generated_point(k in arbitrary_scalar()) {
        let g = Point::generator();
        let p = g.mul(k);
        let decoded = Point::decompress(p.y(), p.x().is_odd());
        prop_assert_eq!(decoded, Some(p));
    }
}
