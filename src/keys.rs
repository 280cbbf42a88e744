//! Passphrase-derived private scalars and their canonicalized public points.

use crate::edwards::Point;
use crate::scalar::Scalar;
use crate::sponge::{Sponge, Variant};

/// Number of bytes squeezed out of SHAKE-128 when deriving a private
/// scalar: `2 * ceil(bits(r) / 8)`, matching the "squeeze twice the group
/// order's byte length" rule, leaving enough entropy that the mod-`r` reduction
/// has negligible bias.
const PRIVATE_SCALAR_SQUEEZE_BYTES: usize = 2 * 32;

/// `private_scalar(passphrase)`: derives the private scalar deterministically
/// from a passphrase. The same passphrase always yields the same scalar, so
/// the private key itself is never persisted; only the passphrase is.
pub fn private_scalar(passphrase: &[u8]) -> Scalar {
    let mut sponge = Sponge::new(Variant::Shake128);
    sponge.absorb(passphrase);
    let mut wide = [0u8; PRIVATE_SCALAR_SQUEEZE_BYTES];
    sponge.squeeze(&mut wide);
    Scalar::from_wide_be_bytes(&wide)
}

/// A derived keypair: the private scalar and its canonicalized public point.
pub struct KeyPair {
    pub private: Scalar,
    pub public: Point,
}

/// `keygen(passphrase)`: derives `s` and `V = s*G`, then canonicalizes so
/// the public key's x-parity bit is always 0, negating both `s` and `V`
/// when it isn't. Without this step, a legitimately generated keypair
/// would fail to verify its own decrypt/sign on half of all passphrases,
/// since the public-key file format omits the parity bit.
pub fn keygen(passphrase: &[u8]) -> KeyPair {
    let mut s = private_scalar(passphrase);
    let mut v = Point::generator().mul(s);
    if v.x().is_odd() {
        s = s.neg();
        v = v.negate();
    }
    KeyPair { private: s, public: v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_scalar_is_deterministic() {
        assert_eq!(private_scalar(b"hunter2"), private_scalar(b"hunter2"));
    }

    #[test]
    fn different_passphrases_yield_different_scalars() {
        assert_ne!(private_scalar(b"hunter2"), private_scalar(b"correct horse battery staple"));
    }

    #[test]
    fn keygen_public_key_always_has_even_x() {
        for passphrase in ["a", "bb", "ccc", "dddd", "eeeee"] {
            let pair = keygen(passphrase.as_bytes());
            assert!(!pair.public.x().is_odd(), "failed for {passphrase}");
            assert_eq!(Point::generator().mul(pair.private), pair.public);
        }
    }
}
