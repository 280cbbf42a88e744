//! Schnorr-style signatures over NUMS-256, with the challenge derived from
//! `SHA3-256(U.y ∥ M)`.

use rand_core::{CryptoRng, RngCore};

use crate::edwards::Point;
use crate::error::Error;
use crate::keys::private_scalar;
use crate::scalar::Scalar;
use crate::sponge::{Sponge, Variant};

/// `(h, z)`, both reduced mod `r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub h: Scalar,
    pub z: Scalar,
}

fn challenge(u_y: [u8; 32], message: &[u8]) -> Scalar {
    let mut sponge = Sponge::new(Variant::Sha3_256);
    sponge.absorb(&u_y);
    sponge.absorb(message);
    let digest = sponge.digest();
    Scalar::from_wide_be_bytes(digest.as_ref())
}

/// `sign(passphrase, message, rng)`: samples an ephemeral nonce `k`,
/// commits to `U = k*G`, and responds with `z = k - h*s mod r`.
pub fn sign<R: RngCore + CryptoRng>(passphrase: &[u8], message: &[u8], rng: &mut R) -> Signature {
    let s = private_scalar(passphrase);
    let mut k_bytes = [0u8; 64];
    rng.fill_bytes(&mut k_bytes);
    let k = Scalar::from_wide_be_bytes(&k_bytes);

    let u = Point::generator().mul(k);
    let h = challenge(u.y().to_be_bytes(), message);
    let z = k.sub(h.mul(s));

    Signature { h, z }
}

/// `verify(message, signature, public_key)`: recomputes `U' = z*G + h*V`
/// and accepts iff its challenge matches the stored `h`.
pub fn verify(message: &[u8], signature: Signature, public_key: Point) -> Result<(), Error> {
    let u_prime = Point::generator().mul(signature.z).add(public_key.mul(signature.h));
    let h_prime = challenge(u_prime.y().to_be_bytes(), message);
    if h_prime == signature.h {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keygen;
    use rand::rngs::OsRng;

    #[test]
    fn round_trips() {
        let mut rng = OsRng;
        let pair = keygen(b"correct horse battery staple");
        let sig = sign(b"correct horse battery staple", b"attack at dawn", &mut rng);
        assert!(verify(b"attack at dawn", sig, pair.public).is_ok());
    }

    #[test]
    fn flipping_a_message_byte_rejects() {
        let mut rng = OsRng;
        let pair = keygen(b"correct horse battery staple");
        let sig = sign(b"correct horse battery staple", b"attack at dawn", &mut rng);
        let result = verify(b"attack at noon", sig, pair.public);
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn flipping_the_response_rejects() {
        let mut rng = OsRng;
        let pair = keygen(b"correct horse battery staple");
        let mut sig = sign(b"correct horse battery staple", b"attack at dawn", &mut rng);
        sig.z = sig.z.add(Scalar::from_u64(1));
        let result = verify(b"attack at dawn", sig, pair.public);
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }
}
