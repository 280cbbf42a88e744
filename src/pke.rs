//! ECIES-style hybrid encryption against a NUMS-256 public key.

use rand_core::{CryptoRng, RngCore};

use crate::edwards::Point;
use crate::error::Error;
use crate::keys::private_scalar;
use crate::scalar::Scalar;
use crate::sponge::{Sponge, Variant};

const TAG_LEN: usize = 32;

/// `(Z.x, Z.y, c, t)`, the four fields persisted by the ciphertext file
/// format. `z_x`/`z_y` are stored canonically (the x-parity bit is
/// recovered from `z_x`'s own parity on decode, matching the public key's
/// two-big-endian-coordinate encoding).
pub struct Ciphertext {
    pub z_x: [u8; 32],
    pub z_y: [u8; 32],
    pub c: Vec<u8>,
    pub t: [u8; TAG_LEN],
}

/// Derives the pair of symmetric keys `(ka, ke)` from a shared point's `y`
/// coordinate, shared by both encrypt and decrypt.
fn derive_keys(shared_y: [u8; 32]) -> ([u8; 32], [u8; 32]) {
    let mut sponge = Sponge::new(Variant::Shake256);
    sponge.absorb(&shared_y);
    let mut ka = [0u8; 32];
    let mut ke = [0u8; 32];
    sponge.squeeze(&mut ka);
    sponge.squeeze(&mut ke);
    (ka, ke)
}

fn keystream(ke: &[u8; 32], len: usize) -> Vec<u8> {
    let mut sponge = Sponge::new(Variant::Shake128);
    sponge.absorb(ke);
    let mut stream = vec![0u8; len];
    sponge.squeeze(&mut stream);
    stream
}

fn mac(ka: &[u8; 32], c: &[u8]) -> [u8; TAG_LEN] {
    let mut sponge = Sponge::new(Variant::Sha3_256);
    sponge.absorb(ka);
    sponge.absorb(c);
    let digest = sponge.digest();
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(digest.as_ref());
    tag
}

/// `encrypt(plaintext, public_key, rng)`: samples an ephemeral scalar `k`,
/// computes the shared point `W = k*V` and the ephemeral public point
/// `Z = k*G`, derives symmetric key material from `W.y`, and masks and
/// authenticates the plaintext.
pub fn encrypt<R: RngCore + CryptoRng>(
    plaintext: &[u8],
    public_key: Point,
    rng: &mut R,
) -> Ciphertext {
    let mut k_bytes = [0u8; 64];
    rng.fill_bytes(&mut k_bytes);
    let k = Scalar::from_wide_be_bytes(&k_bytes);

    let w = public_key.mul(k);
    let z = Point::generator().mul(k);

    let (ka, ke) = derive_keys(w.y().to_be_bytes());
    let stream = keystream(&ke, plaintext.len());
    let c: Vec<u8> = plaintext.iter().zip(stream.iter()).map(|(p, s)| p ^ s).collect();
    let t = mac(&ka, &c);

    Ciphertext { z_x: z.x().to_be_bytes(), z_y: z.y().to_be_bytes(), c, t }
}

/// `decrypt(ciphertext, passphrase)`: reconstructs `Z`, rejects it unless
/// it decompresses and passes the r-torsion check, verifies the tag before
/// unmasking anything, and returns the plaintext only on success.
pub fn decrypt(ciphertext: &Ciphertext, passphrase: &[u8]) -> Result<Vec<u8>, Error> {
    let s = private_scalar(passphrase);

    let z_y = crate::field::FieldElement::from_canonical_be_bytes(&ciphertext.z_y)
        .ok_or(Error::InvalidPoint)?;
    let z_x_is_odd = ciphertext.z_x[31] & 1 == 1;
    let z = Point::decompress(z_y, z_x_is_odd).ok_or(Error::InvalidPoint)?;

    let w = z.mul(s);
    let (ka, ke) = derive_keys(w.y().to_be_bytes());

    let expected_tag = mac(&ka, &ciphertext.c);
    if !constant_time_eq::constant_time_eq(&expected_tag, &ciphertext.t) {
        return Err(Error::InvalidTag);
    }

    let stream = keystream(&ke, ciphertext.c.len());
    Ok(ciphertext.c.iter().zip(stream.iter()).map(|(c, s)| c ^ s).collect())
}
