//! The internal symmetric authenticated-encryption mode: a passphrase
//! masks a payload with a SHAKE128 keystream and authenticates it with a
//! SHA3-256 MAC over a fresh nonce.

use rand_core::{CryptoRng, RngCore};

use crate::sponge::{Sponge, Variant};

const NONCE_LEN: usize = 16;
const TAG_LEN: usize = 32;

/// `encrypt(passphrase, plaintext, rng) -> masked-payload ∥ nonce ∥ tag`.
///
/// The nonce is drawn fresh from `rng` on every call, so encrypting the
/// same plaintext under the same passphrase twice yields unlinkable
/// ciphertexts.
pub fn encrypt<R: RngCore + CryptoRng>(passphrase: &[u8], plaintext: &[u8], rng: &mut R) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);
    let masked = mask(passphrase, &nonce, plaintext);
    let tag = mac(passphrase, &nonce, &masked);

    let mut out = Vec::with_capacity(masked.len() + NONCE_LEN + TAG_LEN);
    out.extend_from_slice(&masked);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&tag);
    out
}

/// `decrypt(passphrase, record) -> plaintext`, verifying the tag before
/// returning anything. On mismatch, no masked bytes are unmasked or
/// returned.
pub fn decrypt(passphrase: &[u8], record: &[u8]) -> Option<Vec<u8>> {
    if record.len() < NONCE_LEN + TAG_LEN {
        return None;
    }
    let masked_len = record.len() - NONCE_LEN - TAG_LEN;
    let masked = &record[..masked_len];
    let nonce = &record[masked_len..masked_len + NONCE_LEN];
    let tag = &record[masked_len + NONCE_LEN..];

    let expected_tag = mac(passphrase, nonce, masked);
    if !constant_time_eq::constant_time_eq(&expected_tag, tag) {
        return None;
    }
    Some(mask(passphrase, nonce, masked))
}

/// SHAKE128(passphrase) is absorbed once to derive a per-passphrase key
/// byte, then used as a keystream seed together with the nonce so the
/// same passphrase never reuses a keystream across encryptions.
fn mask(passphrase: &[u8], nonce: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut key_sponge = Sponge::new(Variant::Shake128);
    key_sponge.absorb(passphrase);
    let mut passphrase_key = [0u8; 16];
    key_sponge.squeeze(&mut passphrase_key);

    let mut stream_sponge = Sponge::new(Variant::Shake128);
    stream_sponge.absorb(&passphrase_key);
    stream_sponge.absorb(nonce);
    let mut stream = vec![0u8; payload.len()];
    stream_sponge.squeeze(&mut stream);

    payload.iter().zip(stream.iter()).map(|(p, s)| p ^ s).collect()
}

/// `SHA3-256(nonce ∥ SHAKE128(passphrase, 128) ∥ masked-payload)`.
fn mac(passphrase: &[u8], nonce: &[u8], masked: &[u8]) -> [u8; TAG_LEN] {
    let mut key_sponge = Sponge::new(Variant::Shake128);
    key_sponge.absorb(passphrase);
    let mut passphrase_key = [0u8; 16];
    key_sponge.squeeze(&mut passphrase_key);

    let mut tag_sponge = Sponge::new(Variant::Sha3_256);
    tag_sponge.absorb(nonce);
    tag_sponge.absorb(&passphrase_key);
    tag_sponge.absorb(masked);
    let digest = tag_sponge.digest();
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(digest.as_ref());
    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn round_trips() {
        let mut rng = OsRng;
        let record = encrypt(b"hunter2", b"the eagle flies at midnight", &mut rng);
        let plaintext = decrypt(b"hunter2", &record).expect("tag must verify");
        assert_eq!(plaintext, b"the eagle flies at midnight");
    }

    #[test]
    fn wrong_passphrase_fails_tag_check() {
        let mut rng = OsRng;
        let record = encrypt(b"hunter2", b"secret plans", &mut rng);
        assert!(decrypt(b"wrong passphrase", &record).is_none());
    }

    #[test]
    fn tampering_with_masked_payload_fails_tag_check() {
        let mut rng = OsRng;
        let mut record = encrypt(b"hunter2", b"secret plans", &mut rng);
        record[0] ^= 0x01;
        assert!(decrypt(b"hunter2", &record).is_none());
    }

    #[test]
    fn two_encryptions_of_same_plaintext_are_unlinkable() {
        let mut rng = OsRng;
        let a = encrypt(b"hunter2", b"same message", &mut rng);
        let b = encrypt(b"hunter2", b"same message", &mut rng);
        assert_ne!(a, b);
    }
}
