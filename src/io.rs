//! File formats: hex-encoded public keys, ciphertexts, and signatures.
//!
//! Every format here is a fixed number of ASCII-hex lines, per the CLI's
//! external-interface contract; a wrong line count or malformed hex is
//! always [`Error::InvalidEncoding`], never a panic, since these bytes
//! come from outside the program.

use std::fs;
use std::path::Path;

use crate::edwards::Point;
use crate::error::Error;
use crate::field::FieldElement;
use crate::pke::Ciphertext;
use crate::signature::Signature;

fn read_to_string(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn write_string(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    fs::write(path, bytes).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn decode_hex_line(line: &str) -> Result<Vec<u8>, Error> {
    hex::decode(line.trim()).map_err(|e| Error::InvalidEncoding(format!("malformed hex: {e}")))
}

fn decode_32_bytes(line: &str) -> Result<[u8; 32], Error> {
    let bytes = decode_hex_line(line)?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| Error::InvalidEncoding(format!("expected 32 bytes, got {}", v.len())))
}

/// Two 32-byte big-endian coordinates (x then y), one ASCII-hex line each.
pub fn write_public_key(path: &Path, public_key: Point) -> Result<(), Error> {
    let contents = format!(
        "{}\n{}\n",
        hex::encode(public_key.x().to_be_bytes()),
        hex::encode(public_key.y().to_be_bytes())
    );
    write_string(path, &contents)
}

pub fn read_public_key(path: &Path) -> Result<Point, Error> {
    let contents = read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != 2 {
        return Err(Error::InvalidEncoding(format!(
            "public key file must have 2 lines, got {}",
            lines.len()
        )));
    }
    let x_bytes = decode_32_bytes(lines[0])?;
    let y_bytes = decode_32_bytes(lines[1])?;
    let x = FieldElement::from_canonical_be_bytes(&x_bytes)
        .ok_or_else(|| Error::InvalidEncoding("x coordinate not canonical".into()))?;
    let y = FieldElement::from_canonical_be_bytes(&y_bytes)
        .ok_or_else(|| Error::InvalidEncoding("y coordinate not canonical".into()))?;
    if !Point::is_on_curve(x, y) {
        return Err(Error::InvalidPoint);
    }
    Point::decompress(y, x.is_odd()).ok_or(Error::InvalidPoint)
}

/// Four ASCII-hex lines: `Z.x`, `Z.y`, `c`, `t`.
pub fn write_ciphertext(path: &Path, ciphertext: &Ciphertext) -> Result<(), Error> {
    let contents = format!(
        "{}\n{}\n{}\n{}\n",
        hex::encode(ciphertext.z_x),
        hex::encode(ciphertext.z_y),
        hex::encode(&ciphertext.c),
        hex::encode(ciphertext.t)
    );
    write_string(path, &contents)
}

pub fn read_ciphertext(path: &Path) -> Result<Ciphertext, Error> {
    let contents = read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != 4 {
        return Err(Error::InvalidEncoding(format!(
            "ciphertext file must have 4 lines, got {}",
            lines.len()
        )));
    }
    let z_x = decode_32_bytes(lines[0])?;
    let z_y = decode_32_bytes(lines[1])?;
    let c = decode_hex_line(lines[2])?;
    let t = decode_32_bytes(lines[3])?;
    Ok(Ciphertext { z_x, z_y, c, t })
}

/// Two ASCII-hex lines: `h`, `z`.
pub fn write_signature(path: &Path, signature: Signature) -> Result<(), Error> {
    let contents =
        format!("{}\n{}\n", hex::encode(signature.h.to_be_bytes()), hex::encode(signature.z.to_be_bytes()));
    write_string(path, &contents)
}

pub fn read_signature(path: &Path) -> Result<Signature, Error> {
    let contents = read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != 2 {
        return Err(Error::InvalidEncoding(format!(
            "signature file must have 2 lines, got {}",
            lines.len()
        )));
    }
    let h_bytes = decode_32_bytes(lines[0])?;
    let z_bytes = decode_32_bytes(lines[1])?;
    let h = crate::scalar::Scalar::from_canonical_be_bytes(&h_bytes)
        .ok_or_else(|| Error::InvalidEncoding("h not canonical".into()))?;
    let z = crate::scalar::Scalar::from_canonical_be_bytes(&z_bytes)
        .ok_or_else(|| Error::InvalidEncoding("z not canonical".into()))?;
    Ok(Signature { h, z })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keygen;

    #[test]
    fn public_key_round_trips_through_a_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("nums256_test_public_key.hex");
        let pair = keygen(b"correct horse battery staple");
        write_public_key(&path, pair.public).unwrap();
        let read_back = read_public_key(&path).unwrap();
        assert_eq!(read_back, pair.public);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_hex_is_invalid_encoding() {
        let dir = std::env::temp_dir();
        let path = dir.join("nums256_test_bad_hex.hex");
        write_string(&path, "not-hex\nnot-hex\n").unwrap();
        let result = read_public_key(&path);
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn wrong_line_count_is_invalid_encoding() {
        let dir = std::env::temp_dir();
        let path = dir.join("nums256_test_wrong_lines.hex");
        write_string(&path, "aa\n").unwrap();
        let result = read_public_key(&path);
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
        let _ = fs::remove_file(&path);
    }
}
