use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::OsRng;

use nums256::cli::{Cli, Command};
use nums256::error::Error;
use nums256::io;
use nums256::keys::keygen;
use nums256::pke;
use nums256::sha3::sha3;
use nums256::signature;
use nums256::sponge::{Sponge, Variant};
use nums256::symmetric;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Hash { suffix, path } => {
            let suffix: usize = suffix.parse().context("suffix must be an integer")?;
            let bytes = io::read_file(&path)?;
            info!("hashing {} bytes from {}", bytes.len(), path.display());
            let digest = sha3(suffix, &bytes);
            println!("{}", hex::encode(&digest[..suffix / 8]));
        }
        Command::Mac { suffix, passphrase, path, out_bits } => {
            let suffix: usize = suffix.parse().context("suffix must be an integer")?;
            if out_bits % 8 != 0 {
                return Err(Error::ContractViolation("out-bits must be a multiple of 8".into()).into());
            }
            let bytes = io::read_file(&path)?;
            let variant = Variant::from_shake_suffix(suffix);
            let mut sponge = Sponge::new(variant);
            sponge.absorb(passphrase.as_bytes());
            sponge.absorb(&bytes);
            let mut out = vec![0u8; out_bits / 8];
            sponge.squeeze(&mut out);
            println!("{}", hex::encode(out));
        }
        Command::Encrypt { passphrase, in_path, out_path } => {
            let mut rng = OsRng;
            let plaintext = io::read_file(&in_path)?;
            let record = symmetric::encrypt(passphrase.as_bytes(), &plaintext, &mut rng);
            io::write_file(&out_path, &record)?;
            info!("wrote {} bytes to {}", record.len(), out_path.display());
        }
        Command::Decrypt { passphrase, in_path, out_path } => {
            let record = io::read_file(&in_path)?;
            let plaintext = symmetric::decrypt(passphrase.as_bytes(), &record)
                .ok_or(Error::InvalidTag)?;
            io::write_file(&out_path, &plaintext)?;
        }
        Command::Keygen { passphrase, out_path } => {
            let pair = keygen(passphrase.as_bytes());
            io::write_public_key(&out_path, pair.public)?;
            info!("wrote public key to {}", out_path.display());
        }
        Command::EncryptPk { pk_path, msg_path, out_path } => {
            let mut rng = OsRng;
            let public_key = io::read_public_key(&pk_path)?;
            let plaintext = io::read_file(&msg_path)?;
            let ciphertext = pke::encrypt(&plaintext, public_key, &mut rng);
            io::write_ciphertext(&out_path, &ciphertext)?;
        }
        Command::DecryptPk { passphrase, in_path, out_path } => {
            let ciphertext = io::read_ciphertext(&in_path)?;
            let plaintext = pke::decrypt(&ciphertext, passphrase.as_bytes())?;
            io::write_file(&out_path, &plaintext)?;
        }
        Command::Sign { passphrase, msg_path, out_path } => {
            let mut rng = OsRng;
            let message = io::read_file(&msg_path)?;
            let sig = signature::sign(passphrase.as_bytes(), &message, &mut rng);
            io::write_signature(&out_path, sig)?;
        }
        Command::Verify { msg_path, sig_path, pk_path } => {
            let message = io::read_file(&msg_path)?;
            let sig = io::read_signature(&sig_path)?;
            let public_key = io::read_public_key(&pk_path)?;
            match signature::verify(&message, sig, public_key) {
                Ok(()) => println!("valid"),
                Err(_) => {
                    println!("invalid");
                    return Err(Error::InvalidSignature.into());
                }
            }
        }
    }
    Ok(())
}
