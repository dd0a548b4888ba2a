//! # Cryptography
//!
//! Textbook RSA with small keys, for demonstration only: primes of at most
//! 31 bits and one cipher value per plaintext byte. A run either generates a
//! seeded key pair and round-trips a message, or encrypts or decrypts under a
//! key the caller supplies.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use crate::error::ComputeFault;
use crate::registry::{unexpected_input, AlgorithmUnit, Category};
use crate::utils::OpCounter;
use crate::value::{Input, Output, RsaAction, RsaTranscript};

/// Generate keys from `seed`, encrypt `message` and decrypt it again.
pub fn round_trip(
    message: &str,
    bits: u32,
    seed: u64,
    ops: &mut OpCounter,
) -> Result<RsaTranscript, ComputeFault> {
    let mut rng = StdRng::seed_from_u64(seed);
    let keys = generate_keys(bits, &mut rng, ops)?;
    let cipher = encrypt(message, keys.public, ops)?;
    let decrypted = decrypt(&cipher, keys.private, ops)?;

    Ok(RsaTranscript {
        public_key: keys.public,
        private_key: keys.private,
        cipher,
        decrypted,
    })
}

pub struct Rsa;

impl AlgorithmUnit for Rsa {
    fn id(&self) -> &'static str {
        "rsa"
    }

    fn name(&self) -> &'static str {
        "RSA"
    }

    fn description(&self) -> &'static str {
        "Toy RSA: seeded key generation with a round trip, or encryption and decryption under given keys"
    }

    fn category(&self) -> Category {
        Category::Cryptography
    }

    fn worst_case_ops(&self, input: &Input) -> u64 {
        // one modpow step per exponent bit and value
        let per_value = 64 * input.size() as u64 + 1;
        match input {
            Input::Rsa(RsaAction::RoundTrip { bits, .. }) => {
                let bits = *bits as u64;
                // prime search: ~bits candidates per prime, each a handful of modpows
                2 * 64 * bits * (3 * bits + 10) + 2 * per_value
            }
            _ => per_value,
        }
    }

    fn compute(&self, input: &Input, ops: &mut OpCounter) -> Result<Output, ComputeFault> {
        match input {
            Input::Rsa(RsaAction::RoundTrip {
                message,
                bits,
                seed,
            }) => round_trip(message, *bits, *seed, ops).map(Output::Rsa),
            Input::Rsa(RsaAction::Encrypt {
                message,
                public_key,
            }) => encrypt(message, *public_key, ops).map(Output::Cipher),
            Input::Rsa(RsaAction::Decrypt {
                cipher,
                private_key,
            }) => decrypt(cipher, *private_key, ops).map(Output::Plaintext),
            other => Err(unexpected_input(self.id(), other)),
        }
    }

    fn sample_input(&self) -> Value {
        json!({ "message": "Hello, RSA!", "bits": 16, "seed": 7 })
    }

    fn generate_input(&self, size: usize, rng: &mut StdRng) -> Option<Value> {
        let message: String = (0..size)
            .map(|_| char::from(rng.random_range(b' '..=b'~')))
            .collect();
        Some(json!({ "message": message, "bits": 16, "seed": rng.random::<u32>() }))
    }
}
