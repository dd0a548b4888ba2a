//! Toy RSA over single bytes.

use rand::rngs::StdRng;

use super::primes::{gcd, mod_inverse, mod_pow, random_prime};
use crate::error::ComputeFault;
use crate::utils::OpCounter;
use crate::validator::RSA_BITS;

pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// `(exponent, modulus)`
pub type Key = (u64, u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub public: Key,
    pub private: Key,
}

/// Generate a key pair from two distinct `bits`-bit primes.
///
/// The public exponent is 65537 unless it shares a factor with `phi`, in which
/// case the smallest odd exponent from 3 upwards that is coprime is used.
pub fn generate_keys(bits: u32, rng: &mut StdRng, ops: &mut OpCounter) -> Result<KeyPair, ComputeFault> {
    if !RSA_BITS.contains(&bits) {
        return Err(ComputeFault::invariant(format!("{}-bit primes are unsupported", bits)));
    }

    let p = random_prime(bits, rng, ops)?;
    let mut q = random_prime(bits, rng, ops)?;
    while q == p {
        q = random_prime(bits, rng, ops)?;
    }

    let n = p * q;
    let phi = (p - 1) * (q - 1);

    let mut e = DEFAULT_PUBLIC_EXPONENT;
    if gcd(e, phi) != 1 {
        e = 3;
        while gcd(e, phi) != 1 {
            ops.tick()?;
            e += 2;
        }
    }

    let d = mod_inverse(e, phi)
        .ok_or_else(|| ComputeFault::invariant(format!("{} has no inverse modulo {}", e, phi)))?;

    Ok(KeyPair {
        public: (e, n),
        private: (d, n),
    })
}

/// Encrypt each UTF-8 byte of `message` separately.
pub fn encrypt(message: &str, key: Key, ops: &mut OpCounter) -> Result<Vec<u64>, ComputeFault> {
    let (e, n) = key;
    if n <= u8::MAX as u64 {
        return Err(ComputeFault::invariant(format!("modulus {} cannot hold a byte", n)));
    }
    message
        .bytes()
        .map(|byte| mod_pow(byte as u64, e, n, ops))
        .collect()
}

/// Decrypt byte-wise cipher values back into text.
pub fn decrypt(cipher: &[u64], key: Key, ops: &mut OpCounter) -> Result<String, ComputeFault> {
    let (d, n) = key;
    let mut bytes = Vec::with_capacity(cipher.len());
    for &c in cipher {
        let plain = mod_pow(c, d, n, ops)?;
        let byte = u8::try_from(plain)
            .map_err(|_| ComputeFault::invariant(format!("{} decrypts to non-byte {}", c, plain)))?;
        bytes.push(byte);
    }
    String::from_utf8(bytes).map_err(|e| ComputeFault::invariant(format!("decrypted bytes: {}", e)))
}
