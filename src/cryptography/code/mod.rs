//! Cryptography implementations.

mod primes;
mod rsa;

pub use primes::{gcd, is_probable_prime, mod_inverse, mod_pow, random_prime};
pub use rsa::{decrypt, encrypt, generate_keys, Key, KeyPair, DEFAULT_PUBLIC_EXPONENT};
