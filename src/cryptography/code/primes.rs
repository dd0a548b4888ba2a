//! Modular arithmetic and probable-prime generation.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::ComputeFault;
use crate::utils::OpCounter;

const SMALL_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Miller-Rabin witnesses that decide primality exactly below 4,759,123,141.
const WITNESSES: [u64; 3] = [2, 7, 61];

/// `base^exp mod modulus` by square-and-multiply, one operation per exponent bit.
pub fn mod_pow(base: u64, exp: u64, modulus: u64, ops: &mut OpCounter) -> Result<u64, ComputeFault> {
    if modulus == 1 {
        return Ok(0);
    }
    let m = modulus as u128;
    let (mut result, mut base, mut exp) = (1u128, base as u128 % m, exp);
    while exp > 0 {
        ops.tick()?;
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    Ok(result as u64)
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Inverse of `a` modulo `m`, via the extended Euclidean algorithm.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m as i128) as u64)
}

/// Miller-Rabin test. Exact for every `n` a key of at most 31 bits can use.
pub fn is_probable_prime(n: u64, ops: &mut OpCounter) -> Result<bool, ComputeFault> {
    if n < 2 {
        return Ok(false);
    }
    for &p in &SMALL_PRIMES {
        ops.tick()?;
        if n == p {
            return Ok(true);
        }
        if n % p == 0 {
            return Ok(false);
        }
    }

    // n - 1 = d * 2^r with d odd
    let r = (n - 1).trailing_zeros();
    let d = (n - 1) >> r;

    'witness: for &a in &WITNESSES {
        if a % n == 0 {
            continue;
        }
        let mut x = mod_pow(a, d, n, ops)?;
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = mod_pow(x, 2, n, ops)?;
            if x == n - 1 {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

/// Random prime with exactly `bits` bits (top bit set).
pub fn random_prime(bits: u32, rng: &mut StdRng, ops: &mut OpCounter) -> Result<u64, ComputeFault> {
    let low = 1u64 << (bits - 1);
    let high = (1u64 << bits) - 1;
    loop {
        ops.tick()?;
        let candidate = rng.random_range(low..=high) | 1;
        if is_probable_prime(candidate, ops)? {
            return Ok(candidate);
        }
    }
}
