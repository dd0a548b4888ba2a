//! Tests for toy RSA.

#[cfg(test)]
mod tests {
    use crate::cryptography::code::*;
    use crate::cryptography::{round_trip, Rsa};
    use crate::harness::{execute, HarnessConfig, Stage};
    use crate::oracle;
    use crate::registry::Category;
    use crate::utils::{OpCounter, PinStrategy};
    use crate::value::{Input, Output, RsaAction};
    use serde_json::json;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prime(n: u64) -> bool {
        is_probable_prime(n, &mut OpCounter::unbounded()).unwrap()
    }

    #[test]
    fn test_primality_against_trial_division() {
        let trial = |n: u64| n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0);
        for n in 0..5_000 {
            assert_eq!(prime(n), trial(n), "{}", n);
        }
        // strong pseudoprimes to small bases
        for n in [2047, 1_373_653, 25_326_001, 3_215_031_751] {
            assert!(!prime(n), "{}", n);
        }
        assert!(prime(2_147_483_647));
    }

    #[test]
    fn test_modular_helpers() {
        let mut ops = OpCounter::unbounded();
        assert_eq!(mod_pow(4, 13, 497, &mut ops).unwrap(), 445);
        assert_eq!(mod_pow(7, 0, 13, &mut ops).unwrap(), 1);
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(mod_inverse(3, 11), Some(4));
        assert_eq!(mod_inverse(17, 3120), Some(2753));
        assert_eq!(mod_inverse(6, 9), None);
    }

    #[test]
    fn test_random_prime_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(11);
        for bits in [8, 12, 16, 24, 31] {
            let p = random_prime(bits, &mut rng, &mut OpCounter::unbounded()).unwrap();
            assert_eq!(64 - p.leading_zeros(), bits, "{}", p);
            assert!(prime(p));
        }
    }

    #[test]
    fn test_keys_are_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        let keys = generate_keys(16, &mut rng, &mut OpCounter::unbounded()).unwrap();
        let (e, n) = keys.public;
        let (d, n2) = keys.private;
        assert_eq!(n, n2);
        assert!(n > 255);
        assert!(e > 1 && d > 1);
    }

    #[test]
    fn test_round_trip() {
        let message = "Hello, RSA! ünïcödé";
        for (bits, seed) in [(8, 0), (16, 7), (24, 99), (31, 5)] {
            let t = round_trip(message, bits, seed, &mut OpCounter::unbounded()).unwrap();
            assert_eq!(t.decrypted, message);
            assert_eq!(t.cipher.len(), message.len());

            let input = Input::Rsa(RsaAction::RoundTrip {
                message: message.to_string(),
                bits,
                seed,
            });
            let output = Output::Rsa(t);
            assert!(
                oracle::check(Category::Cryptography, &input, &output),
                "{:?}",
                oracle::verdict(Category::Cryptography, &input, &output)
            );
        }
    }

    #[test]
    fn test_seed_makes_keys_reproducible() {
        let a = round_trip("abc", 16, 42, &mut OpCounter::unbounded()).unwrap();
        let b = round_trip("abc", 16, 42, &mut OpCounter::unbounded()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_message() {
        let t = round_trip("", 16, 1, &mut OpCounter::unbounded()).unwrap();
        assert!(t.cipher.is_empty());
        assert_eq!(t.decrypted, "");
    }

    #[test]
    fn test_small_modulus_rejected() {
        let err = encrypt("a", (3, 221), &mut OpCounter::unbounded()).unwrap_err();
        assert!(err.to_string().contains("221"));
    }

    fn quiet() -> HarnessConfig {
        HarnessConfig {
            pin_strategy: PinStrategy::None,
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn test_encrypt_and_decrypt_with_caller_keys() {
        // p = 61, q = 53, e = 17, d = 2753
        let encrypted = execute(
            &Rsa,
            &json!({"action": "encrypt", "message": "Hi", "public_key": [17, 3233]}),
            &quiet(),
        );
        let Some(Output::Cipher(cipher)) = encrypted.output() else {
            panic!("encrypt failed: {:?}", encrypted.failure());
        };
        assert_eq!(cipher.len(), 2);
        assert_eq!(cipher[0], mod_pow(b'H' as u64, 17, 3233, &mut OpCounter::unbounded()).unwrap());

        let decrypted = execute(
            &Rsa,
            &json!({"action": "decrypt", "cipher": cipher, "private_key": "2753,3233"}),
            &quiet(),
        );
        assert_eq!(decrypted.output(), Some(&Output::Plaintext("Hi".into())));
    }

    #[test]
    fn test_caller_keys_agree_with_generated_keys() {
        let t = round_trip("key check", 20, 8, &mut OpCounter::unbounded()).unwrap();
        let cipher = encrypt("key check", t.public_key, &mut OpCounter::unbounded()).unwrap();
        assert_eq!(cipher, t.cipher);

        let input = Input::Rsa(RsaAction::Decrypt {
            cipher: cipher.clone(),
            private_key: t.private_key,
        });
        let text = decrypt(&cipher, t.private_key, &mut OpCounter::unbounded()).unwrap();
        assert!(oracle::check(Category::Cryptography, &input, &Output::Plaintext(text)));
    }

    #[test]
    fn test_bad_caller_keys_fail_validation() {
        for raw in [
            json!({"action": "encrypt", "message": "Hi"}),
            json!({"action": "encrypt", "message": "Hi", "public_key": [17, 200]}),
            json!({"action": "decrypt", "cipher": [5], "private_key": [1, 3233]}),
        ] {
            let result = execute(&Rsa, &raw, &quiet());
            let failure = result.failure().expect("bad key accepted");
            assert_eq!(failure.stage, Stage::Validation, "{}", raw);
        }
    }

    #[test]
    fn test_wrong_private_key_is_an_execution_failure() {
        // 2790 is "A" under (17, 3233); d = 3 maps it outside the byte range
        let result = execute(
            &Rsa,
            &json!({"action": "decrypt", "cipher": [2790], "private_key": [3, 3233]}),
            &quiet(),
        );
        let failure = result.failure().expect("wrong key decrypted");
        assert_eq!(failure.stage, Stage::Execution);
    }
}
