//! Tests for dynamic programming implementations.

#[cfg(test)]
mod tests {
    use crate::dynamic_programming::code::*;
    use crate::dynamic_programming::PalindromicSubstrings;
    use crate::harness::{execute, HarnessConfig, Stage};
    use crate::oracle;
    use crate::registry::{AlgorithmUnit, Category};
    use crate::string_matching::random_text;
    use crate::utils::{OpCounter, PinStrategy};
    use crate::validator::MAX_TEXT_CHARS;
    use crate::value::{Input, Output};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn palindromes(text: &str) -> (Vec<String>, usize) {
        palindromic_substrings(text, &mut OpCounter::unbounded()).unwrap()
    }

    #[test]
    fn test_racecar() {
        let (found, count) = palindromes("racecar");
        assert_eq!(count, 10);
        assert_eq!(found.len(), 10);
        assert_eq!(&found[..7], &["r", "a", "c", "e", "c", "a", "r"]);
        assert_eq!(&found[7..], &["cec", "aceca", "racecar"]);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(palindromes(""), (vec![], 0));
        assert_eq!(palindromes("x"), (vec!["x".to_string()], 1));
    }

    #[test]
    fn test_no_repeats() {
        let (found, count) = palindromes("abcd");
        assert_eq!(count, 4);
        assert_eq!(found, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let (found, count) = palindromes("éaé");
        assert_eq!(count, 4);
        assert_eq!(found.last().map(String::as_str), Some("éaé"));
    }

    #[test]
    fn test_operation_count_is_triangular() {
        let mut ops = OpCounter::unbounded();
        palindromic_substrings("abcdefgh", &mut ops).unwrap();
        assert_eq!(ops.count(), 8 * 9 / 2);
    }

    #[test]
    fn test_random_texts_satisfy_oracle() {
        let mut rng = StdRng::seed_from_u64(0xDA7A);
        for size in [0, 1, 2, 5, 17, 40] {
            let text = random_text(size, &mut rng);
            let (found, count) = palindromes(&text);
            let input = Input::Text(text.clone());
            let output = Output::Palindromes { found, count };
            assert!(
                oracle::check(Category::DynamicProgramming, &input, &output),
                "{:?}: {:?}",
                text,
                oracle::verdict(Category::DynamicProgramming, &input, &output)
            );
        }
    }

    #[test]
    fn test_nested_palindromes_need_two_rows() {
        let (found, count) = palindromes("abaaba");
        assert_eq!(count, 11);
        assert_eq!(&found[6..], &["aa", "aba", "aba", "baab", "abaaba"]);
    }

    #[test]
    fn test_text_limit_is_enforced_by_the_harness() {
        let config = HarnessConfig {
            pin_strategy: PinStrategy::None,
            ..HarnessConfig::default()
        };

        let at_limit = json!("a".repeat(MAX_TEXT_CHARS));
        let result = execute(&PalindromicSubstrings, &at_limit, &config);
        match result.output() {
            Some(Output::Palindromes { count, .. }) => {
                assert_eq!(*count, MAX_TEXT_CHARS * (MAX_TEXT_CHARS + 1) / 2)
            }
            other => panic!("expected palindromes, got {:?} / {:?}", other, result.failure()),
        }

        let over = json!("a".repeat(MAX_TEXT_CHARS + 1));
        let result = execute(&PalindromicSubstrings, &over, &config);
        let failure = result.failure().expect("oversized text must fail");
        assert_eq!(failure.stage, Stage::Validation);
        assert_eq!(result.operations, 0);
    }

    #[test]
    fn test_generated_text_respects_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        let raw = PalindromicSubstrings
            .generate_input(MAX_TEXT_CHARS * 4, &mut rng)
            .unwrap();
        assert_eq!(raw.as_str().map(|t| t.chars().count()), Some(MAX_TEXT_CHARS));
    }
}
