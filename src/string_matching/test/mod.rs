//! Tests for pattern matchers.

#[cfg(test)]
mod tests {
    use crate::oracle;
    use crate::registry::Category;
    use crate::string_matching::code::*;
    use crate::string_matching::random_text;
    use crate::utils::OpCounter;
    use crate::value::{Input, Output};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn find(f: MatchFn, text: &str, pattern: &str) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        f(&text, &pattern, &mut OpCounter::unbounded()).expect("unbounded match cannot fault")
    }

    #[test]
    fn test_all_occurrences() {
        for v in available_variants() {
            assert_eq!(find(v.function, "abracadabra", "abra"), vec![0, 7], "{}", v.name);
            assert_eq!(find(v.function, "abracadabra", "a"), vec![0, 3, 5, 7, 10], "{}", v.name);
            assert!(find(v.function, "abracadabra", "xyz").is_empty(), "{}", v.name);
        }
    }

    #[test]
    fn test_overlapping_matches() {
        for v in available_variants() {
            assert_eq!(find(v.function, "aaaa", "aa"), vec![0, 1, 2], "{}", v.name);
            assert_eq!(find(v.function, "abababa", "aba"), vec![0, 2, 4], "{}", v.name);
        }
    }

    #[test]
    fn test_pattern_longer_than_text() {
        for v in available_variants() {
            assert!(find(v.function, "ab", "abc").is_empty(), "{}", v.name);
            assert!(find(v.function, "", "a").is_empty(), "{}", v.name);
        }
    }

    #[test]
    fn test_offsets_count_characters() {
        for v in available_variants() {
            assert_eq!(find(v.function, "héllo wörld", "wö"), vec![6], "{}", v.name);
        }
    }

    #[test]
    fn test_kmp_is_linear_on_repetitive_text() {
        let text = "a".repeat(1000);
        let pattern = format!("{}b", "a".repeat(9));
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();

        let mut kmp_ops = OpCounter::unbounded();
        kmp_search(&text, &pattern, &mut kmp_ops).unwrap();
        let mut naive_ops = OpCounter::unbounded();
        naive_search(&text, &pattern, &mut naive_ops).unwrap();

        assert!(kmp_ops.count() <= 2 * (1000 + 10) + 1, "{}", kmp_ops.count());
        assert!(naive_ops.count() > kmp_ops.count());
    }

    #[test]
    fn test_random_texts_satisfy_oracle() {
        let mut rng = StdRng::seed_from_u64(0x0D1A);
        for size in [0, 1, 3, 10, 60, 250] {
            for _ in 0..5 {
                let text = random_text(size, &mut rng);
                let pattern_len = rng.random_range(1..=4);
                let pattern = random_text(pattern_len, &mut rng);
                let input = Input::Pattern {
                    text: text.clone(),
                    pattern: pattern.clone(),
                };
                for v in available_variants() {
                    let output = Output::Positions(find(v.function, &text, &pattern));
                    assert!(
                        oracle::check(Category::StringMatching, &input, &output),
                        "{} for {:?} in {:?}: {:?}",
                        v.name,
                        pattern,
                        text,
                        oracle::verdict(Category::StringMatching, &input, &output)
                    );
                }
            }
        }
    }
}
