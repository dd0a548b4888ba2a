//! Tests for search implementations.

#[cfg(test)]
mod tests {
    use crate::oracle;
    use crate::registry::{AlgorithmUnit, Category};
    use crate::searching::code::*;
    use crate::searching::BinarySearch;
    use crate::sorting::{merge_sort, random_sequence};
    use crate::utils::OpCounter;
    use crate::validator;
    use crate::value::{Input, Output, SortOrder};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn search_with(f: SearchFn, values: &[i64], target: i64) -> Option<usize> {
        f(values, target, &mut OpCounter::unbounded()).expect("unbounded search cannot fault")
    }

    #[test]
    fn test_found_and_missing() {
        let values = [4, 8, 15, 16, 23, 42];
        for v in available_variants() {
            assert_eq!(search_with(v.function, &values, 16), Some(3), "{}", v.name);
            assert_eq!(search_with(v.function, &values, 4), Some(0), "{}", v.name);
            assert_eq!(search_with(v.function, &values, 42), Some(5), "{}", v.name);
            assert_eq!(search_with(v.function, &values, 5), None, "{}", v.name);
            assert_eq!(search_with(v.function, &[], 5), None, "{}", v.name);
        }
    }

    #[test]
    fn test_linear_returns_first_match() {
        assert_eq!(search_with(linear_search, &[7, 1, 7, 7], 7), Some(0));
        assert_eq!(search_with(linear_search, &[3, 1, 2, 1], 1), Some(1));
    }

    #[test]
    fn test_linear_handles_unsorted_input() {
        assert_eq!(search_with(linear_search, &[9, -3, 12, 0], 0), Some(3));
    }

    #[test]
    fn test_binary_search_is_logarithmic() {
        let values: Vec<i64> = (0..1024).collect();
        let mut ops = OpCounter::unbounded();
        binary_search(&values, -1, &mut ops).unwrap();
        assert!(ops.count() <= 11, "{} comparisons", ops.count());
    }

    #[test]
    fn test_random_queries_satisfy_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5EA2C4);
        for size in [0, 1, 2, 5, 32, 200] {
            let values = merge_sort(
                &random_sequence(size, &mut rng),
                SortOrder::Ascending,
                &mut OpCounter::unbounded(),
            )
            .unwrap();
            for _ in 0..10 {
                let target = if !values.is_empty() && rng.random_bool(0.5) {
                    values[rng.random_range(0..values.len())]
                } else {
                    rng.random_range(-1000..1000)
                };
                let input = Input::Search {
                    values: values.clone(),
                    target,
                };
                for v in available_variants() {
                    let output = Output::Index(search_with(v.function, &values, target));
                    for category in [Category::Searching, Category::SortedSearching] {
                        assert!(
                            oracle::check(category, &input, &output),
                            "{} on {:?} for {}: {:?}",
                            v.name,
                            values,
                            target,
                            oracle::verdict(category, &input, &output)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_generated_binary_search_input_is_sorted() {
        let mut rng = StdRng::seed_from_u64(0xB1_5EC7);
        for size in [0, 1, 17, 300] {
            let raw = BinarySearch.generate_input(size, &mut rng).unwrap();
            let input = validator::decode(BinarySearch.input_shape(), &raw)
                .unwrap_or_else(|e| panic!("size {}: {}", size, e));
            let Input::Search { values, .. } = &input else {
                panic!("unexpected input {:?}", input);
            };
            assert_eq!(values.len(), size);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
        }
    }
}
