//! Tests for sorting implementations.

#[cfg(test)]
mod tests {
    use crate::oracle;
    use crate::registry::Category;
    use crate::sorting::code::*;
    use crate::sorting::random_sequence;
    use crate::utils::OpCounter;
    use crate::value::{Input, Output, SortOrder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sort_with(f: SortFn, values: &[i64], order: SortOrder) -> Vec<i64> {
        f(values, order, &mut OpCounter::unbounded()).expect("unbounded sort cannot fault")
    }

    #[test]
    fn test_basic_ascending() {
        for v in available_variants() {
            assert_eq!(
                sort_with(v.function, &[5, 3, 1, 4, 2], SortOrder::Ascending),
                vec![1, 2, 3, 4, 5],
                "{}",
                v.name
            );
        }
    }

    #[test]
    fn test_descending_with_duplicates() {
        for v in available_variants() {
            assert_eq!(
                sort_with(v.function, &[2, 9, -1, 9, 0, 2], SortOrder::Descending),
                vec![9, 9, 2, 2, 0, -1],
                "{}",
                v.name
            );
        }
    }

    #[test]
    fn test_empty_and_single() {
        for v in available_variants() {
            assert!(sort_with(v.function, &[], SortOrder::Ascending).is_empty(), "{}", v.name);
            assert_eq!(sort_with(v.function, &[42], SortOrder::Ascending), vec![42], "{}", v.name);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let values = vec![3, 2, 1];
        for v in available_variants() {
            let _ = sort_with(v.function, &values, SortOrder::Ascending);
            assert_eq!(values, vec![3, 2, 1], "{}", v.name);
        }
    }

    #[test]
    fn test_random_inputs_satisfy_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5047);
        for size in [0, 1, 2, 3, 7, 16, 31, 100] {
            let values = random_sequence(size, &mut rng);
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let input = Input::Sequence {
                    values: values.clone(),
                    order,
                };
                for v in available_variants() {
                    let output = Output::Sequence(sort_with(v.function, &values, order));
                    assert!(
                        oracle::check(Category::Sorting, &input, &output),
                        "{} failed on {:?} ({:?}): {:?}",
                        v.name,
                        values,
                        order,
                        oracle::verdict(Category::Sorting, &input, &output)
                    );
                }
            }
        }
    }

    #[test]
    fn test_sorting_twice_is_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_sequence(64, &mut rng);
        for v in available_variants() {
            let once = sort_with(v.function, &values, SortOrder::Ascending);
            let again = sort_with(v.function, &values, SortOrder::Ascending);
            assert_eq!(once, again, "{}", v.name);
            assert_eq!(sort_with(v.function, &once, SortOrder::Ascending), once, "{}", v.name);
        }
    }

    #[test]
    fn test_bubble_exits_early_on_sorted_input() {
        let mut ops = OpCounter::unbounded();
        bubble_sort(&[1, 2, 3, 4, 5, 6], SortOrder::Ascending, &mut ops).unwrap();
        assert_eq!(ops.count(), 5);
    }

    #[test]
    fn test_selection_counts_every_comparison() {
        let mut ops = OpCounter::unbounded();
        selection_sort(&[1, 2, 3, 4, 5], SortOrder::Ascending, &mut ops).unwrap();
        assert_eq!(ops.count(), 10);
    }

    #[test]
    fn test_budget_stops_sort() {
        let values: Vec<i64> = (0..50).rev().collect();
        for v in available_variants() {
            let mut ops = OpCounter::with_budget(20);
            let err = (v.function)(&values, SortOrder::Ascending, &mut ops).unwrap_err();
            assert!(err.is_budget_exhausted(), "{}", v.name);
            assert_eq!(ops.count(), 20, "{}", v.name);
        }
    }
}
