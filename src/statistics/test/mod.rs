//! Tests for summary statistics.

#[cfg(test)]
mod tests {
    use crate::oracle;
    use crate::registry::Category;
    use crate::sorting::random_sequence;
    use crate::statistics::code::*;
    use crate::utils::OpCounter;
    use crate::value::{Input, Output, SortOrder, Summary};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stats(values: &[i64]) -> Summary {
        summarize(values, &mut OpCounter::unbounded()).unwrap()
    }

    #[test]
    fn test_odd_length_with_mode() {
        let s = stats(&[5, 2, 2, 9, 1]);
        assert_eq!((s.smallest, s.largest), (1, 9));
        assert_eq!(s.median, 2.0);
        assert_eq!(s.q1, 1.5);
        assert_eq!(s.q3, 7.0);
        assert_eq!(s.mode, Some(vec![2]));
    }

    #[test]
    fn test_even_length_without_mode() {
        let s = stats(&[1, 2, 3, 4]);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q1, 1.5);
        assert_eq!(s.q3, 3.5);
        assert_eq!(s.mode, None);
    }

    #[test]
    fn test_multiple_modes_ascending() {
        assert_eq!(stats(&[2, 1, 3, 2, 1]).mode, Some(vec![1, 2]));
    }

    #[test]
    fn test_all_equal() {
        let s = stats(&[7, 7, 7, 7]);
        assert_eq!((s.smallest, s.largest), (7, 7));
        assert_eq!((s.median, s.q1, s.q3), (7.0, 7.0, 7.0));
        assert_eq!(s.mode, Some(vec![7]));
    }

    #[test]
    fn test_two_and_one_values() {
        let s = stats(&[20, 10]);
        assert_eq!((s.median, s.q1, s.q3), (15.0, 10.0, 20.0));
        assert_eq!(s.mode, None);

        let s = stats(&[-4]);
        assert_eq!((s.smallest, s.largest), (-4, -4));
        assert_eq!((s.median, s.q1, s.q3), (-4.0, -4.0, -4.0));
        assert_eq!(s.mode, None);
    }

    #[test]
    fn test_negative_numbers() {
        let s = stats(&[-5, -1, -3, -3, -2]);
        assert_eq!((s.smallest, s.largest), (-5, -1));
        assert_eq!(s.median, -3.0);
        assert_eq!(s.mode, Some(vec![-3]));
    }

    #[test]
    fn test_empty_sample_is_a_fault() {
        assert!(summarize(&[], &mut OpCounter::unbounded()).is_err());
    }

    #[test]
    fn test_random_samples_satisfy_oracle() {
        let mut rng = StdRng::seed_from_u64(0x57A7);
        for size in [1, 2, 3, 4, 9, 50, 301] {
            let values = random_sequence(size, &mut rng);
            let input = Input::Sequence {
                values: values.clone(),
                order: SortOrder::Ascending,
            };
            let output = Output::Statistics(stats(&values));
            assert!(
                oracle::check(Category::Statistics, &input, &output),
                "{:?}: {:?}",
                values,
                oracle::verdict(Category::Statistics, &input, &output)
            );
        }
    }
}
