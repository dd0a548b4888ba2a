//! Tests for integer sequences.

#[cfg(test)]
mod tests {
    use crate::error::ComputeFault;
    use crate::numeric::code::*;
    use crate::oracle;
    use crate::registry::Category;
    use crate::utils::OpCounter;
    use crate::value::{Input, Output};

    fn eval(f: SequenceFn, n: u64) -> Result<u128, ComputeFault> {
        f(n, &mut OpCounter::unbounded())
    }

    #[test]
    fn test_factorial_small_values() {
        let expected = [1u128, 1, 2, 6, 24, 120, 720, 5040];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(eval(factorial, n as u64).unwrap(), value, "{}!", n);
        }
        assert_eq!(eval(factorial, 20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_boundary() {
        let largest = eval(factorial, MAX_FACTORIAL_INPUT).unwrap();
        assert_eq!(largest, 295_232_799_039_604_140_847_618_609_643_520_000_000);

        let err = eval(factorial, MAX_FACTORIAL_INPUT + 1).unwrap_err();
        assert!(matches!(err, ComputeFault::Overflow(_)), "{:?}", err);
        assert!(eval(factorial, u64::MAX).is_err());
    }

    #[test]
    fn test_fibonacci_small_values() {
        let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(eval(fibonacci, n as u64).unwrap(), value, "F({})", n);
        }
        assert_eq!(eval(fibonacci, 90).unwrap(), 2_880_067_194_370_816_120);
    }

    #[test]
    fn test_fibonacci_boundary() {
        assert!(eval(fibonacci, MAX_FIBONACCI_INPUT).is_ok());
        let err = eval(fibonacci, MAX_FIBONACCI_INPUT + 1).unwrap_err();
        assert!(matches!(err, ComputeFault::Overflow(_)), "{:?}", err);
    }

    #[test]
    fn test_fibonacci_huge_input_stops_at_budget() {
        // budget runs out before the terms leave 128 bits
        let mut ops = OpCounter::with_budget(100);
        let err = fibonacci(u64::MAX, &mut ops).unwrap_err();
        assert!(err.is_budget_exhausted(), "{:?}", err);
        assert_eq!(ops.count(), 100);
    }

    #[test]
    fn test_fibonacci_huge_input_overflows_within_large_budget() {
        let mut ops = OpCounter::with_budget(1000);
        let err = fibonacci(u64::MAX, &mut ops).unwrap_err();
        assert!(matches!(err, ComputeFault::Overflow(_)), "{:?}", err);
        assert!(ops.count() <= MAX_FIBONACCI_INPUT + 1, "{}", ops.count());
    }

    #[test]
    fn test_results_satisfy_oracle() {
        for n in 0..=MAX_FACTORIAL_INPUT {
            let output = Output::Integer(eval(factorial, n).unwrap());
            assert!(oracle::check(Category::Combinatorics, &Input::Integer(n), &output), "{}!", n);
        }
        for n in 0..=MAX_FIBONACCI_INPUT {
            let output = Output::Integer(eval(fibonacci, n).unwrap());
            assert!(oracle::check(Category::Recurrence, &Input::Integer(n), &output), "F({})", n);
        }
    }
}
