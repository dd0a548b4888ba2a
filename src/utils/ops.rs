//! Operation counting with an enforced step budget.
//!
//! Every unit receives a fresh counter per run. Units call [`OpCounter::tick`]
//! for each basic step (comparison, swap, edge relaxation...) and propagate
//! the error with `?`, so a runaway computation stops at the budget.

use crate::error::ComputeFault;

/// Operation counter bound to a single harness run.
#[derive(Debug)]
pub struct OpCounter {
    count: u64,
    budget: u64,
}

impl OpCounter {
    /// Create a zeroed counter that allows at most `budget` operations.
    pub fn with_budget(budget: u64) -> Self {
        Self { count: 0, budget }
    }

    /// Counter without a practical ceiling, for calling algorithms directly.
    pub fn unbounded() -> Self {
        Self::with_budget(u64::MAX)
    }

    /// Record one operation.
    #[inline]
    pub fn tick(&mut self) -> Result<(), ComputeFault> {
        self.tick_n(1)
    }

    /// Record `n` operations at once.
    ///
    /// The count never exceeds the budget: on exhaustion it is clamped to the
    /// budget and the fault is returned. A count that would pass `u64::MAX`
    /// exhausts even the unbounded counter.
    #[inline]
    pub fn tick_n(&mut self, n: u64) -> Result<(), ComputeFault> {
        match self.count.checked_add(n) {
            Some(next) if next <= self.budget => {
                self.count = next;
                Ok(())
            }
            _ => {
                self.count = self.budget;
                Err(ComputeFault::BudgetExhausted {
                    budget: self.budget,
                })
            }
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }
}

/// `ceil(log2(n))`, with `log2_ceil(0) == log2_ceil(1) == 0`.
pub fn log2_ceil(n: usize) -> u64 {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as u64
    }
}
