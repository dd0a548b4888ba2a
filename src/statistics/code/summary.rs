//! Descriptive statistics of an integer sample.

use crate::error::ComputeFault;
use crate::sorting::merge_sort;
use crate::utils::OpCounter;
use crate::value::{SortOrder, Summary};

fn median(sorted: &[i64]) -> f64 {
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[middle] as f64
    } else {
        (sorted[middle - 1] as f64 + sorted[middle] as f64) / 2.0
    }
}

/// Values sharing the highest frequency, ascending. `None` when no value repeats.
fn modes(sorted: &[i64], ops: &mut OpCounter) -> Result<Option<Vec<i64>>, ComputeFault> {
    let mut best = 0;
    let mut modes = Vec::new();
    let mut run_start = 0;

    for i in 1..=sorted.len() {
        ops.tick()?;
        if i < sorted.len() && sorted[i] == sorted[run_start] {
            continue;
        }
        let run = i - run_start;
        if run > best {
            best = run;
            modes.clear();
        }
        if run == best {
            modes.push(sorted[run_start]);
        }
        run_start = i;
    }

    Ok((best > 1).then_some(modes))
}

/// Smallest, largest, median, quartiles and mode of `values`.
///
/// Quartiles are the medians of the lower and upper halves of the sorted
/// sample, excluding the middle element when the length is odd. A single
/// value is its own quartiles.
///
/// Returns an invariant fault for an empty sample; validation normally rules
/// that out.
pub fn summarize(values: &[i64], ops: &mut OpCounter) -> Result<Summary, ComputeFault> {
    if values.is_empty() {
        return Err(ComputeFault::invariant("statistics of an empty sample"));
    }

    let sorted = merge_sort(values, SortOrder::Ascending, ops)?;
    let n = sorted.len();

    let (q1, q3) = if n == 1 {
        (sorted[0] as f64, sorted[0] as f64)
    } else {
        (median(&sorted[..n / 2]), median(&sorted[(n + 1) / 2..]))
    };

    Ok(Summary {
        smallest: sorted[0],
        largest: sorted[n - 1],
        median: median(&sorted),
        q1,
        q3,
        mode: modes(&sorted, ops)?,
    })
}
