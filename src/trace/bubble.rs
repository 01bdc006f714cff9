//! Bubble sort trace generator

use super::{Trace, Value};

/// Record a bubble sort of `values`.
///
/// Each outer pass bubbles the largest remaining value to the end of the
/// unsorted region and marks that slot sorted. Index 0 is marked last, even
/// for an empty input.
pub fn bubble_sort(values: &[Value]) -> Trace {
    let mut array = values.to_vec();
    let n = array.len();
    let mut trace = Trace::new();

    for pass in 0..n.saturating_sub(1) {
        let unsorted = n - pass - 1;

        for j in 0..unsorted {
            trace.compare(j, j + 1);

            if array[j] > array[j + 1] {
                trace.swap(j, j + 1, array[j + 1], array[j]);
                array.swap(j, j + 1);
            }
        }

        trace.mark_sorted([unsorted]);
    }

    trace.mark_sorted([0]);
    trace
}
