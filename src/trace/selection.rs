//! Selection sort trace generator

use super::{Trace, Value};

/// Record a selection sort of `values`.
///
/// The running minimum is tracked silently; only the comparisons against it
/// and the single swap per pass are recorded.
pub fn selection_sort(values: &[Value]) -> Trace {
    let mut array = values.to_vec();
    let n = array.len();
    let mut trace = Trace::new();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        for j in (i + 1)..n {
            trace.compare(min_index, j);

            if array[j] < array[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            trace.swap(i, min_index, array[min_index], array[i]);
            array.swap(i, min_index);
        }

        trace.mark_sorted([i]);
    }

    // Last slot; saturates to 0 on an empty input
    trace.mark_sorted([n.saturating_sub(1)]);
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Operation;

    #[test]
    fn test_compares_against_running_minimum() {
        let trace = selection_sort(&[3, 1, 2]);
        assert_eq!(
            trace.as_slice(),
            &[
                Operation::Compare { indices: [0, 1] },
                Operation::Compare { indices: [1, 2] },
                Operation::Swap {
                    indices: [0, 1],
                    values: [1, 3],
                },
                Operation::MarkSorted { indices: vec![0] },
                Operation::Compare { indices: [1, 2] },
                Operation::Swap {
                    indices: [1, 2],
                    values: [2, 3],
                },
                Operation::MarkSorted { indices: vec![1] },
                Operation::MarkSorted { indices: vec![2] },
            ]
        );
    }

    #[test]
    fn test_no_swap_when_minimum_in_place() {
        let trace = selection_sort(&[1, 2, 3]);
        assert!(!trace.iter().any(Operation::mutates));
    }

    #[test]
    fn test_empty_input_marks_saturated_last_index() {
        let trace = selection_sort(&[]);
        assert_eq!(
            trace.as_slice(),
            &[Operation::MarkSorted { indices: vec![0] }]
        );
    }
}
