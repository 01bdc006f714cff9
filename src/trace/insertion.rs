//! Insertion sort trace generator

use super::{Trace, Value};

/// Record an insertion sort of `values`.
///
/// After each key is placed the whole sorted prefix `0..=i` is re-marked,
/// so the marks are cumulative rather than incremental.
pub fn insertion_sort(values: &[Value]) -> Trace {
    let mut array = values.to_vec();
    let n = array.len();
    let mut trace = Trace::new();

    trace.mark_sorted([0]);

    for i in 1..n {
        let key = array[i];
        // `slot` is one past the neighbour under inspection
        let mut slot = i;

        while slot > 0 {
            trace.compare(slot - 1, slot);

            if array[slot - 1] > key {
                trace.overwrite(slot, array[slot - 1]);
                array[slot] = array[slot - 1];
                slot -= 1;
            } else {
                break;
            }
        }

        if slot != i {
            trace.overwrite(slot, key);
        }
        array[slot] = key;

        trace.mark_sorted(0..=i);
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Operation;

    #[test]
    fn test_shift_then_place_key() {
        let trace = insertion_sort(&[2, 1]);
        assert_eq!(
            trace.as_slice(),
            &[
                Operation::MarkSorted { indices: vec![0] },
                Operation::Compare { indices: [0, 1] },
                Operation::Overwrite {
                    writes: vec![(1, 2)],
                },
                Operation::Overwrite {
                    writes: vec![(0, 1)],
                },
                Operation::MarkSorted {
                    indices: vec![0, 1],
                },
            ]
        );
    }

    #[test]
    fn test_key_in_place_emits_no_overwrite() {
        let trace = insertion_sort(&[1, 2]);
        assert_eq!(
            trace.as_slice(),
            &[
                Operation::MarkSorted { indices: vec![0] },
                Operation::Compare { indices: [0, 1] },
                Operation::MarkSorted {
                    indices: vec![0, 1],
                },
            ]
        );
    }

    #[test]
    fn test_marks_are_cumulative_prefixes() {
        let trace = insertion_sort(&[4, 3, 2, 1]);
        let marks: Vec<Vec<usize>> = trace
            .iter()
            .filter_map(|op| match op {
                Operation::MarkSorted { indices } => Some(indices.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            marks,
            vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 1, 2, 3]]
        );
        assert_eq!(trace.replay(&[4, 3, 2, 1]), vec![1, 2, 3, 4]);
    }
}
