//! Merge sort trace generator
//!
//! Top-down merge sort that alternates two buffers between recursion levels.
//! Each call sorts `dest[start..=end]` using `src` as scratch: the halves are
//! sorted into `src` (with the roles swapped), then merged back into `dest`.
//! Recorded indices always refer to positions in the displayed array.

use super::{Trace, Value};

/// Record a merge sort of `values`.
///
/// A single `MarkSorted` covering every index closes the trace.
pub fn merge_sort(values: &[Value]) -> Trace {
    let mut main = values.to_vec();
    let mut aux = values.to_vec();
    let mut trace = Trace::new();

    if !main.is_empty() {
        let end = main.len() - 1;
        sort_into(&mut main, &mut aux, 0, end, &mut trace);
    }

    trace.mark_sorted(0..main.len());
    trace
}

fn sort_into(
    dest: &mut [Value],
    src: &mut [Value],
    start: usize,
    end: usize,
    trace: &mut Trace,
) {
    if start == end {
        return;
    }

    let middle = (start + end) / 2;
    sort_into(src, dest, start, middle, trace);
    sort_into(src, dest, middle + 1, end, trace);
    merge(dest, src, start, middle, end, trace);
}

/// Merge the sorted runs `src[start..=middle]` and `src[middle+1..=end]`
/// into `dest[start..=end]`. Ties take the left run.
fn merge(
    dest: &mut [Value],
    src: &[Value],
    start: usize,
    middle: usize,
    end: usize,
    trace: &mut Trace,
) {
    let mut k = start;
    let mut i = start;
    let mut j = middle + 1;

    while i <= middle && j <= end {
        trace.compare(i, j);

        let value = if src[i] <= src[j] {
            i += 1;
            src[i - 1]
        } else {
            j += 1;
            src[j - 1]
        };
        trace.overwrite(k, value);
        dest[k] = value;
        k += 1;
    }

    // Drain whichever run is left; no comparison needed
    for idx in (i..=middle).chain(j..=end) {
        trace.overwrite(k, src[idx]);
        dest[k] = src[idx];
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Operation;

    #[test]
    fn test_two_elements() {
        let trace = merge_sort(&[2, 1]);
        assert_eq!(
            trace.as_slice(),
            &[
                Operation::Compare { indices: [0, 1] },
                Operation::Overwrite {
                    writes: vec![(0, 1)],
                },
                Operation::Overwrite {
                    writes: vec![(1, 2)],
                },
                Operation::MarkSorted {
                    indices: vec![0, 1],
                },
            ]
        );
    }

    #[test]
    fn test_drain_has_no_compare() {
        // Final merge of [1, 2] and [3, 4]: the left run exhausts first and
        // the right remainder drains uncompared
        let trace = merge_sort(&[1, 2, 3, 4]);
        let ops = trace.as_slice();
        assert_eq!(ops.len(), 13);
        assert_eq!(
            &ops[6..12],
            &[
                Operation::Compare { indices: [0, 2] },
                Operation::Overwrite {
                    writes: vec![(0, 1)],
                },
                Operation::Compare { indices: [1, 2] },
                Operation::Overwrite {
                    writes: vec![(1, 2)],
                },
                Operation::Overwrite {
                    writes: vec![(2, 3)],
                },
                Operation::Overwrite {
                    writes: vec![(3, 4)],
                },
            ]
        );
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let input = [9, 3, 3, 7, 1, 9, 2];
        assert_eq!(merge_sort(&input).replay(&input), vec![1, 2, 3, 3, 7, 9, 9]);
    }

    #[test]
    fn test_empty_input_marks_nothing() {
        let trace = merge_sort(&[]);
        assert_eq!(
            trace.as_slice(),
            &[Operation::MarkSorted { indices: vec![] }]
        );
    }
}
