//! Quick sort trace generator (Lomuto partition, last element as pivot)

use super::{Trace, Value};

/// Record a quick sort of `values`.
///
/// Every pivot is marked sorted as soon as its partition returns. A
/// single-element range is marked directly; an empty range records nothing,
/// so an empty input yields an empty trace.
pub fn quick_sort(values: &[Value]) -> Trace {
    let mut array = values.to_vec();
    let mut trace = Trace::new();
    let len = array.len();
    sort_range(&mut array, 0, len, &mut trace);
    trace
}

/// Sort the half-open range `start..end`
fn sort_range(array: &mut [Value], start: usize, end: usize, trace: &mut Trace) {
    match end.saturating_sub(start) {
        0 => {}
        1 => trace.mark_sorted([start]),
        _ => {
            let pivot = partition(array, start, end - 1, trace);
            trace.mark_sorted([pivot]);

            sort_range(array, start, pivot, trace);
            sort_range(array, pivot + 1, end, trace);
        }
    }
}

/// Partition `array[low..=high]` around `array[high]` and return the pivot's
/// final index
fn partition(array: &mut [Value], low: usize, high: usize, trace: &mut Trace) -> usize {
    let pivot_value = array[high];
    trace.pivot(high);

    let mut store = low;
    for j in low..high {
        trace.compare(j, high);

        if array[j] < pivot_value {
            if store != j {
                trace.swap(store, j, array[j], array[store]);
                array.swap(store, j);
            }
            store += 1;
        }
    }

    if store != high {
        trace.swap(store, high, array[high], array[store]);
        array.swap(store, high);
    }

    store
}
