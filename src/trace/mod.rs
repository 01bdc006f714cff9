//! Operation traces for the sorting algorithms
//!
//! Every generator in this module sorts a private copy of its input and records
//! each comparison and mutation as an [`Operation`]. The resulting [`Trace`] is
//! pure data: it can be replayed from any index, as many times as needed, and
//! replaying it against the original input reproduces the sorted order.
//!
//! | Algorithm   | Generator                    |
//! |-------------|------------------------------|
//! | Bubble      | [`bubble::bubble_sort`]      |
//! | Selection   | [`selection::selection_sort`]|
//! | Insertion   | [`insertion::insertion_sort`]|
//! | Merge       | [`merge::merge_sort`]        |
//! | Quick       | [`quick::quick_sort`]        |
//!
//! Emission order and tie-breaking are part of each generator's contract, so
//! the same input always produces the same trace.

pub mod bubble;
pub mod catalogue;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use serde::{Deserialize, Serialize};

pub use catalogue::{AlgorithmInfo, Complexity};

/// A displayed magnitude
pub type Value = u32;

/// One atomic step of a sorting algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Operation {
    /// Two indices are being compared; no mutation
    Compare { indices: [usize; 2] },

    /// Two indices exchange values; `values` holds the post-swap contents
    Swap {
        indices: [usize; 2],
        values: [Value; 2],
    },

    /// One-sided writes (insertion shifts, merge writes)
    Overwrite { writes: Vec<(usize, Value)> },

    /// The partition pivot; no mutation
    Pivot { index: usize },

    /// Indices that reached their final position
    MarkSorted { indices: Vec<usize> },
}

impl Operation {
    /// All indices this operation touches, in emission order
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Operation::Compare { indices } | Operation::Swap { indices, .. } => indices.to_vec(),
            Operation::Overwrite { writes } => writes.iter().map(|&(idx, _)| idx).collect(),
            Operation::Pivot { index } => vec![*index],
            Operation::MarkSorted { indices } => indices.clone(),
        }
    }

    /// Whether replaying this operation changes any value
    pub fn mutates(&self) -> bool {
        matches!(self, Operation::Swap { .. } | Operation::Overwrite { .. })
    }
}

/// Ordered log of operations for one algorithm run over one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    ops: Vec<Operation>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { ops: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Get the operation at `index`
    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.ops.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn as_slice(&self) -> &[Operation] {
        &self.ops
    }

    /// Apply every value-mutating operation to a copy of `values`.
    ///
    /// Indices outside `values` are skipped.
    pub fn replay(&self, values: &[Value]) -> Vec<Value> {
        let mut out = values.to_vec();
        for op in &self.ops {
            match op {
                Operation::Swap { indices, values } => {
                    for (&idx, &value) in indices.iter().zip(values) {
                        if let Some(slot) = out.get_mut(idx) {
                            *slot = value;
                        }
                    }
                }
                Operation::Overwrite { writes } => {
                    for &(idx, value) in writes {
                        if let Some(slot) = out.get_mut(idx) {
                            *slot = value;
                        }
                    }
                }
                Operation::Compare { .. }
                | Operation::Pivot { .. }
                | Operation::MarkSorted { .. } => {}
            }
        }
        out
    }

    pub(crate) fn compare(&mut self, i: usize, j: usize) {
        self.ops.push(Operation::Compare { indices: [i, j] });
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize, at_i: Value, at_j: Value) {
        self.ops.push(Operation::Swap {
            indices: [i, j],
            values: [at_i, at_j],
        });
    }

    pub(crate) fn overwrite(&mut self, index: usize, value: Value) {
        self.ops.push(Operation::Overwrite {
            writes: vec![(index, value)],
        });
    }

    pub(crate) fn pivot(&mut self, index: usize) {
        self.ops.push(Operation::Pivot { index });
    }

    pub(crate) fn mark_sorted(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.ops.push(Operation::MarkSorted {
            indices: indices.into_iter().collect(),
        });
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// The five visualized algorithms
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Human-readable name, as recorded in run history
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Static description and complexity table
    pub fn info(self) -> &'static AlgorithmInfo {
        catalogue::info(self)
    }

    /// Produce the trace for `values` without touching them
    pub fn generate(self, values: &[Value]) -> Trace {
        match self {
            Algorithm::Bubble => bubble::bubble_sort(values),
            Algorithm::Selection => selection::selection_sort(values),
            Algorithm::Insertion => insertion::insertion_sort(values),
            Algorithm::Merge => merge::merge_sort(values),
            Algorithm::Quick => quick::quick_sort(values),
        }
    }

    /// Cycle forward through [`Algorithm::ALL`]
    pub fn next(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Selection,
            Algorithm::Selection => Algorithm::Insertion,
            Algorithm::Insertion => Algorithm::Merge,
            Algorithm::Merge => Algorithm::Quick,
            Algorithm::Quick => Algorithm::Bubble,
        }
    }

    /// Cycle backward through [`Algorithm::ALL`]
    pub fn prev(self) -> Self {
        match self {
            Algorithm::Bubble => Algorithm::Quick,
            Algorithm::Selection => Algorithm::Bubble,
            Algorithm::Insertion => Algorithm::Selection,
            Algorithm::Merge => Algorithm::Insertion,
            Algorithm::Quick => Algorithm::Merge,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
