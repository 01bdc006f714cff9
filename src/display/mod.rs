//! Display state driven by trace playback
//!
//! A [`DisplayArray`] is what the bar chart renders: one [`Cell`] per element,
//! each carrying a value and a [`VisualTag`]. It only changes through
//! [`DisplayArray::apply`] and [`DisplayArray::finalize`].
//!
//! # Tag rules
//!
//! - Before an operation takes effect, every cell that is not `Sorted` goes
//!   back to `Default`, so only the current operation's indices are
//!   highlighted.
//! - `Sorted` is sticky: no later operation retags a sorted cell. Value
//!   writes still land on sorted cells.
//! - Indices outside the array are ignored.

pub mod source;

use crate::trace::{Operation, Value};

pub use source::{ArraySource, FixedSource, RandomSource};

/// Visual role of a cell in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualTag {
    #[default]
    Default,
    Comparing,
    Swapping,
    Pivot,
    Sorted,
}

/// One bar of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: Value,
    pub tag: VisualTag,
}

impl Cell {
    pub fn new(value: Value) -> Self {
        Cell {
            value,
            tag: VisualTag::Default,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.tag == VisualTag::Sorted
    }
}

/// Tagged, index-addressed array state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayArray {
    cells: Vec<Cell>,
}

impl DisplayArray {
    pub fn new(cells: Vec<Cell>) -> Self {
        DisplayArray { cells }
    }

    /// Build an untagged array from raw values
    pub fn from_values(values: &[Value]) -> Self {
        DisplayArray {
            cells: values.iter().copied().map(Cell::new).collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Snapshot of the current values, used as generator input
    pub fn values(&self) -> Vec<Value> {
        self.cells.iter().map(|cell| cell.value).collect()
    }

    /// Current tags, in index order
    pub fn tags(&self) -> Vec<VisualTag> {
        self.cells.iter().map(|cell| cell.tag).collect()
    }

    /// Replay one operation
    pub fn apply(&mut self, op: &Operation) {
        self.clear_transient();

        match op {
            Operation::Compare { indices } => {
                for &idx in indices {
                    self.retag(idx, VisualTag::Comparing);
                }
            }
            Operation::Swap { indices, values } => {
                for (&idx, &value) in indices.iter().zip(values) {
                    self.write(idx, value);
                    self.retag(idx, VisualTag::Swapping);
                }
            }
            Operation::Overwrite { writes } => {
                for &(idx, value) in writes {
                    self.write(idx, value);
                    self.retag(idx, VisualTag::Swapping);
                }
            }
            Operation::Pivot { index } => {
                self.retag(*index, VisualTag::Pivot);
            }
            Operation::MarkSorted { indices } => {
                for &idx in indices {
                    if let Some(cell) = self.cells.get_mut(idx) {
                        cell.tag = VisualTag::Sorted;
                    }
                }
            }
        }
    }

    /// Force every cell to `Sorted` once a run finishes
    pub fn finalize(&mut self) {
        for cell in &mut self.cells {
            cell.tag = VisualTag::Sorted;
        }
    }

    fn clear_transient(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_sorted() {
                cell.tag = VisualTag::Default;
            }
        }
    }

    fn retag(&mut self, idx: usize, tag: VisualTag) {
        let len = self.cells.len();
        match self.cells.get_mut(idx) {
            Some(cell) if !cell.is_sorted() => cell.tag = tag,
            Some(_) => {}
            None => tracing::trace!(idx, len, "ignoring out-of-range index"),
        }
    }

    fn write(&mut self, idx: usize, value: Value) {
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.value = value;
        }
    }
}
