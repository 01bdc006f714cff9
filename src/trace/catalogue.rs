//! Static descriptions of the visualized algorithms

use super::Algorithm;

/// Best / average / worst case running time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// What the info pane shows for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time: Complexity,
    pub space: &'static str,
    pub characteristics: &'static [&'static str],
}

const BUBBLE: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "Repeatedly steps through the list, compares adjacent elements and swaps \
                  them if they are in the wrong order.",
    time: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    characteristics: &[
        "Simple to implement",
        "Not efficient for large data sets",
        "Performs well on nearly sorted data",
    ],
};

const SELECTION: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    description: "Repeatedly selects the smallest element from the unsorted portion and \
                  puts it at the end of the sorted portion.",
    time: Complexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    characteristics: &[
        "Simple to implement",
        "Performs poorly on large data sets",
        "Makes the minimum number of swaps",
    ],
};

const INSERTION: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "Builds the sorted array one item at a time by inserting each element \
                  into its correct position among the ones before it.",
    time: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    characteristics: &[
        "Efficient for small data sets",
        "Performs well on nearly sorted data",
        "Can sort a list as it receives it (online)",
    ],
};

const MERGE: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "Divides the array into two halves, recursively sorts them and then \
                  merges the sorted halves.",
    time: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space: "O(n)",
    characteristics: &[
        "Stable (preserves order of equal elements)",
        "Guaranteed worst-case performance",
        "Not in-place, requires extra space",
    ],
};

const QUICK: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "Selects a pivot, partitions the array around it and recursively sorts \
                  the two sub-arrays.",
    time: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space: "O(log n)",
    characteristics: &[
        "Usually fastest in practice",
        "Not stable",
        "Worst case depends on pivot choice",
    ],
};

/// Look up the catalogue entry for `algorithm`
pub fn info(algorithm: Algorithm) -> &'static AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => &BUBBLE,
        Algorithm::Selection => &SELECTION,
        Algorithm::Insertion => &INSERTION,
        Algorithm::Merge => &MERGE,
        Algorithm::Quick => &QUICK,
    }
}
