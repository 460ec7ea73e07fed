use std::fmt;

use crate::event::Trace;
use crate::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

/// The sorting algorithms the engine can trace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortAlgorithm {
    Merge,
    Quick,
    Selection,
    Bubble,
    Insertion,
}

impl SortAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Selection,
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
        }
    }

    /// Average-case time complexity.
    pub fn complexity(self) -> &'static str {
        match self {
            SortAlgorithm::Merge | SortAlgorithm::Quick => "O(n log n)",
            _ => "O(n²)",
        }
    }

    /// Whether every `Compare` is matched by a `RevertCompare` right after
    /// it. Merge sort emits its comparisons as doubled `Compare`s instead.
    pub fn pairs_comparisons(self) -> bool {
        self != SortAlgorithm::Merge
    }

    /// Trace a sort of `input`. The input itself is never modified.
    pub fn run(self, input: &[i32]) -> Trace {
        let trace = match self {
            SortAlgorithm::Merge => merge_sort(input),
            SortAlgorithm::Quick => quick_sort(input),
            SortAlgorithm::Selection => selection_sort(input),
            SortAlgorithm::Bubble => bubble_sort(input),
            SortAlgorithm::Insertion => insertion_sort(input),
        };
        log::debug!(
            "{}: {} elements, {} events ({})",
            self.name(),
            input.len(),
            trace.len(),
            trace.stats()
        );
        trace
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog() {
        assert_eq!(SortAlgorithm::ALL.len(), 5);
        assert_eq!(SortAlgorithm::Quick.complexity(), "O(n log n)");
        assert_eq!(SortAlgorithm::Insertion.complexity(), "O(n²)");
        assert_eq!(SortAlgorithm::Bubble.to_string(), "Bubble Sort");
        assert!(!SortAlgorithm::Merge.pairs_comparisons());
    }

    #[test]
    fn run_dispatches() {
        let input = [4, 2, 3, 1];
        for alg in SortAlgorithm::ALL {
            assert_eq!(alg.run(&input).replay(&input), vec![1, 2, 3, 4], "{alg}");
        }
    }
}
