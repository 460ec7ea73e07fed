//! Traced sorting algorithms.
//!
//! Each algorithm sorts a private copy of its input and records every step
//! as a [`TraceEvent`]. The sorted array is never returned directly: it is
//! what [`Trace::replay`] produces by applying the value-carrying events
//! (`Swap`, and merge sort's `Overwrite`) in order.
//!
//! | Algorithm | Function | Comparison events |
//! |---|---|---|
//! | Merge | [`merge_sort`] | `Compare` twice, then `Overwrite` |
//! | Quick (Lomuto) | [`quick_sort`] | `Compare` / `RevertCompare` |
//! | Selection | [`selection_sort`] | `Compare` / `RevertCompare` |
//! | Bubble | [`bubble_sort`] | `Compare` / `RevertCompare` |
//! | Insertion | [`insertion_sort`] | `Compare` / `RevertCompare` |

mod algorithm;
mod array;
mod bubble;
mod event;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use algorithm::SortAlgorithm;
pub use array::{VALUE_MAX, VALUE_MIN, array_for, random_array};
pub use bubble::bubble_sort;
pub use event::{Stats, Trace, TraceEvent};
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
