use std::fmt;

// ---------------------------------------------------------------------------
// TraceEvent
// ---------------------------------------------------------------------------

/// One discrete step of a sorting run.
///
/// Only [`Swap`](TraceEvent::Swap) and [`Overwrite`](TraceEvent::Overwrite)
/// carry values; every other variant is a rendering annotation and never
/// changes the array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    /// The values at both indices are being examined.
    Compare(usize, usize),
    /// Clear the comparison highlight.
    RevertCompare(usize, usize),
    /// After this event `a[i] == value_i` and `a[j] == value_j`.
    Swap {
        i: usize,
        j: usize,
        value_i: i32,
        value_j: i32,
    },
    /// Merge placement: after this event `a[index] == value`.
    Overwrite { index: usize, value: i32 },
    MarkPivot(usize),
    MarkCurrent(usize),
    MarkCurrentMin(usize),
    MarkDone(usize),
    RevertPivot(usize),
    RevertCurrentMin(usize),
}

impl TraceEvent {
    /// Whether applying the event changes the array.
    #[inline]
    pub fn is_value_carrying(&self) -> bool {
        matches!(self, TraceEvent::Swap { .. } | TraceEvent::Overwrite { .. })
    }

    /// Indices touched by the event. The second slot is `None` for
    /// single-index events.
    pub fn indices(&self) -> (usize, Option<usize>) {
        match *self {
            TraceEvent::Compare(i, j) | TraceEvent::RevertCompare(i, j) => (i, Some(j)),
            TraceEvent::Swap { i, j, .. } => (i, Some(j)),
            TraceEvent::Overwrite { index, .. }
            | TraceEvent::MarkPivot(index)
            | TraceEvent::MarkCurrent(index)
            | TraceEvent::MarkCurrentMin(index)
            | TraceEvent::MarkDone(index)
            | TraceEvent::RevertPivot(index)
            | TraceEvent::RevertCurrentMin(index) => (index, None),
        }
    }

    /// Apply a value-carrying event to `values`. Annotations are ignored.
    ///
    /// # Panics
    /// If an index is out of bounds for `values`.
    #[inline]
    pub fn apply(&self, values: &mut [i32]) {
        match *self {
            TraceEvent::Swap {
                i,
                j,
                value_i,
                value_j,
            } => {
                values[i] = value_i;
                values[j] = value_j;
            }
            TraceEvent::Overwrite { index, value } => values[index] = value,
            _ => {}
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TraceEvent::Compare(i, j) => write!(f, "compare {i} {j}"),
            TraceEvent::RevertCompare(i, j) => write!(f, "revert-compare {i} {j}"),
            TraceEvent::Swap {
                i,
                j,
                value_i,
                value_j,
            } => write!(f, "swap {i}={value_i} {j}={value_j}"),
            TraceEvent::Overwrite { index, value } => write!(f, "overwrite {index}={value}"),
            TraceEvent::MarkPivot(i) => write!(f, "pivot {i}"),
            TraceEvent::MarkCurrent(i) => write!(f, "current {i}"),
            TraceEvent::MarkCurrentMin(i) => write!(f, "current-min {i}"),
            TraceEvent::MarkDone(i) => write!(f, "done {i}"),
            TraceEvent::RevertPivot(i) => write!(f, "revert-pivot {i}"),
            TraceEvent::RevertCurrentMin(i) => write!(f, "revert-current-min {i}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Counters shown next to a sorting replay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Comparisons performed. A merge comparison emits two `Compare`
    /// events in a row and counts once.
    pub comparisons: usize,
    /// Value-carrying events.
    pub swaps: usize,
    /// Events of any kind.
    pub steps: usize,
}

impl Stats {
    /// Count `ev`, given the event delivered just before it.
    ///
    /// A `Compare` that repeats the previous event is not counted again.
    /// Merge traces are built from `Compare, Compare, Overwrite` triples,
    /// so this counts exactly the first event of every triple. The other
    /// algorithms follow each `Compare` with its `RevertCompare` and never
    /// repeat one, so all of their compares count.
    pub fn observe(&mut self, prev: Option<&TraceEvent>, ev: &TraceEvent) {
        match ev {
            TraceEvent::Compare(..) if prev != Some(ev) => self.comparisons += 1,
            TraceEvent::Swap { .. } | TraceEvent::Overwrite { .. } => self.swaps += 1,
            _ => {}
        }
        self.steps += 1;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}  swaps: {}  steps: {}",
            self.comparisons, self.swaps, self.steps
        )
    }
}

// ---------------------------------------------------------------------------
// Trace
// ---------------------------------------------------------------------------

/// The complete, ordered record of one sorting run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new(events: Vec<TraceEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Replay the value-carrying events over a copy of `input`.
    ///
    /// For a trace produced from `input`, the result is `input` sorted in
    /// non-decreasing order.
    pub fn replay(&self, input: &[i32]) -> Vec<i32> {
        let mut values = input.to_vec();
        for ev in self.events.iter().filter(|e| e.is_value_carrying()) {
            ev.apply(&mut values);
        }
        values
    }

    /// Counters for the whole trace.
    pub fn stats(&self) -> Stats {
        self.stats_until(self.events.len())
    }

    /// Counters after the first `n` events have been delivered.
    pub fn stats_until(&self, n: usize) -> Stats {
        let mut stats = Stats::default();
        let mut prev: Option<&TraceEvent> = None;
        for ev in self.events.iter().take(n) {
            stats.observe(prev, ev);
            prev = Some(ev);
        }
        stats
    }
}

impl From<Vec<TraceEvent>> for Trace {
    fn from(events: Vec<TraceEvent>) -> Self {
        Self::new(events)
    }
}

impl IntoIterator for Trace {
    type Item = TraceEvent;
    type IntoIter = std::vec::IntoIter<TraceEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
