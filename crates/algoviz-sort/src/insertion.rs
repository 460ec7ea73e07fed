use crate::event::{Trace, TraceEvent};

/// Insertion sort.
///
/// Each shift of `a[j]` into `j + 1` is reported as a `Swap` of `(j + 1, j)`
/// that moves the shifted value up and the key down, so replaying swaps
/// alone walks the key down to its slot.
pub fn insertion_sort(input: &[i32]) -> Trace {
    let mut events = Vec::new();
    let mut a = input.to_vec();

    for i in 1..a.len() {
        let key = a[i];
        events.push(TraceEvent::MarkCurrent(i));
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            let (lo, hi) = (j - 1, j);
            events.push(TraceEvent::Compare(lo, hi));
            events.push(TraceEvent::RevertCompare(lo, hi));
            events.push(TraceEvent::Swap {
                i: hi,
                j: lo,
                value_i: a[lo],
                value_j: key,
            });
            a[hi] = a[lo];
            j -= 1;
        }
        a[j] = key;
        events.push(TraceEvent::MarkDone(i));
    }

    Trace::new(events)
}
