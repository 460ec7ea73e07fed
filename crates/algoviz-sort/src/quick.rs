use crate::event::{Trace, TraceEvent};

/// Quick sort with Lomuto partitioning around the last element.
pub fn quick_sort(input: &[i32]) -> Trace {
    let mut events = Vec::new();
    if input.len() <= 1 {
        return Trace::new(events);
    }
    let mut a = input.to_vec();
    let high = a.len() - 1;
    sort_range(&mut a, 0, high, &mut events);
    Trace::new(events)
}

fn sort_range(a: &mut [i32], low: usize, high: usize, events: &mut Vec<TraceEvent>) {
    if low >= high {
        return;
    }
    let p = partition(a, low, high, events);
    if p > low {
        sort_range(a, low, p - 1, events);
    }
    sort_range(a, p + 1, high, events);
}

fn partition(a: &mut [i32], low: usize, high: usize, events: &mut Vec<TraceEvent>) -> usize {
    let pivot = a[high];
    events.push(TraceEvent::MarkPivot(high));

    let mut i = low;
    for j in low..high {
        events.push(TraceEvent::Compare(j, high));
        events.push(TraceEvent::RevertCompare(j, high));
        if a[j] <= pivot {
            if i != j {
                swap(a, i, j, events);
            }
            i += 1;
        }
    }
    if i != high {
        swap(a, i, high, events);
    }

    events.push(TraceEvent::MarkDone(i));
    events.push(TraceEvent::RevertPivot(i));
    i
}

fn swap(a: &mut [i32], i: usize, j: usize, events: &mut Vec<TraceEvent>) {
    events.push(TraceEvent::Swap {
        i,
        j,
        value_i: a[j],
        value_j: a[i],
    });
    a.swap(i, j);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_pair_has_no_swap() {
        let t = quick_sort(&[1, 2]);
        assert_eq!(
            t.events,
            vec![
                TraceEvent::MarkPivot(1),
                TraceEvent::Compare(0, 1),
                TraceEvent::RevertCompare(0, 1),
                TraceEvent::MarkDone(1),
                TraceEvent::RevertPivot(1),
            ]
        );
    }

    #[test]
    fn reversed_pair_swaps_pivot_into_place() {
        let t = quick_sort(&[2, 1]);
        assert_eq!(
            t.events,
            vec![
                TraceEvent::MarkPivot(1),
                TraceEvent::Compare(0, 1),
                TraceEvent::RevertCompare(0, 1),
                TraceEvent::Swap {
                    i: 0,
                    j: 1,
                    value_i: 1,
                    value_j: 2,
                },
                TraceEvent::MarkDone(0),
                TraceEvent::RevertPivot(0),
            ]
        );
    }

    #[test]
    fn pivot_at_front_does_not_underflow() {
        let input = [5, 9, 8, 7, 1];
        let t = quick_sort(&input);
        assert_eq!(t.replay(&input), vec![1, 5, 7, 8, 9]);
        assert!(quick_sort(&[]).is_empty());
    }

    #[test]
    fn swaps_never_touch_one_index_twice() {
        let t = quick_sort(&[3, 3, 3, 1, 2, 3]);
        for ev in &t {
            if let TraceEvent::Swap { i, j, .. } = *ev {
                assert_ne!(i, j);
            }
        }
    }
}
