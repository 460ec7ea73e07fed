use crate::event::{Trace, TraceEvent};

/// Selection sort. A swap is only emitted when a strictly smaller element
/// was found past `i`.
pub fn selection_sort(input: &[i32]) -> Trace {
    let mut events = Vec::new();
    let mut a = input.to_vec();
    let n = a.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        events.push(TraceEvent::MarkCurrentMin(i));
        for j in i + 1..n {
            events.push(TraceEvent::Compare(j, min));
            events.push(TraceEvent::RevertCompare(j, min));
            if a[j] < a[min] {
                min = j;
            }
        }
        if min != i {
            events.push(TraceEvent::Swap {
                i,
                j: min,
                value_i: a[min],
                value_j: a[i],
            });
            a.swap(i, min);
        }
        events.push(TraceEvent::MarkDone(i));
        events.push(TraceEvent::RevertCurrentMin(i));
    }

    if n > 0 {
        events.push(TraceEvent::MarkDone(n - 1));
    }
    Trace::new(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_is_just_done() {
        assert_eq!(selection_sort(&[7]).events, vec![TraceEvent::MarkDone(0)]);
        assert!(selection_sort(&[]).is_empty());
    }

    #[test]
    fn swap_only_when_smaller_found() {
        let t = selection_sort(&[1, 2, 3]);
        assert!(t.iter().all(|e| !e.is_value_carrying()));
        assert_eq!(t.stats().comparisons, 3);

        let t = selection_sort(&[3, 1, 2]);
        assert_eq!(
            t.events[..6],
            [
                TraceEvent::MarkCurrentMin(0),
                TraceEvent::Compare(1, 0),
                TraceEvent::RevertCompare(1, 0),
                TraceEvent::Compare(2, 1),
                TraceEvent::RevertCompare(2, 1),
                TraceEvent::Swap {
                    i: 0,
                    j: 1,
                    value_i: 1,
                    value_j: 3,
                },
            ]
        );
        assert_eq!(t.events.last(), Some(&TraceEvent::MarkDone(2)));
        assert_eq!(t.replay(&[3, 1, 2]), vec![1, 2, 3]);
    }
}
