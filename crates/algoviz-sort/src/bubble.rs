use crate::event::{Trace, TraceEvent};

/// Bubble sort with early exit after a pass without swaps.
pub fn bubble_sort(input: &[i32]) -> Trace {
    let mut events = Vec::new();
    let mut a = input.to_vec();
    let n = a.len();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            events.push(TraceEvent::Compare(j, j + 1));
            events.push(TraceEvent::RevertCompare(j, j + 1));
            if a[j] > a[j + 1] {
                events.push(TraceEvent::Swap {
                    i: j,
                    j: j + 1,
                    value_i: a[j + 1],
                    value_j: a[j],
                });
                a.swap(j, j + 1);
                swapped = true;
            }
        }
        events.push(TraceEvent::MarkDone(n - 1 - i));
        if !swapped {
            break;
        }
    }

    if n > 0 {
        events.push(TraceEvent::MarkDone(0));
    }
    Trace::new(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_three_four_one_two() {
        let input = [5, 3, 4, 1, 2];
        let t = bubble_sort(&input);
        assert_eq!(t.replay(&input), vec![1, 2, 3, 4, 5]);
        assert_eq!(input, [5, 3, 4, 1, 2]);
        assert_eq!(t.events.last(), Some(&TraceEvent::MarkDone(0)));
    }

    #[test]
    fn sorted_input_stops_after_one_pass() {
        let t = bubble_sort(&[1, 2, 3, 4]);
        let s = t.stats();
        assert_eq!(s.comparisons, 3);
        assert_eq!(s.swaps, 0);
        // 3 pairs, done(3), done(0)
        assert_eq!(s.steps, 3 * 2 + 2);
    }

    #[test]
    fn empty_and_single() {
        assert!(bubble_sort(&[]).is_empty());
        assert_eq!(bubble_sort(&[1]).events, vec![TraceEvent::MarkDone(0)]);
    }
}
