use crate::event::{Trace, TraceEvent};

/// Top-down merge sort over a private copy of `input`.
///
/// Two buffers trade roles at every level, so each merge reads the sorted
/// halves from one and writes into the other. Every placement emits the
/// pair `Compare(i, j)`, `Compare(i, j)` followed by
/// `Overwrite { index: k, value }`; draining a leftover half uses
/// `Compare(i, i)` twice.
pub fn merge_sort(input: &[i32]) -> Trace {
    let mut events = Vec::new();
    if input.len() <= 1 {
        return Trace::new(events);
    }
    let mut main = input.to_vec();
    let mut aux = input.to_vec();
    let end = main.len() - 1;
    sort_into(&mut main, 0, end, &mut aux, &mut events);
    Trace::new(events)
}

/// Sort `[start, end]` into `main`, using `aux` as the source of the merge.
fn sort_into(main: &mut [i32], start: usize, end: usize, aux: &mut [i32], events: &mut Vec<TraceEvent>) {
    if start == end {
        return;
    }
    let middle = (start + end) / 2;
    sort_into(aux, start, middle, main, events);
    sort_into(aux, middle + 1, end, main, events);
    merge(main, start, middle, end, aux, events);
}

fn merge(main: &mut [i32], start: usize, middle: usize, end: usize, aux: &[i32], events: &mut Vec<TraceEvent>) {
    let mut k = start;
    let mut i = start;
    let mut j = middle + 1;

    while i <= middle && j <= end {
        events.push(TraceEvent::Compare(i, j));
        events.push(TraceEvent::Compare(i, j));
        let value = if aux[i] <= aux[j] {
            i += 1;
            aux[i - 1]
        } else {
            j += 1;
            aux[j - 1]
        };
        events.push(TraceEvent::Overwrite { index: k, value });
        main[k] = value;
        k += 1;
    }

    for idx in (i..=middle).chain(j..=end) {
        events.push(TraceEvent::Compare(idx, idx));
        events.push(TraceEvent::Compare(idx, idx));
        events.push(TraceEvent::Overwrite {
            index: k,
            value: aux[idx],
        });
        main[k] = aux[idx];
        k += 1;
    }
}
