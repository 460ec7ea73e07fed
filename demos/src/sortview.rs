//! Bar-chart model for the sorting demo.

use std::io;

use algoviz_sort::{SortAlgorithm, Stats, TraceEvent, VALUE_MAX};
use crossterm::style::Color;

use crate::term::Terminal;

const COL_PRIMARY: Color = Color::Rgb { r: 100, g: 140, b: 230 };
const COL_COMPARING: Color = Color::Rgb { r: 239, g: 68, b: 68 };
const COL_SWAPPING: Color = Color::Rgb { r: 245, g: 158, b: 11 };
const COL_PIVOT: Color = Color::Rgb { r: 168, g: 85, b: 247 };
const COL_CURRENT: Color = Color::Rgb { r: 236, g: 72, b: 153 };
const COL_SORTED: Color = Color::Rgb { r: 34, g: 197, b: 94 };
const COL_TEXT: Color = Color::Rgb { r: 200, g: 200, b: 200 };

/// Highlight of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Normal,
    Comparing,
    Swapping,
    Pivot,
    Current,
    Sorted,
}

impl Mark {
    fn color(self) -> Color {
        match self {
            Mark::Normal => COL_PRIMARY,
            Mark::Comparing => COL_COMPARING,
            Mark::Swapping => COL_SWAPPING,
            Mark::Pivot => COL_PIVOT,
            Mark::Current => COL_CURRENT,
            Mark::Sorted => COL_SORTED,
        }
    }
}

/// The array as the viewer currently sees it.
#[derive(Debug, Clone)]
pub struct SortView {
    pub algorithm: SortAlgorithm,
    pub values: Vec<i32>,
    pub marks: Vec<Mark>,
    pub stats: Stats,
    pub total_steps: usize,
    last: Option<TraceEvent>,
    // cells touched by the previous swap, reset on the next event
    flashed: Vec<usize>,
}

impl SortView {
    pub fn new(algorithm: SortAlgorithm, values: Vec<i32>, total_steps: usize) -> Self {
        let n = values.len();
        Self {
            algorithm,
            values,
            marks: vec![Mark::Normal; n],
            stats: Stats::default(),
            total_steps,
            last: None,
            flashed: Vec::new(),
        }
    }

    /// Fold one delivered event into the view.
    pub fn apply(&mut self, ev: &TraceEvent) {
        for i in self.flashed.drain(..) {
            if self.marks[i] == Mark::Swapping {
                self.marks[i] = Mark::Normal;
            }
        }
        ev.apply(&mut self.values);
        match *ev {
            TraceEvent::Compare(i, j) => {
                self.marks[i] = Mark::Comparing;
                self.marks[j] = Mark::Comparing;
            }
            TraceEvent::RevertCompare(i, j) => {
                self.unmark(i);
                self.unmark(j);
            }
            TraceEvent::Swap { i, j, .. } => {
                self.marks[i] = Mark::Swapping;
                self.marks[j] = Mark::Swapping;
                self.flashed.extend([i, j]);
            }
            TraceEvent::Overwrite { index, .. } => {
                // Merge compares come in pairs with no revert.
                if let Some(TraceEvent::Compare(a, b)) = self.last {
                    self.unmark(a);
                    self.unmark(b);
                }
                self.marks[index] = Mark::Swapping;
                self.flashed.push(index);
            }
            TraceEvent::MarkPivot(i) => self.marks[i] = Mark::Pivot,
            TraceEvent::MarkCurrent(i) | TraceEvent::MarkCurrentMin(i) => self.marks[i] = Mark::Current,
            TraceEvent::MarkDone(i) => self.marks[i] = Mark::Sorted,
            TraceEvent::RevertPivot(i) | TraceEvent::RevertCurrentMin(i) => self.unmark(i),
        }
        self.stats.observe(self.last.as_ref(), ev);
        self.last = Some(*ev);
    }

    /// Paint everything green once playback completed.
    pub fn finish(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = Mark::Sorted);
    }

    fn unmark(&mut self, i: usize) {
        if self.marks[i] != Mark::Sorted {
            self.marks[i] = Mark::Normal;
        }
    }

    /// Draw bars on the rows above `status_rows` lines of status text.
    pub fn draw(&self, term: &mut Terminal, status: &str) -> io::Result<()> {
        let (cols, rows) = term.size()?;
        let height = rows.saturating_sub(3).max(1) as i32;
        term.clear()?;
        for (x, (&v, &mark)) in self.values.iter().zip(&self.marks).enumerate() {
            if x >= cols as usize {
                break;
            }
            let bar = ((v * height) / VALUE_MAX).max(1);
            for y in 0..bar {
                term.put(x as u16, (height - 1 - y) as u16, mark.color(), "█")?;
            }
        }
        let header = format!(
            "{} {}  step {}/{}  {}",
            self.algorithm,
            self.algorithm.complexity(),
            self.stats.steps,
            self.total_steps,
            self.stats
        );
        term.put(0, height as u16 + 1, COL_TEXT, &header)?;
        term.put(0, height as u16 + 2, COL_TEXT, status)?;
        term.flush()
    }
}
