//! Grid model for the pathfinding demo.

use std::io;

use algoviz_core::{Grid, Point};
use algoviz_paths::{PathEvent, SearchAlgorithm};
use crossterm::style::Color;

use crate::term::Terminal;

const COL_OPEN: Color = Color::Rgb { r: 60, g: 60, b: 80 };
const COL_WALL: Color = Color::Rgb { r: 160, g: 160, b: 180 };
const COL_START: Color = Color::Rgb { r: 34, g: 197, b: 94 };
const COL_END: Color = Color::Rgb { r: 239, g: 68, b: 68 };
const COL_VISITED: Color = Color::Rgb { r: 59, g: 130, b: 246 };
const COL_PATH: Color = Color::Rgb { r: 250, g: 204, b: 21 };
const COL_TEXT: Color = Color::Rgb { r: 200, g: 200, b: 200 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    None,
    Visited,
    Path,
}

/// The grid plus what the replay has revealed so far.
#[derive(Debug, Clone)]
pub struct PathView {
    pub algorithm: SearchAlgorithm,
    pub grid: Grid,
    pub marks: Vec<Mark>,
    pub visited: usize,
    pub path: usize,
}

impl PathView {
    pub fn new(algorithm: SearchAlgorithm, grid: Grid) -> Self {
        let n = grid.len();
        Self {
            algorithm,
            grid,
            marks: vec![Mark::None; n],
            visited: 0,
            path: 0,
        }
    }

    pub fn apply(&mut self, ev: &PathEvent) {
        let Some(i) = self.grid.index(ev.point()) else {
            return;
        };
        match ev {
            PathEvent::Visit(_) => {
                self.marks[i] = Mark::Visited;
                self.visited += 1;
            }
            PathEvent::Path(_) => {
                self.marks[i] = Mark::Path;
                self.path += 1;
            }
        }
    }

    fn glyph(&self, p: Point) -> (Color, &'static str) {
        if p == self.grid.start() {
            return (COL_START, "SS");
        }
        if p == self.grid.end() {
            return (COL_END, "EE");
        }
        if self.grid.is_wall(p) {
            return (COL_WALL, "██");
        }
        match self.grid.index(p).map(|i| self.marks[i]) {
            Some(Mark::Path) => (COL_PATH, "██"),
            Some(Mark::Visited) => (COL_VISITED, "▒▒"),
            _ => (COL_OPEN, "··"),
        }
    }

    pub fn draw(&self, term: &mut Terminal, status: &str) -> io::Result<()> {
        term.clear()?;
        for p in self.grid.bounds() {
            let (color, glyph) = self.glyph(p);
            term.put(p.col as u16 * 2, p.row as u16, color, glyph)?;
        }
        let row = self.grid.rows() as u16 + 1;
        let header = format!(
            "{} {}  visited: {}  path: {}",
            self.algorithm,
            self.algorithm.complexity(),
            self.visited,
            self.path.saturating_sub(1)
        );
        term.put(0, row, COL_TEXT, &header)?;
        term.put(0, row + 1, COL_TEXT, status)?;
        term.flush()
    }
}
