use algoviz_core::Point;

use crate::SearchResult;

/// One step of a pathfinding replay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEvent {
    /// The search finalized this cell.
    Visit(Point),
    /// This cell lies on the reconstructed path.
    Path(Point),
}

impl PathEvent {
    /// The cell the event refers to.
    pub fn point(self) -> Point {
        match self {
            PathEvent::Visit(p) | PathEvent::Path(p) => p,
        }
    }
}

/// A replayable pathfinding run: every visit in order, then the path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathTrace {
    pub events: Vec<PathEvent>,
}

impl PathTrace {
    /// Build the two-phase trace of a finished search.
    pub fn from_result(result: &SearchResult) -> Self {
        let events = result
            .visited
            .iter()
            .map(|&p| PathEvent::Visit(p))
            .chain(result.path.iter().map(|&p| PathEvent::Path(p)))
            .collect();
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of `Visit` events.
    pub fn visited_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PathEvent::Visit(_)))
            .count()
    }

    /// Number of `Path` events.
    pub fn path_count(&self) -> usize {
        self.len() - self.visited_count()
    }
}

impl From<&SearchResult> for PathTrace {
    fn from(result: &SearchResult) -> Self {
        Self::from_result(result)
    }
}

impl IntoIterator for PathTrace {
    type Item = PathEvent;
    type IntoIter = std::vec::IntoIter<PathEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchAlgorithm;
    use algoviz_core::Grid;

    #[test]
    fn visits_come_before_path() {
        let g = Grid::new(3, 3, Point::new(0, 0), Point::new(0, 2)).unwrap();
        let r = SearchAlgorithm::Bfs.run(&g);
        let t = PathTrace::from_result(&r);
        assert_eq!(t.len(), r.visited.len() + r.path.len());
        assert_eq!(t.visited_count(), r.visited.len());
        assert_eq!(t.path_count(), 3);
        let first_path = t
            .events
            .iter()
            .position(|e| matches!(e, PathEvent::Path(_)))
            .unwrap();
        assert!(t.events[..first_path].iter().all(|e| matches!(e, PathEvent::Visit(_))));
        assert!(t.events[first_path..].iter().all(|e| matches!(e, PathEvent::Path(_))));
        assert_eq!(t.events[first_path].point(), g.start());
    }

    #[test]
    fn unreachable_trace_has_no_path_phase() {
        let mut g = Grid::new(1, 3, Point::new(0, 0), Point::new(0, 2)).unwrap();
        g.set_wall(Point::new(0, 1), true);
        let t = PathTrace::from(&SearchAlgorithm::Dijkstra.run(&g));
        assert_eq!(t.events, vec![PathEvent::Visit(Point::new(0, 0))]);
        assert_eq!(t.path_count(), 0);
    }
}
