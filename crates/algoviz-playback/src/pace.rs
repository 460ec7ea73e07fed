use std::time::Duration;

use algoviz_paths::PathEvent;
use algoviz_sort::TraceEvent;

use crate::Speed;

/// Fixed delay between the cells of a path once the search phase is over.
pub const PATH_STEP_DELAY: Duration = Duration::from_millis(80);

/// An event the [`Controller`](crate::Controller) can replay.
///
/// The default delay follows the playback speed; an event kind may override
/// it to keep its own cadence.
pub trait Paced {
    fn delay(&self, speed: Speed) -> Duration {
        speed.delay()
    }
}

impl Paced for TraceEvent {}

impl Paced for PathEvent {
    fn delay(&self, speed: Speed) -> Duration {
        match self {
            PathEvent::Visit(_) => speed.delay(),
            PathEvent::Path(_) => PATH_STEP_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Point;

    #[test]
    fn path_phase_ignores_speed() {
        let p = PathEvent::Path(Point::ZERO);
        assert_eq!(p.delay(Speed::MIN), PATH_STEP_DELAY);
        assert_eq!(p.delay(Speed::MAX), PATH_STEP_DELAY);
        assert_eq!(PathEvent::Visit(Point::ZERO).delay(Speed::MAX), Speed::MAX.delay());
    }

    #[test]
    fn sort_events_follow_speed() {
        let s = Speed::new(91).unwrap();
        assert_eq!(TraceEvent::MarkDone(0).delay(s), Duration::from_millis(10));
    }
}
