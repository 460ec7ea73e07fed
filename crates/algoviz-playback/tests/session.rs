//! Controller behaviour across whole sessions.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use algoviz_core::{Grid, Point};
use algoviz_paths::{PathEvent, PathTrace, SearchAlgorithm};
use algoviz_playback::{Controller, Outcome, PlaybackError, PlaybackState, Speed};
use algoviz_sort::{SortAlgorithm, Trace, TraceEvent};

fn sample_trace() -> Trace {
    SortAlgorithm::Quick.run(&[9, 4, 7, 1, 8, 2, 6, 3, 5])
}

/// Record every delivered event; the returned handle is read after `join`.
fn recorder<E: Copy + Send + 'static>() -> (Arc<Mutex<Vec<E>>>, impl FnMut(&E) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |e: &E| sink.lock().unwrap().push(*e))
}

#[test]
fn pause_and_resume_deliver_the_same_events() {
    let trace = sample_trace();
    let expected = trace.events.clone();
    assert!(expected.len() > 6);

    let ctl = Controller::default();
    let (seen, mut record) = recorder::<TraceEvent>();
    let pauser = ctl.clone();
    let mut count = 0;
    let session = ctl
        .start(trace, Speed::MAX, move |e: &TraceEvent| {
            record(e);
            count += 1;
            if count == 4 {
                pauser.pause().unwrap();
            }
        })
        .unwrap();

    // The worker parks at the next suspension point and delivers nothing.
    while ctl.progress().0 < 4 {
        thread::sleep(Duration::from_millis(1));
    }
    thread::sleep(Duration::from_millis(30));
    assert_eq!(ctl.state(), PlaybackState::Paused);
    assert_eq!(seen.lock().unwrap().len(), 4);
    assert_eq!(ctl.progress().0, 4);

    ctl.resume().unwrap();
    assert_eq!(session.join(), Outcome::Completed);
    assert_eq!(*seen.lock().unwrap(), expected);
}

#[test]
fn unpaused_run_matches_trace() {
    let trace = sample_trace();
    let expected = trace.events.clone();
    let ctl = Controller::default();
    let (seen, record) = recorder::<TraceEvent>();
    let outcome = ctl.start(trace, Speed::MAX, record).unwrap().join();
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(*seen.lock().unwrap(), expected);
}

#[test]
fn toggle_pause_round_trip() {
    let ctl = Controller::default();
    let toggler = ctl.clone();
    let (tx, rx) = mpsc::channel();
    let session = ctl
        .start(sample_trace(), Speed::MAX, move |_: &TraceEvent| {
            if let Ok(state) = toggler.toggle_pause() {
                tx.send(state).ok();
            }
        })
        .unwrap();
    assert_eq!(rx.recv().unwrap(), PlaybackState::Paused);
    assert_eq!(ctl.toggle_pause().unwrap(), PlaybackState::Running);
    // The next callback pauses again; clear it and let the run finish.
    assert_eq!(rx.recv().unwrap(), PlaybackState::Paused);
    ctl.cancel();
    assert!(matches!(session.join(), Outcome::Cancelled { .. }));
}

#[test]
fn cancel_stops_delivery() {
    let ctl = Controller::default();
    let (seen, mut record) = recorder::<TraceEvent>();
    let canceller = ctl.clone();
    let mut count = 0;
    let session = ctl
        .start(sample_trace(), Speed::MAX, move |e: &TraceEvent| {
            record(e);
            count += 1;
            if count == 3 {
                canceller.cancel();
            }
        })
        .unwrap();
    assert_eq!(session.join(), Outcome::Cancelled { delivered: 3 });
    thread::sleep(Duration::from_millis(10));
    assert_eq!(seen.lock().unwrap().len(), 3);
    assert_eq!(ctl.state(), PlaybackState::Cancelled);
}

#[test]
fn cancel_while_paused() {
    let ctl = Controller::default();
    let pauser = ctl.clone();
    let session = ctl
        .start(sample_trace(), Speed::MAX, move |_: &TraceEvent| {
            pauser.pause().ok();
        })
        .unwrap();
    while ctl.state() != PlaybackState::Paused {
        thread::sleep(Duration::from_millis(1));
    }
    assert!(ctl.cancel());
    assert_eq!(session.join(), Outcome::Cancelled { delivered: 1 });
}

#[test]
fn second_start_is_rejected_while_active() {
    let ctl = Controller::default();
    let pauser = ctl.clone();
    let session = ctl
        .start(sample_trace(), Speed::MAX, move |_: &TraceEvent| {
            pauser.pause().ok();
        })
        .unwrap();
    while ctl.state() != PlaybackState::Paused {
        thread::sleep(Duration::from_millis(1));
    }
    assert!(matches!(
        ctl.start(sample_trace(), Speed::MAX, |_| {}),
        Err(PlaybackError::AlreadyRunning)
    ));
    assert!(matches!(ctl.reset(), Err(PlaybackError::AlreadyRunning)));
    ctl.cancel();
    session.join();
}

#[test]
fn cancelled_worker_must_drain_before_restart() {
    let ctl = Controller::default();
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let session = ctl
        .start(sample_trace(), Speed::MAX, move |_: &TraceEvent| {
            entered_tx.send(()).ok();
            release_rx.recv().ok();
        })
        .unwrap();

    // First callback is in progress when the cancel lands.
    entered_rx.recv().unwrap();
    assert!(ctl.cancel());
    assert_eq!(ctl.state(), PlaybackState::Cancelled);
    assert!(matches!(
        ctl.start(sample_trace(), Speed::MAX, |_| {}),
        Err(PlaybackError::AlreadyRunning)
    ));

    release_tx.send(()).unwrap();
    assert_eq!(session.join(), Outcome::Cancelled { delivered: 1 });
    assert_eq!(ctl.wait_until_finished(), PlaybackState::Cancelled);

    let again = ctl.start(sample_trace(), Speed::MAX, |_| {}).unwrap();
    assert_eq!(again.join(), Outcome::Completed);
}

#[test]
fn reset_waits_for_cancelled_worker() {
    let ctl = Controller::default();
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);
    let session = ctl
        .start(sample_trace(), Speed::MAX, move |_: &TraceEvent| {
            *counter.lock().unwrap() += 1;
            entered_tx.send(()).ok();
            release_rx.recv().ok();
        })
        .unwrap();

    entered_rx.recv().unwrap();
    assert!(ctl.cancel());
    // The first callback is still running, so the controller cannot be
    // handed back to Idle underneath it.
    assert!(matches!(ctl.reset(), Err(PlaybackError::AlreadyRunning)));
    assert_eq!(ctl.state(), PlaybackState::Cancelled);

    drop(release_tx);
    assert_eq!(session.join(), Outcome::Cancelled { delivered: 1 });
    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(ctl.state(), PlaybackState::Cancelled);

    ctl.reset().unwrap();
    assert_eq!(ctl.state(), PlaybackState::Idle);
}

#[test]
fn pause_during_delay_holds_the_pending_event() {
    let expected: Vec<TraceEvent> = (0..3).map(TraceEvent::MarkDone).collect();
    let ctl = Controller::default();
    let (tx, rx) = mpsc::channel();
    let session = ctl
        .start(expected.clone(), Speed::MIN, move |e: &TraceEvent| {
            tx.send(*e).ok();
        })
        .unwrap();

    // The first event is delivered at once; the worker then sits in a
    // 100 ms delay.
    assert_eq!(rx.recv().unwrap(), expected[0]);
    ctl.pause().unwrap();

    // Well past the delay, nothing more arrives while paused.
    thread::sleep(Duration::from_millis(250));
    assert!(rx.try_recv().is_err());
    assert_eq!(ctl.progress().0, 1);
    assert_eq!(ctl.state(), PlaybackState::Paused);

    ctl.resume().unwrap();
    assert_eq!(rx.recv().unwrap(), expected[1]);
    assert_eq!(session.join(), Outcome::Completed);
    assert_eq!(rx.iter().collect::<Vec<_>>(), vec![expected[2]]);
}

#[test]
fn reset_returns_to_idle() {
    let ctl = Controller::default();
    ctl.start(sample_trace(), Speed::MAX, |_| {}).unwrap().join();
    assert_eq!(ctl.state(), PlaybackState::Completed);
    ctl.reset().unwrap();
    assert_eq!(ctl.state(), PlaybackState::Idle);
    assert_eq!(ctl.progress(), (0, 0));
    ctl.start(sample_trace(), Speed::MAX, |_| {}).unwrap().join();
    assert_eq!(ctl.state(), PlaybackState::Completed);
}

#[test]
fn completion_is_signalled_once() {
    let ctl = Controller::default();
    let session = ctl.start(sample_trace(), Speed::MAX, |_| {}).unwrap();
    assert_eq!(ctl.wait_until_finished(), PlaybackState::Completed);
    assert_eq!(session.join(), Outcome::Completed);
    // Nothing left to cancel.
    assert!(!ctl.cancel());
    assert_eq!(ctl.state(), PlaybackState::Completed);
}

#[test]
fn speed_change_mid_run() {
    let ctl = Controller::new(Speed::MIN);
    let speeder = ctl.clone();
    let session = ctl
        .start(sample_trace(), Speed::MIN, move |_: &TraceEvent| {
            speeder.set_speed(Speed::MAX);
        })
        .unwrap();
    // At 1% the whole trace would take seconds; after the first callback
    // every remaining delay is 1 ms.
    assert_eq!(session.join(), Outcome::Completed);
    assert_eq!(ctl.speed(), Speed::MAX);
}

#[test]
fn path_trace_replays_in_two_phases() {
    let grid = Grid::new(3, 4, Point::new(1, 0), Point::new(1, 3)).unwrap();
    let result = SearchAlgorithm::Astar.run(&grid);
    let trace = PathTrace::from_result(&result);
    let expected = trace.events.clone();

    let ctl = Controller::default();
    let (seen, record) = recorder::<PathEvent>();
    assert_eq!(ctl.start(trace, Speed::MAX, record).unwrap().join(), Outcome::Completed);
    let seen = seen.lock().unwrap();
    assert_eq!(*seen, expected);
    assert_eq!(
        seen.iter().filter(|e| matches!(e, PathEvent::Path(_))).count(),
        result.path.len()
    );
}
