//! The playback [`Controller`]: one paced worker thread per session,
//! steered from any thread through a shared handle.

use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::error::PlaybackError;
use crate::pace::Paced;
use crate::speed::Speed;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle of a [`Controller`].
///
/// `Idle → Running → {Paused ⇄ Running} → (Completed | Cancelled)`; a
/// terminal state goes back to `Idle` through [`Controller::reset`] or
/// straight to `Running` through [`Controller::start`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl PlaybackState {
    /// Running or paused.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, PlaybackState::Running | PlaybackState::Paused)
    }

    /// Completed or cancelled.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PlaybackState::Completed | PlaybackState::Cancelled)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Running => "running",
            PlaybackState::Paused => "paused",
            PlaybackState::Completed => "completed",
            PlaybackState::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every event was delivered.
    Completed,
    /// Cancelled after `delivered` events.
    Cancelled { delivered: usize },
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Inner {
    state: PlaybackState,
    speed: Speed,
    delivered: usize,
    total: usize,
    // A worker thread exists and has not returned yet.
    worker_live: bool,
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    // Signalled on every state or speed change.
    changed: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, Inner>) -> MutexGuard<'a, Inner> {
        self.changed
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Replays a trace at a controllable pace.
///
/// Cloning gives another handle to the same controller, so a render
/// callback may hold one to pause or cancel its own session. At most one
/// session is active at a time.
#[derive(Clone, Debug)]
pub struct Controller {
    shared: Arc<Shared>,
}

impl Controller {
    /// Create an idle controller.
    pub fn new(speed: Speed) -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: PlaybackState::Idle,
                    speed,
                    delivered: 0,
                    total: 0,
                    worker_live: false,
                }),
                changed: Condvar::new(),
            }),
        }
    }

    /// Begin replaying `trace` on a worker thread, handing each event to
    /// `on_event` in order.
    ///
    /// Allowed from `Idle`, `Completed` and `Cancelled`. Fails with
    /// [`PlaybackError::AlreadyRunning`] while a session is active or a
    /// cancelled worker is still inside its last callback.
    pub fn start<I, E, F>(&self, trace: I, speed: Speed, mut on_event: F) -> Result<Session, PlaybackError>
    where
        I: IntoIterator<Item = E>,
        E: Paced + Send + 'static,
        F: FnMut(&E) + Send + 'static,
    {
        let events: Vec<E> = trace.into_iter().collect();
        {
            let mut g = self.shared.lock();
            if g.state.is_active() || g.worker_live {
                return Err(PlaybackError::AlreadyRunning);
            }
            g.state = PlaybackState::Running;
            g.speed = speed;
            g.delivered = 0;
            g.total = events.len();
            g.worker_live = true;
        }
        log::info!("playback started: {} events at {speed}", events.len());

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("algoviz-playback".into())
            .spawn(move || {
                let _guard = WorkerGuard(Arc::clone(&shared));
                play(&shared, events, &mut on_event)
            });

        match spawned {
            Ok(handle) => Ok(Session { handle }),
            Err(e) => {
                let mut g = self.shared.lock();
                g.state = PlaybackState::Idle;
                g.worker_live = false;
                Err(PlaybackError::Spawn(e))
            }
        }
    }

    /// Stop delivering events until [`resume`](Self::resume). Pausing a
    /// paused session is a no-op.
    pub fn pause(&self) -> Result<(), PlaybackError> {
        self.transition(PlaybackState::Running, PlaybackState::Paused)
    }

    /// Continue a paused session with the event that was pending.
    pub fn resume(&self) -> Result<(), PlaybackError> {
        self.transition(PlaybackState::Paused, PlaybackState::Running)
    }

    /// Flip between running and paused. Returns the new state.
    pub fn toggle_pause(&self) -> Result<PlaybackState, PlaybackError> {
        let mut g = self.shared.lock();
        let next = match g.state {
            PlaybackState::Running => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Running,
            _ => return Err(PlaybackError::NotActive),
        };
        g.state = next;
        drop(g);
        self.shared.changed.notify_all();
        log::info!("playback {next}");
        Ok(next)
    }

    fn transition(&self, from: PlaybackState, to: PlaybackState) -> Result<(), PlaybackError> {
        let mut g = self.shared.lock();
        if g.state == to {
            return Ok(());
        }
        if g.state != from {
            return Err(PlaybackError::NotActive);
        }
        g.state = to;
        drop(g);
        self.shared.changed.notify_all();
        log::info!("playback {to}");
        Ok(())
    }

    /// Stop an active session. The pending delay is abandoned and no
    /// further callbacks happen; a callback already in progress runs to
    /// completion. Returns whether a session was cancelled.
    pub fn cancel(&self) -> bool {
        let mut g = self.shared.lock();
        if !g.state.is_active() {
            return false;
        }
        g.state = PlaybackState::Cancelled;
        let delivered = g.delivered;
        drop(g);
        self.shared.changed.notify_all();
        log::info!("playback cancelled after {delivered} events");
        true
    }

    /// Change the pace. Takes effect from the next delay; a delay already
    /// under way keeps its length.
    pub fn set_speed(&self, speed: Speed) {
        self.shared.lock().speed = speed;
        self.shared.changed.notify_all();
    }

    /// Return a finished controller to `Idle`.
    ///
    /// Fails with [`PlaybackError::AlreadyRunning`] while a session is
    /// active or a cancelled worker is still inside its last callback, so
    /// the worker can never observe a state other than `Cancelled`.
    pub fn reset(&self) -> Result<(), PlaybackError> {
        let mut g = self.shared.lock();
        if g.state.is_active() || g.worker_live {
            return Err(PlaybackError::AlreadyRunning);
        }
        g.state = PlaybackState::Idle;
        g.delivered = 0;
        g.total = 0;
        Ok(())
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.lock().state
    }

    pub fn speed(&self) -> Speed {
        self.shared.lock().speed
    }

    /// `(delivered, total)` events of the current or last session.
    pub fn progress(&self) -> (usize, usize) {
        let g = self.shared.lock();
        (g.delivered, g.total)
    }

    /// Block until the controller leaves `Running` and `Paused`, returning
    /// the state it settled in.
    pub fn wait_until_finished(&self) -> PlaybackState {
        let mut g = self.shared.lock();
        while g.state.is_active() || g.worker_live {
            g = self.shared.wait(g);
        }
        g.state
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Handle to one playback session. Dropping it detaches the worker.
#[derive(Debug)]
pub struct Session {
    handle: JoinHandle<Outcome>,
}

impl Session {
    /// Wait for the session to end.
    ///
    /// A panic raised by the render callback is propagated to the caller.
    pub fn join(self) -> Outcome {
        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Whether the worker has returned.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

// ---------------------------------------------------------------------------
// Worker
// ---------------------------------------------------------------------------

/// Clears `worker_live` however the worker exits, including by panic.
struct WorkerGuard(Arc<Shared>);

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        let mut g = self.0.lock();
        if g.state.is_active() {
            // Only reachable when the callback panicked.
            g.state = PlaybackState::Cancelled;
        }
        g.worker_live = false;
        drop(g);
        self.0.changed.notify_all();
    }
}

fn play<E: Paced>(shared: &Shared, events: Vec<E>, on_event: &mut impl FnMut(&E)) -> Outcome {
    let last = events.len().saturating_sub(1);
    for (n, ev) in events.iter().enumerate() {
        // Suspension point: hold while paused, bail out on cancel.
        {
            let mut g = shared.lock();
            while g.state == PlaybackState::Paused {
                g = shared.wait(g);
            }
            if g.state == PlaybackState::Cancelled {
                return Outcome::Cancelled { delivered: g.delivered };
            }
        }

        on_event(ev);
        log::trace!("delivered event {n}");

        let delay = {
            let mut g = shared.lock();
            g.delivered += 1;
            if g.state == PlaybackState::Cancelled {
                return Outcome::Cancelled { delivered: g.delivered };
            }
            ev.delay(g.speed)
        };
        if n == last {
            break;
        }

        // Inter-event delay; only cancellation cuts it short.
        let deadline = Instant::now() + delay;
        let mut g = shared.lock();
        loop {
            if g.state == PlaybackState::Cancelled {
                return Outcome::Cancelled { delivered: g.delivered };
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            g = shared
                .changed
                .wait_timeout(g, deadline - now)
                .map(|(g, _)| g)
                .unwrap_or_else(|e| e.into_inner().0);
        }
    }

    let mut g = shared.lock();
    if g.state == PlaybackState::Cancelled {
        return Outcome::Cancelled { delivered: g.delivered };
    }
    g.state = PlaybackState::Completed;
    log::info!("playback completed: {} events", g.delivered);
    Outcome::Completed
}
