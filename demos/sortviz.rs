//! Terminal sorting visualizer.
//!
//! Run: cargo run --bin sortviz -- [array_size] [speed_percent]
//!
//! Keys: space pause, +/- speed, tab next algorithm, r new array, q quit.
//! Set `ALGOVIZ_LOG=debug` and redirect stderr to see engine logs.

use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use algoviz_core::VisualizerConfig;
use algoviz_demos::sortview::SortView;
use algoviz_demos::{Action, Keys, SPEED_STEP, Terminal, logger};
use algoviz_playback::{Controller, PlaybackState, Session, Speed};
use algoviz_sort::{SortAlgorithm, TraceEvent, random_array};

struct Run {
    view: Arc<Mutex<SortView>>,
    session: Session,
}

fn start(ctl: &Controller, algorithm: SortAlgorithm, values: &[i32]) -> Result<Run, Box<dyn Error>> {
    let trace = algorithm.run(values);
    let view = Arc::new(Mutex::new(SortView::new(algorithm, values.to_vec(), trace.len())));
    let sink = Arc::clone(&view);
    let session = ctl.start(trace, ctl.speed(), move |ev: &TraceEvent| {
        sink.lock().unwrap_or_else(PoisonError::into_inner).apply(ev);
    })?;
    Ok(Run { view, session })
}

fn restart(ctl: &Controller, run: Run, algorithm: SortAlgorithm, values: &[i32]) -> Result<Run, Box<dyn Error>> {
    ctl.cancel();
    run.session.join();
    ctl.reset()?;
    start(ctl, algorithm, values)
}

fn next_algorithm(a: SortAlgorithm) -> SortAlgorithm {
    let all = SortAlgorithm::ALL;
    let i = all.iter().position(|&x| x == a).unwrap_or(0);
    all[(i + 1) % all.len()]
}

fn config_from_args() -> Result<VisualizerConfig, Box<dyn Error>> {
    let mut config = VisualizerConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(size) = args.next() {
        config.array_size = size.parse()?;
    }
    if let Some(speed) = args.next() {
        config.speed_percent = speed.parse()?;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let config = config_from_args()?;
    let keys = Keys::default();
    let mut rng = rand::rng();
    let ctl = Controller::new(Speed::new(config.speed_percent)?);

    let mut algorithm = SortAlgorithm::Merge;
    let mut values = random_array(config.array_size, &mut rng);
    let mut term = Terminal::enter()?;
    let mut run = start(&ctl, algorithm, &values)?;

    loop {
        let state = ctl.state();
        let status = format!(
            "{state} at {}  [space] pause  [+/-] speed  [tab] next  [r] new array  [q] quit",
            ctl.speed()
        );
        {
            let mut view = run.view.lock().unwrap_or_else(PoisonError::into_inner);
            if state == PlaybackState::Completed {
                view.finish();
            }
            view.draw(&mut term, &status)?;
        }

        let Some(code) = term.poll_key(Duration::from_millis(16))? else {
            continue;
        };
        match keys.action(code) {
            Action::Quit => break,
            Action::TogglePause => {
                // Nothing to pause once the run is over.
                let _ = ctl.toggle_pause();
            }
            Action::SpeedMore => ctl.set_speed(ctl.speed().faster(SPEED_STEP)),
            Action::SpeedLess => ctl.set_speed(ctl.speed().slower(SPEED_STEP)),
            Action::NextAlgorithm => {
                algorithm = next_algorithm(algorithm);
                run = restart(&ctl, run, algorithm, &values)?;
            }
            Action::Restart => {
                values = random_array(config.array_size, &mut rng);
                run = restart(&ctl, run, algorithm, &values)?;
            }
            _ => {}
        }
    }

    ctl.cancel();
    run.session.join();
    Ok(())
}
