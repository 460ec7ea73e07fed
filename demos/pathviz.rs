//! Terminal pathfinding visualizer.
//!
//! Run: cargo run --bin pathviz
//!
//! Keys: space pause, +/- speed, tab next algorithm, r replay, m maze,
//! w random walls, c clear walls, q quit.
//! Set `ALGOVIZ_LOG=debug` and redirect stderr to see engine logs.

use std::error::Error;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use algoviz_core::{Grid, VisualizerConfig};
use algoviz_demos::pathview::PathView;
use algoviz_demos::{Action, Keys, SPEED_STEP, Terminal, logger};
use algoviz_maze::{MazeGen, MazeStyle};
use algoviz_paths::{PathEvent, PathTrace, SearchAlgorithm};
use algoviz_playback::{Controller, Session, Speed};

struct Run {
    view: Arc<Mutex<PathView>>,
    session: Session,
}

fn start(ctl: &Controller, algorithm: SearchAlgorithm, grid: &Grid) -> Result<Run, Box<dyn Error>> {
    let result = algorithm.run(grid);
    if !result.is_reachable() {
        log::info!("{algorithm}: end is unreachable");
    }
    let trace = PathTrace::from_result(&result);
    let view = Arc::new(Mutex::new(PathView::new(algorithm, grid.clone())));
    let sink = Arc::clone(&view);
    let session = ctl.start(trace, ctl.speed(), move |ev: &PathEvent| {
        sink.lock().unwrap_or_else(PoisonError::into_inner).apply(ev);
    })?;
    Ok(Run { view, session })
}

fn restart(ctl: &Controller, run: Run, algorithm: SearchAlgorithm, grid: &Grid) -> Result<Run, Box<dyn Error>> {
    ctl.cancel();
    run.session.join();
    ctl.reset()?;
    start(ctl, algorithm, grid)
}

fn next_algorithm(a: SearchAlgorithm) -> SearchAlgorithm {
    let all = SearchAlgorithm::ALL;
    let i = all.iter().position(|&x| x == a).unwrap_or(0);
    all[(i + 1) % all.len()]
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let config = VisualizerConfig::default();
    config.validate()?;
    let keys = Keys::default();
    let ctl = Controller::new(Speed::new(config.speed_percent)?);
    let mut maze = MazeGen::with_grid(config.build_grid()?, rand::rng());

    let mut algorithm = SearchAlgorithm::Dijkstra;
    let mut term = Terminal::enter()?;
    let mut run = start(&ctl, algorithm, &maze.grid)?;

    loop {
        let status = format!(
            "{} at {}  [space] pause  [+/-] speed  [tab] next  [r] replay  [m] maze  [w] walls  [c] clear  [q] quit",
            ctl.state(),
            ctl.speed()
        );
        run.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .draw(&mut term, &status)?;

        let Some(code) = term.poll_key(Duration::from_millis(16))? else {
            continue;
        };
        let style = match keys.action(code) {
            Action::Quit => break,
            Action::TogglePause => {
                let _ = ctl.toggle_pause();
                continue;
            }
            Action::SpeedMore => {
                ctl.set_speed(ctl.speed().faster(SPEED_STEP));
                continue;
            }
            Action::SpeedLess => {
                ctl.set_speed(ctl.speed().slower(SPEED_STEP));
                continue;
            }
            Action::NextAlgorithm => {
                algorithm = next_algorithm(algorithm);
                None
            }
            Action::Restart => None,
            Action::Maze => Some(MazeStyle::RecursiveDivision),
            Action::RandomWalls => Some(MazeStyle::Random),
            Action::ClearWalls => Some(MazeStyle::Empty),
            Action::None => continue,
        };
        // Stop the replay before touching the grid it was generated from.
        ctl.cancel();
        if let Some(style) = style {
            maze.generate(style);
        }
        run = restart(&ctl, run, algorithm, &maze.grid)?;
    }

    ctl.cancel();
    run.session.join();
    Ok(())
}
