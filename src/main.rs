//! Catch The Eggs entry point
//!
//! Owns the frame loop: reads input, ticks the simulation at the configured
//! cadence and draws each frame to the terminal. `--demo` runs one round
//! headless with the autopilot and prints the final snapshot as JSON.

use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::{ExecutableCommand, cursor, terminal};

use catch_the_eggs::Settings;
use catch_the_eggs::consts::TARGET_DT;
use catch_the_eggs::platform::{FrameClock, InputMapper, compose_frame};
use catch_the_eggs::settings::SETTINGS_FILE;
use catch_the_eggs::sim::{
    GameEvent, GamePhase, GameState, Signal, SignalOutcome, TickInput, handle_signal, tick,
};

#[derive(Debug, Parser)]
#[command(name = "catch-the-eggs", about = "Catch the falling eggs before the clock runs out")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, default_value = SETTINGS_FILE)]
    settings: PathBuf,

    /// Base RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of chickens on the stick
    #[arg(long)]
    chickens: Option<u32>,

    /// Let the computer steer the basket
    #[arg(long)]
    autopilot: bool,

    /// Play one round headless and print the final state as JSON
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.demo {
        env_logger::init();
    } else {
        init_file_logger()?;
    }

    let mut settings = Settings::load_or_default(&args.settings)
        .with_context(|| format!("loading {}", args.settings.display()))?;
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(chickens) = args.chickens {
        settings.tuning.chicken_count = chickens;
    }
    settings.autopilot |= args.autopilot;
    settings.validate().context("invalid settings")?;

    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Catch The Eggs starting with seed {}", seed);
    let state = GameState::with_tuning(seed, settings.tuning.clone());

    if args.demo {
        run_demo(state)
    } else {
        run_terminal(state, &settings)
    }
}

/// Logging would corrupt the terminal frame, so interactive mode only logs
/// when RUST_LOG asks for it, and then into a file.
fn init_file_logger() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = std::fs::File::create("catch-the-eggs.log").context("creating log file")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// One autopilot round at a fixed timestep
fn run_demo(mut state: GameState) -> Result<()> {
    handle_signal(&mut state, Signal::Start);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut caught = 0usize;
    while state.phase == GamePhase::Playing {
        tick(&mut state, &input, TARGET_DT);
        caught += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ItemCaught { .. }))
            .count();
    }
    log::info!(
        "Demo finished after {} ticks: score {}, {} items caught",
        state.time_ticks,
        state.score,
        caught
    );

    let json = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{}", json);
    Ok(())
}

/// Puts the terminal into game mode and restores it on drop, including
/// on early returns and panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run_terminal(mut state: GameState, settings: &Settings) -> Result<()> {
    let mut out = stdout();
    let _guard = TerminalGuard::enter(&mut out)?;

    // Input thread: forwards terminal events to the frame loop
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let (mut cols, mut rows) = terminal::size().context("querying terminal size")?;
    let mut mapper = InputMapper::new(state.tuning.basket_speed, cols);
    let mut clock = FrameClock::new(settings.max_dt);
    let input = TickInput {
        idle_mode: settings.autopilot,
        ..Default::default()
    };
    let frame_interval = settings.frame_interval();

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(c, r) = ev {
                (cols, rows) = (c, r);
                mapper.cols = c;
                continue;
            }
            let Some(signal) = mapper.map_event(&ev, state.phase) else {
                continue;
            };
            match handle_signal(&mut state, signal) {
                SignalOutcome::Quit => {
                    log::info!("Quit requested");
                    return Ok(());
                }
                SignalOutcome::ResetClock => clock.reset(),
                SignalOutcome::Applied | SignalOutcome::Ignored => {}
            }
        }

        let dt = clock.delta();
        tick(&mut state, &input, dt);

        compose_frame(&state.snapshot(), cols, rows)
            .draw(&mut out)
            .context("drawing frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }
}
