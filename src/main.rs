//! Bug Crossing entry point
//!
//! Runs the game in the terminal, or headless for a fixed number of ticks
//! (printing the final state as JSON).

mod term;

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use bug_crossing::Settings;
use bug_crossing::input::{direction_from_key_name, queue_key_name};
use bug_crossing::render::{DrawList, render};
use bug_crossing::sim::{Direction, GameEvent, GameState, TickInput, tick};

use term::{TerminalView, TextFrame};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// RNG seed (overrides the config file; defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Run without a terminal and print the final state
    #[arg(long)]
    headless: bool,
    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Seconds per frame in headless mode (capped at the `max_frame_dt` setting)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Comma-separated key names fed one per frame in headless mode
    #[arg(long, value_name = "KEYS")]
    keys: Option<String>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Keep the terminal clean unless RUST_LOG asks for more
    let default_filter = if args.headless { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);

    if args.headless {
        run_headless(&args, seed, settings)
    } else {
        run_terminal(seed, settings)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Collision { .. } | GameEvent::GoalReached { .. } => {
            log::info!("{:?}", event)
        }
        _ => log::debug!("{:?}", event),
    }
}

/// The fixed headless step, warning if `requested` had to be capped
fn headless_dt(settings: &Settings, requested: f32) -> f32 {
    let dt = settings.clamp_dt(requested);
    if dt != requested {
        log::warn!(
            "--dt {} is outside [0, {}]; stepping by {} instead",
            requested,
            settings.max_frame_dt,
            dt
        );
    }
    dt
}

fn run_headless(args: &CliArgs, seed: u64, settings: Settings) -> Result<()> {
    let dt = headless_dt(&settings, args.dt);
    let keys: Vec<String> = args
        .keys
        .as_deref()
        .map(|k| k.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    let mut state = GameState::new(seed, settings);
    let mut input = TickInput::default();

    for frame in 0..args.ticks {
        input.clear();
        if let Some(key) = keys.get(frame as usize) {
            queue_key_name(&mut input, key);
        }
        tick(&mut state, &input, dt);
        for event in state.drain_events() {
            log_event(&event);
        }
    }

    let json = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{}", json);
    Ok(())
}

fn run_terminal(seed: u64, settings: Settings) -> Result<()> {
    let mut view = TerminalView::new();
    view.enter()?;

    let result = game_loop(&mut view, seed, settings);

    // Always try to restore terminal state.
    let _ = view.exit();
    result
}

/// What a key press asks for
enum KeyAction {
    Move(Direction),
    Pause,
    Quit,
}

fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    let name = match key.code {
        KeyCode::Char('p') => return Some(KeyAction::Pause),
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        KeyCode::Left => "left".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };
    direction_from_key_name(&name).map(KeyAction::Move)
}

fn game_loop(view: &mut TerminalView, seed: u64, settings: Settings) -> Result<()> {
    let frame_period = Duration::from_millis(settings.frame_ms);
    let mut state = GameState::new(seed, settings);
    let mut input = TickInput::default();
    let mut draw_list = DrawList::new();
    let mut last_frame = Instant::now();

    loop {
        // Collect keys until the next frame is due
        let timeout = frame_period
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key_action(key) {
                        Some(KeyAction::Move(direction)) => input.moves.push(direction),
                        Some(KeyAction::Pause) => input.pause = !input.pause,
                        Some(KeyAction::Quit) => return Ok(()),
                        None => {}
                    }
                }
            }
            if last_frame.elapsed() < frame_period {
                continue;
            }
        }

        let dt = state.settings.clamp_dt(last_frame.elapsed().as_secs_f32());
        last_frame = Instant::now();

        tick(&mut state, &input, dt);
        input.clear();
        for event in state.drain_events() {
            log_event(&event);
        }

        draw_list.clear();
        render(&state, &mut draw_list);
        let frame = TextFrame::rasterize(&draw_list);
        view.draw(&frame, state.stars.count, &state.stats, state.phase)?;
    }
}
