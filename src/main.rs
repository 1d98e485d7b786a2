//! Blockfall terminal runner (default binary).
//!
//! Runs one session: the game loop and the melody sequencer on a
//! single-threaded runtime, a terminal standing in for the display and
//! buttons, and the speaker backend picked by `Speaker::open`.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use log::{info, warn};

use blockfall::engine::{self, EngineConfig, Layout, SessionReport, TokioClock};
use blockfall::input::{KeyboardInput, QuitHandle};
use blockfall::sound::Speaker;
use blockfall::term::TerminalRenderer;
use blockfall::types::hal::{Audio, Clock};
use blockfall::types::{FIELD_COLS, FIELD_ROWS};

/// How often the quit watcher looks at the quit flag.
const QUIT_POLL_MS: u32 = 50;

fn main() -> Result<()> {
    let config = EngineConfig::from_env()?;
    init_logging(&config)?;
    info!("starting with {config:?}");

    let display = Layout::for_field(FIELD_ROWS, FIELD_COLS).display();
    if let Ok((w, h)) = crossterm::terminal::size() {
        // Two grid rows per terminal line.
        if w < display.width || h < display.height.div_ceil(2) {
            warn!("terminal is {w}x{h}, the display needs {}x{}", display.width, display.height.div_ceil(2));
        }
    }

    let mut speaker = Speaker::open(config.audio_enabled);
    let mut input = KeyboardInput::new();
    let quit = input.quit_handle();

    let mut term = TerminalRenderer::new(display.width, display.height);
    term.enter()?;

    let result = run(&config, &mut term, &mut input, &mut speaker, &quit);

    // Always try to silence the speaker and restore terminal state.
    speaker.set_volume(false);
    let _ = term.exit();

    match result? {
        Some(report) => println!(
            "Game over. Score {} ({} lines, {} pieces)",
            report.game.score, report.game.lines_cleared, report.game.pieces_locked
        ),
        None => println!("Quit."),
    }
    Ok(())
}

/// Play until the session ends on its own (`Some`) or the player quits (`None`).
fn run(
    config: &EngineConfig,
    term: &mut TerminalRenderer,
    input: &mut KeyboardInput,
    speaker: &mut Speaker,
    quit: &QuitHandle,
) -> Result<Option<SessionReport>> {
    let rt = engine::runtime()?;
    rt.block_on(async {
        let clock = TokioClock::new();
        let (game, sequencer) = engine::prepare(config, clock.now_ms());

        tokio::select! {
            report = engine::run_session(game, sequencer, term, input, speaker, &clock) => report.map(Some),
            _ = wait_for_quit(quit, &clock) => {
                info!("quit before game over");
                Ok(None)
            }
        }
    })
}

async fn wait_for_quit(quit: &QuitHandle, clock: &TokioClock) {
    while !quit.is_requested() {
        clock.sleep_ms(QUIT_POLL_MS).await;
    }
}

/// Log to `BLOCKFALL_LOG_PATH` when set. Otherwise stderr, which is off
/// unless `RUST_LOG` asks for it since the terminal is in raw mode.
fn init_logging(config: &EngineConfig) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}
