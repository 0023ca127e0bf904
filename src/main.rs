//! ASCII dungeon crawler (default binary).
//!
//! Shows the start menu (unless a seed was given), generates the dungeon and
//! runs the fixed-delay render/input loop. Rendering goes through the
//! framebuffer pipeline in `ascii_dungeon::term`.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

use ascii_dungeon::config::Config;
use ascii_dungeon::core::Session;
use ascii_dungeon::input::{handle_key_event, menu_key};
use ascii_dungeon::menu::{Menu, MenuOutcome};
use ascii_dungeon::term::{terminal_viewport, DungeonView, FrameBuffer, TerminalRenderer};
use ascii_dungeon::types::PlayerAction;
use ascii_dungeon::{dump, logging};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always restore the terminal, then report the first failure.
    let restored = term.exit();
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = match config.seed {
        Some(seed) => seed,
        None => match run_menu(term)? {
            Some(seed) => seed,
            None => {
                info!("exit from menu");
                return Ok(());
            }
        },
    };

    let mut session = Session::new(seed);
    if let Some(path) = &config.dump_map {
        dump::write_map(path, session.grid())?;
        info!(path = %path.display(), "map written");
    }

    play(term, &mut session, config)
}

/// Returns the chosen seed, or `None` when the player exits.
fn run_menu(term: &mut TerminalRenderer) -> Result<Option<u64>> {
    let mut menu = Menu::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        menu.render_into(terminal_viewport()?, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read().context("read menu input")? {
            Event::Key(key) => {
                let Some(key) = menu_key(key) else {
                    continue;
                };
                match menu.handle_key(key) {
                    MenuOutcome::Continue => {}
                    MenuOutcome::Start(seed) => return Ok(Some(seed.unwrap_or_else(rand::random))),
                    MenuOutcome::Exit => return Ok(None),
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn play(term: &mut TerminalRenderer, session: &mut Session, config: &Config) -> Result<()> {
    let mut view = DungeonView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = config.frame_duration();

    loop {
        view.render_into(session, terminal_viewport()?, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with the frame delay as timeout.
        if !event::poll(frame).context("poll input")? {
            continue;
        }
        match event::read().context("read input")? {
            Event::Key(key) => match handle_key_event(key) {
                Some(PlayerAction::Quit) => {
                    info!(seed = session.seed(), keys = session.actor().keys(), "session ended");
                    return Ok(());
                }
                Some(action) => {
                    session.apply_action(action);
                }
                None => {}
            },
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
