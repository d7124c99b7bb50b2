//! Terminal client for Scoundrel.
//!
//! Plays one game on stdin/stdout. Logs go to stderr, filtered by
//! `RUST_LOG` (default `warn`).
//!
//! ```bash
//! cargo run --bin scoundrel -- --seed 42
//! RUST_LOG=scoundrel=debug cargo run --bin scoundrel
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use scoundrel::{Action, GameConfig, GameSession, GameStatus, DEFAULT_MAX_HEALTH};
use tracing_subscriber::EnvFilter;

/// Play a game of Scoundrel in the terminal
#[derive(Parser, Debug)]
#[command(name = "scoundrel")]
#[command(about = "Single-player dungeon crawl with a deck of cards", long_about = None)]
#[command(version)]
struct Args {
    /// Seed for the dungeon shuffle; random when omitted
    #[arg(long, env = "SCOUNDREL_SEED")]
    seed: Option<u64>,

    /// Starting and maximum health
    #[arg(
        long,
        env = "SCOUNDREL_MAX_HEALTH",
        default_value_t = DEFAULT_MAX_HEALTH,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    max_health: i32,
}

impl Args {
    fn config(&self) -> GameConfig {
        let config = GameConfig::new().with_max_health(self.max_health);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut session = GameSession::new(&args.config());
    tracing::info!(session = %session.id(), seed = ?args.seed, "game started");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !session.is_over() {
        render(&session);
        let Some(line) = prompt(&mut input, "Play a card by number, (s)kip the room, or (q)uit: ")?
        else {
            return Ok(());
        };

        let action = match line.as_str() {
            "q" | "quit" => return Ok(()),
            "s" | "skip" => Action::SkipRoom,
            other => match other.parse::<usize>() {
                Ok(index) => Action::Play { index },
                Err(_) => {
                    println!("Unrecognised command: {other}");
                    continue;
                }
            },
        };

        let Some(action) = choose_weapon(&session, action, &mut input)? else {
            return Ok(());
        };
        take_turn(&mut session, action);
    }

    render(&session);
    match session.status() {
        GameStatus::Won => println!(
            "You escaped the dungeon with {} health.",
            session.player().health()
        ),
        GameStatus::Lost => println!("You were slain."),
        GameStatus::Initial | GameStatus::InProgress => {}
    }
    Ok(())
}

/// Ask whether to use the weapon when a play would fight with it.
///
/// Returns `None` when input ended mid-prompt.
fn choose_weapon(
    session: &GameSession,
    action: Action,
    input: &mut impl BufRead,
) -> Result<Option<Action>> {
    let Some(index) = action.index() else {
        return Ok(Some(action));
    };
    let Ok(Some(preview)) = session.preview(index) else {
        return Ok(Some(action));
    };
    let Some(with_weapon) = preview.weapon_damage else {
        return Ok(Some(action));
    };

    let question = format!(
        "Fight with your weapon ({with_weapon} damage) or barehanded ({} damage)? [W/b]: ",
        preview.barehanded_damage
    );
    Ok(prompt(input, &question)?.map(|answer| {
        if answer.starts_with('b') {
            Action::PlayBarehanded { index }
        } else {
            action
        }
    }))
}

fn take_turn(session: &mut GameSession, action: Action) {
    match session.apply(action) {
        Ok(Some(effect)) => match session.history().last() {
            Some(record) => println!("{}: {effect}", record.card),
            None => println!("{effect}"),
        },
        Ok(None) => println!("You slip past the room."),
        Err(err) => println!("Cannot {action}: {err}"),
    }
}

fn render(session: &GameSession) {
    let player = session.player();
    println!();
    print!("Health {}/{}", player.health(), player.max_health());
    match player.equipped_weapon() {
        Some(weapon) => {
            print!(" | Weapon {weapon}");
            if let Some(last) = player.defeated_monsters().last() {
                print!(" (last kill {last})");
            }
        }
        None => print!(" | Unarmed"),
    }
    if player.used_potion_this_room() {
        print!(" | Potion used");
    }
    println!(" | Dungeon {} cards", session.deck().remaining());

    if session.is_over() {
        return;
    }
    for (index, card) in session.room().cards().iter().enumerate() {
        println!("  [{index}] {:>3}  {} ({})", card.to_string(), card.kind(), card.value());
    }
    if session.can_skip() {
        println!("  (this room can be skipped)");
    }
}

/// Print `message` and read one trimmed, lowercased line. `None` on EOF.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("flushing stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading stdin")?;
    Ok((read > 0).then(|| line.trim().to_lowercase()))
}
