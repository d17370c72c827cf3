//! Headless autoplay runner (default binary).
//!
//! Drives a full game with a greedy tap policy and prints every engine event
//! as line-delimited JSON. Doubles as a smoke test for the event surface:
//! pipe it through `jq` to watch a game unfold.

use anyhow::{anyhow, Result};

use dish_tiles::core::GameState;
use dish_tiles::types::{GamePhase, PlayerAction, TileId};

#[derive(Debug, Clone, Copy)]
struct RunConfig {
    seed: u32,
    max_steps: usize,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig {
        seed: 1,
        max_steps: 400,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--max-steps" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-steps"))?;
                config.max_steps = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --max-steps value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Greedy policy: prefer the selectable tile that extends the catalog dish
/// the collector is already closest to completing.
fn pick_tile(game: &GameState) -> Option<TileId> {
    let board = game.board();
    let collected: Vec<char> = game
        .collector_slots()
        .iter()
        .map(|&id| board.tile(id).symbol)
        .collect();

    let mut best: Option<(usize, TileId)> = None;
    for id in board.live_ids() {
        if !board.is_selectable(id) {
            continue;
        }
        let symbol = board.tile(id).symbol;

        // Score: for dishes containing this symbol (and not yet covered on
        // it), how many of their other characters are already collected.
        let mut score = 0usize;
        for dish in &game.rules().catalog {
            if !dish.chars().any(|c| c == symbol) || collected.contains(&symbol) {
                continue;
            }
            let have = dish.chars().filter(|c| collected.contains(c)).count();
            score = score.max(1 + have);
        }

        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, id));
        }
    }
    best.map(|(_, id)| id)
}

fn run(config: RunConfig) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.apply_action(PlayerAction::Start);

    for _ in 0..config.max_steps {
        let Some(id) = pick_tile(&game) else {
            break;
        };
        game.apply_action(PlayerAction::Tap(id));

        // The settle delay is presentation timing; headless, fire at once.
        if let Some(token) = game.pending_check() {
            game.run_match_check(token);
        }

        for event in game.take_events() {
            println!("{}", serde_json::to_string(&event)?);
        }

        if game.phase() == GamePhase::Lost {
            break;
        }
        if game.board().live_count() == 0 {
            break;
        }
    }

    eprintln!(
        "done: phase={} tiles_left={} collector={}",
        game.phase().as_str(),
        game.board().live_count(),
        game.collector_slots().len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    run(config)
}
