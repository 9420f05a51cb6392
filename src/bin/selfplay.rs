//! AI-versus-AI self-play, appending each finished game to the record log.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use connect_six::ai::{AiEngine, Difficulty};
use connect_six::core::{GameRng, GameState, Side, SideMap};
use connect_six::record::{GameRecord, RecordStore};
use connect_six::session::SessionConfig;

/// Play AI tiers against each other.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Difficulty for Black
    #[arg(long, default_value_t = Difficulty::Heuristic)]
    black: Difficulty,

    /// Difficulty for White
    #[arg(long, default_value_t = Difficulty::Tactical)]
    white: Difficulty,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML session configuration
    #[arg(short, long, default_value = "connect_six.toml")]
    config: PathBuf,

    /// Directory for game records (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Do not write game records
    #[arg(long)]
    no_save: bool,
}

fn main() -> anyhow::Result<()> {
    initialize_tracing();

    let result = run();

    if let Err(e) = &result {
        tracing::error!(error = ?e, "self-play failed");
    }

    result
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SessionConfig::load_or_default(&args.config)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir);
    }

    let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut engines = SideMap::with_value(AiEngine::new(args.black).with_config(config.game));
    engines[Side::White] = AiEngine::new(args.white).with_config(config.game);
    let store = (!args.no_save).then(|| RecordStore::new(&config.data_dir));

    info!(
        games = args.games,
        black = %args.black,
        white = %args.white,
        seed = rng.seed(),
        board_size = config.game.board_size,
        win_length = config.game.win_length,
        "starting self-play"
    );

    let mut wins: SideMap<u32> = SideMap::default();
    let mut draws = 0u32;

    for game in 0..args.games {
        let mut state = GameState::new(config.game);
        while !state.is_finished() {
            let side = state.current_player();
            let Some(decision) = engines[side].choose(&state, &mut rng) else {
                break;
            };
            debug!(game, side = %side, pos = %decision.pos, reason = %decision.reason, "AI move");
            state.place(decision.pos.row, decision.pos.col)?;
        }

        match state.winner() {
            Some(side) => wins[side] += 1,
            None => draws += 1,
        }
        info!(
            game,
            winner = ?state.winner(),
            moves = state.move_count(),
            "game finished"
        );

        if let Some(store) = &store {
            store.append(&GameRecord::from_state(&state))?;
        }
    }

    info!(
        black_wins = wins[Side::Black],
        white_wins = wins[Side::White],
        draws,
        "self-play complete"
    );
    println!(
        "black ({}): {}  white ({}): {}  draws: {}",
        args.black,
        wins[Side::Black],
        args.white,
        wins[Side::White],
        draws
    );
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
