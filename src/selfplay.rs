//! Self-play game generation.
//!
//! Plays complete games between two agents, one per color, and records
//! every ply in notation along with the mover's evaluation of the result.
//! Records serialize to JSONL for offline analysis.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use crate::agent::{Agent, RandomAgent, SearchAgent};
use crate::board::{Color, GameState, InvalidAction, Outcome};
use crate::protocol::format_action;
use crate::search::SearchConfig;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Search depth for White.
    pub white_depth: u32,
    /// Search depth for Black.
    pub black_depth: u32,
    /// White picks uniformly random actions instead of searching.
    pub white_random: bool,
    /// Black picks uniformly random actions instead of searching.
    pub black_random: bool,
    /// Plies after which an unfinished game is abandoned.
    pub max_plies: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            white_depth: 3,
            black_depth: 3,
            white_random: false,
            black_random: false,
            max_plies: 200,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// Errors raised while generating games.
#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("game {game}: {color} chose illegal action {action} at turn {turn}: {source}")]
    IllegalAction {
        game: usize,
        turn: u32,
        color: Color,
        action: String,
        source: InvalidAction,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("self-play worker thread panicked")]
    WorkerPanicked,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// One side was reduced to two pieces or left without a legal action.
    Decisive,
    /// The last sixteen actions repeated an eight-action cycle.
    Repetition,
    /// The ply cap was reached first.
    PlyLimit,
}

/// A single recorded ply.
#[derive(Debug, Clone, Serialize)]
pub struct PlyRecord {
    /// Turn number at which the action was played.
    pub turn: u32,
    /// The action in notation, e.g. `B b4-a4xd2`.
    pub action: String,
    /// Evaluation of the resulting state from the mover's perspective.
    pub utility: i32,
    pub white_pieces: usize,
    pub black_pieces: usize,
}

/// Piece counts per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceCounts {
    pub white: usize,
    pub black: usize,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// The winning color, if the game was decided.
    pub winner: Option<Color>,
    pub termination: Termination,
    /// Number of plies played.
    pub plies: usize,
    pub final_pieces: PieceCounts,
    /// All plies in order.
    pub moves: Vec<PlyRecord>,
}

impl GameRecord {
    fn outcome_label(&self) -> String {
        match (self.winner, self.termination) {
            (Some(c), _) => format!("{} wins", c),
            (None, Termination::Repetition) => "draw by repetition".to_string(),
            (None, Termination::PlyLimit) => "unfinished".to_string(),
            (None, Termination::Decisive) => "no result".to_string(),
        }
    }
}

fn make_agent(color: Color, depth: u32, random: bool, rng: &mut SmallRng) -> Box<dyn Agent> {
    if random {
        Box::new(RandomAgent::seeded(color, rng.gen()))
    } else {
        Box::new(SearchAgent::new(
            color,
            SearchConfig {
                max_depth: depth,
                threads: 1,
            },
        ))
    }
}

/// Plays a single game from the starting position.
///
/// Every chosen action goes through the validating `apply`, so a broken
/// agent surfaces as an error instead of a corrupt record.
pub fn play_game(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<GameRecord, SelfPlayError> {
    let mut white = make_agent(Color::White, config.white_depth, config.white_random, rng);
    let mut black = make_agent(Color::Black, config.black_depth, config.black_random, rng);

    let mut state = GameState::new();
    let mut moves = Vec::new();

    let termination = loop {
        if state.is_repetitive_draw() {
            break Termination::Repetition;
        }
        if state.is_terminal() {
            break Termination::Decisive;
        }
        if moves.len() >= config.max_plies {
            break Termination::PlyLimit;
        }

        let mover = state.side_to_move();
        let agent = match mover {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(action) = agent.decide(&state) else {
            break Termination::Decisive;
        };

        let next = state
            .apply(&action)
            .map_err(|source| SelfPlayError::IllegalAction {
                game: game_id,
                turn: state.turn(),
                color: mover,
                action: format_action(&action),
                source,
            })?;

        moves.push(PlyRecord {
            turn: state.turn(),
            action: format_action(&action),
            utility: next.evaluate(mover),
            white_pieces: next.piece_count(Color::White),
            black_pieces: next.piece_count(Color::Black),
        });
        state = next;
    };

    let winner = match (termination, state.outcome()) {
        (Termination::Decisive, Some(Outcome::Win(color))) => Some(color),
        _ => None,
    };

    Ok(GameRecord {
        game_id,
        winner,
        termination,
        plies: moves.len(),
        final_pieces: PieceCounts {
            white: state.piece_count(Color::White),
            black: state.piece_count(Color::Black),
        },
        moves,
    })
}

/// Seeds the RNG of one game. A fixed config seed makes every game
/// reproducible regardless of which thread plays it.
fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Runs self-play generation, producing multiple game records ordered by
/// game ID.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    })?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Runs self-play generation, calling `on_game` with each completed game record.
///
/// This allows the caller to process games incrementally (e.g. write to disk)
/// rather than waiting for all games to finish.
pub fn run_self_play_with_callback<F>(
    config: &SelfPlayConfig,
    on_game: F,
) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game)
    } else {
        run_self_play_sequential(config, on_game)
    }
}

fn report(config: &SelfPlayConfig, n: usize, game: &GameRecord, elapsed: f64) {
    if !config.quiet {
        eprintln!(
            "Game {}/{}: {} after {} plies ({:.1}s)",
            n,
            config.num_games,
            game.outcome_label(),
            game.plies,
            elapsed,
        );
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(
    config: &SelfPlayConfig,
    mut on_game: F,
) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let mut rng = game_rng(config, i);
        let game_start = Instant::now();
        let game = play_game(config, i, &mut rng)?;
        report(config, i + 1, &game, game_start.elapsed().as_secs_f64());
        on_game(game);
    }
    Ok(())
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_self_play_parallel<F>(
    config: &SelfPlayConfig,
    mut on_game: F,
) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel::<Result<GameRecord, SelfPlayError>>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        let completed = AtomicUsize::new(0);
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = game_rng(&config_clone, i);
                    let game_start = Instant::now();
                    let game = play_game(&config_clone, i, &mut rng);
                    if let Ok(game) = &game {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report(&config_clone, n, game, game_start.elapsed().as_secs_f64());
                    }
                    let _ = tx.send(game);
                });
        });
    });

    // Receive completed games on the main thread and pass to callback.
    let mut first_error = None;
    for game in rx {
        match game {
            Ok(game) => on_game(game),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    handle.join().map_err(|_| SelfPlayError::WorkerPanicked)?;
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        write_game_json(game, out)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Writes a single game record as a JSON object.
pub fn write_game_json<W: Write>(game: &GameRecord, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, game).map_err(std::io::Error::from)
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut white_wins = 0usize;
    let mut black_wins = 0usize;
    let mut repetitions = 0usize;
    let mut unfinished = 0usize;
    let mut total_plies = 0usize;

    for game in games {
        total_plies += game.plies;
        match (game.winner, game.termination) {
            (Some(Color::White), _) => white_wins += 1,
            (Some(Color::Black), _) => black_wins += 1,
            (None, Termination::Repetition) => repetitions += 1,
            (None, _) => unfinished += 1,
        }
    }

    let pct = |n: usize| 100.0 * n as f64 / total.max(1) as f64;
    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg plies/game: {:.1}",
        total_plies as f64 / total.max(1) as f64
    );
    eprintln!("White wins: {} ({:.1}%)", white_wins, pct(white_wins));
    eprintln!("Black wins: {} ({:.1}%)", black_wins, pct(black_wins));
    eprintln!("Draws by repetition: {} ({:.1}%)", repetitions, pct(repetitions));
    eprintln!("Unfinished: {} ({:.1}%)", unfinished, pct(unfinished));
}
