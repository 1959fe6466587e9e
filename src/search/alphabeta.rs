//! Alpha-beta minimax with iterative deepening.
//!
//! Each iteration searches the full tree to a fixed depth from scratch; the
//! deepest completed iteration supplies the answer. Leaves are scored while
//! their parent builds them, so a depth-0 node just reads its cached utility.
//!
//! With `threads > 1` the root children are searched in parallel on a rayon
//! pool, each with a full window. Picking the first strict maximum in root
//! order then gives the same action as the sequential search.

use std::io::{self, Write};
use std::time::Instant;

use rayon::prelude::*;

use crate::board::{Action, Color, GameState};

/// Bound used for the initial alpha-beta window.
pub const INFINITY: i32 = 100_000;

/// Search parameters.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Deepest iteration, in plies. Values below 1 are treated as 1.
    pub max_depth: u32,
    /// Root-parallel worker threads. 1 searches on the calling thread.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 3,
            threads: 1,
        }
    }
}

/// Search statistics emitted via `info` lines.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u32,
    pub nodes: u64,
    pub score: i32,
    pub elapsed_ms: u64,
}

/// Result of a search: the chosen action and associated info.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal action.
    pub action: Option<Action>,
    pub score: i32,
    /// Deepest completed iteration.
    pub depth: u32,
    pub nodes: u64,
    pub iterations: Vec<SearchInfo>,
}

/// Picks the best action for `perspective` to the given depth.
///
/// Returns `None` when the state has no legal action.
pub fn choose_action(state: &GameState, max_depth: u32, perspective: Color) -> Option<Action> {
    let config = SearchConfig {
        max_depth,
        ..SearchConfig::default()
    };
    search(state, &config, perspective, &mut io::sink()).action
}

/// Runs iterative deepening from depth 1 to `config.max_depth`.
///
/// Emits one `info` line per completed depth to `out`.
pub fn search<W: Write>(
    state: &GameState,
    config: &SearchConfig,
    perspective: Color,
    out: &mut W,
) -> SearchResult {
    let start = Instant::now();
    let mut result = SearchResult {
        action: None,
        score: -INFINITY,
        depth: 0,
        nodes: 0,
        iterations: Vec::new(),
    };

    let actions = state.legal_actions(false);
    if actions.is_empty() {
        return result;
    }

    let pool = if config.threads > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                eprintln!("search: falling back to one thread: {}", e);
                None
            }
        }
    } else {
        None
    };

    for depth in 1..=config.max_depth.max(1) {
        let (best, score, nodes) = match &pool {
            Some(pool) => pool.install(|| root_parallel(state, &actions, depth, perspective)),
            None => root_sequential(state, &actions, depth, perspective),
        };

        result.action = Some(best);
        result.score = score;
        result.depth = depth;
        result.nodes += nodes;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let _ = writeln!(
            out,
            "info depth {} nodes {} score {} time {}",
            depth, result.nodes, score, elapsed_ms
        );
        result.iterations.push(SearchInfo {
            depth,
            nodes: result.nodes,
            score,
            elapsed_ms,
        });
    }

    result
}

/// Root of one iteration on the calling thread. `actions` must be non-empty.
fn root_sequential(
    state: &GameState,
    actions: &[Action],
    depth: u32,
    perspective: Color,
) -> (Action, i32, u64) {
    let mut searcher = Searcher::new(perspective);
    let score_for = (depth == 1).then_some(perspective);

    let mut best = actions[0];
    let mut alpha = -INFINITY;
    for action in actions {
        let child = state.result(action, score_for);
        searcher.nodes += 1;
        let value = searcher.min_value(&child, depth - 1, alpha, INFINITY);
        if value > alpha {
            alpha = value;
            best = *action;
        }
    }
    (best, alpha, searcher.nodes)
}

/// Root of one iteration with every child searched independently.
fn root_parallel(
    state: &GameState,
    actions: &[Action],
    depth: u32,
    perspective: Color,
) -> (Action, i32, u64) {
    let score_for = (depth == 1).then_some(perspective);

    let scored: Vec<(i32, u64)> = actions
        .par_iter()
        .map(|action| {
            let mut searcher = Searcher::new(perspective);
            let child = state.result(action, score_for);
            searcher.nodes += 1;
            let value = searcher.min_value(&child, depth - 1, -INFINITY, INFINITY);
            (value, searcher.nodes)
        })
        .collect();

    let mut best = actions[0];
    let mut alpha = -INFINITY;
    let mut nodes = 0;
    for (action, &(value, n)) in actions.iter().zip(&scored) {
        nodes += n;
        if value > alpha {
            alpha = value;
            best = *action;
        }
    }
    (best, alpha, nodes)
}

/// Recursive minimax state for one root child or one whole iteration.
struct Searcher {
    perspective: Color,
    nodes: u64,
}

impl Searcher {
    fn new(perspective: Color) -> Self {
        Searcher {
            perspective,
            nodes: 0,
        }
    }

    /// Node where `perspective` is to move.
    fn max_value(&mut self, state: &GameState, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        if state.is_terminal() {
            return state.evaluate(self.perspective);
        }
        if depth == 0 {
            return state.utility();
        }

        let score_for = (depth == 1).then_some(self.perspective);
        for action in state.legal_actions(false) {
            let child = state.result(&action, score_for);
            self.nodes += 1;
            let value = self.min_value(&child, depth - 1, alpha, beta);
            if value > alpha {
                alpha = value;
            }
            if beta <= alpha {
                return alpha;
            }
        }
        alpha
    }

    /// Node where the opponent of `perspective` is to move.
    fn min_value(&mut self, state: &GameState, depth: u32, alpha: i32, mut beta: i32) -> i32 {
        if state.is_terminal() {
            return state.evaluate(self.perspective);
        }
        if depth == 0 {
            return state.utility();
        }

        let score_for = (depth == 1).then_some(self.perspective);
        for action in state.legal_actions(false) {
            let child = state.result(&action, score_for);
            self.nodes += 1;
            let value = self.max_value(&child, depth - 1, alpha, beta);
            if value < beta {
                beta = value;
            }
            if beta <= alpha {
                return beta;
            }
        }
        beta
    }
}
