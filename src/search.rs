use crate::board::Board;
use crate::game::Game;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

/// Sentinel returned by a cancelled search; outside any legitimate score
/// range, so the driver can recognize and discard the partial result.
pub const SCORE_CANCELLED: f64 = -1_234_567.0;

const MAX_DEPTH: u32 = 64;

/// Negamax with alpha-beta pruning. Returns the score of `state` and the
/// chosen successor (None at leaves and terminals).
///
/// Successors are ordered hint-first, then most-promising-first: a child's
/// static score is from the opponent's viewpoint, so ascending child score
/// is descending desirability for the mover. The ordering is what makes the
/// pruning bite.
pub fn negamax<G: Game>(
    state: &G,
    depth: u32,
    mut alpha: f64,
    beta: f64,
    hint: Option<&G>,
    cancel: &AtomicBool,
    nodes: &mut u64,
) -> (f64, Option<G>) {
    *nodes += 1;
    if cancel.load(Ordering::Relaxed) {
        return (SCORE_CANCELLED, None);
    }
    if depth == 0 {
        return (state.evaluate(), None);
    }

    let mut children = state.successors();
    if children.is_empty() {
        let score = if state.is_loss() {
            f64::NEG_INFINITY
        } else if state.is_win() {
            f64::INFINITY
        } else {
            0.0
        };
        return (score, None);
    }

    children.sort_by(|a, b| a.evaluate().total_cmp(&b.evaluate()));
    if let Some(h) = hint {
        if let Some(pos) = children.iter().position(|c| c.same_position(h)) {
            let preferred = children.remove(pos);
            children.insert(0, preferred);
        }
    }

    let mut best: Option<G> = None;
    for child in children {
        let (child_score, _) = negamax(&child, depth - 1, -beta, -alpha, None, cancel, nodes);
        if child_score == SCORE_CANCELLED {
            return (SCORE_CANCELLED, None);
        }
        let v = -child_score;
        if v >= beta {
            return (v, Some(child));
        }
        if v > alpha {
            alpha = v;
            best = Some(child);
        }
    }
    (alpha, best)
}

/// Owns the cancellation flag and the time policy; the recursion itself is
/// a free function so workers can run it without sharing `&mut self`.
pub struct Search {
    pub stop: Arc<AtomicBool>,
    pub nodes: u64,
    /// Fraction of the budget after which no further depth is started.
    pub budget_fraction: f64,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
            nodes: 0,
            budget_fraction: 0.85,
        }
    }

    /// Full-width search to a fixed depth. Returns the chosen successor, or
    /// the first legal one when nothing raises alpha (every line is lost),
    /// or None on a finished game.
    pub fn best<G: Game>(&mut self, root: &G, depth: u32) -> Option<G> {
        self.stop.store(false, Ordering::Relaxed);
        let mut nodes = 0u64;
        let (score, chosen) = negamax(
            root,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            None,
            &self.stop,
            &mut nodes,
        );
        self.nodes += nodes;
        debug!("depth {depth} score {score:.3} nodes {nodes}");
        chosen.or_else(|| root.successors().into_iter().next())
    }

    /// Iterative deepening under a wall-clock budget: depth 1 runs
    /// synchronously, every further depth in a cancellable worker. The
    /// deepest fully-completed result wins; a partially-explored deeper
    /// search is discarded, because its best-so-far carries no guarantee.
    pub fn best_within<G: Game>(&mut self, root: &G, budget_ms: i64) -> Option<G> {
        let start = Instant::now();
        root.prefetch_deep();
        let mut current = self.best(root, 1)?;
        if budget_ms <= 0 {
            return Some(current);
        }
        let budget = Duration::from_millis(budget_ms as u64);

        for depth in 2..=MAX_DEPTH {
            if start.elapsed() >= budget.mul_f64(self.budget_fraction) {
                break;
            }
            self.stop.store(false, Ordering::Relaxed);
            let (tx, rx) = mpsc::channel();
            let worker_root = root.clone();
            let hint = current.clone();
            let cancel = Arc::clone(&self.stop);
            let worker = thread::spawn(move || {
                let mut nodes = 0u64;
                let result = negamax(
                    &worker_root,
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    Some(&hint),
                    &cancel,
                    &mut nodes,
                );
                let _ = tx.send((result, nodes));
            });

            let remaining = budget.saturating_sub(start.elapsed());
            match rx.recv_timeout(remaining) {
                Ok(((score, chosen), nodes)) => {
                    self.nodes += nodes;
                    let _ = worker.join();
                    if score == SCORE_CANCELLED {
                        break;
                    }
                    if let Some(c) = chosen {
                        current = c;
                    }
                    info!(
                        "depth {} score {:.3} nodes {} elapsed {}ms",
                        depth,
                        score,
                        self.nodes,
                        start.elapsed().as_millis()
                    );
                }
                Err(_) => {
                    // Budget exhausted mid-depth: tell the worker to stop at
                    // its next cancellation check and keep the previous
                    // depth's completed answer.
                    self.stop.store(true, Ordering::Relaxed);
                    let _ = worker.join();
                    break;
                }
            }
        }
        Some(current)
    }
}

/// Best successor of `board` at a fixed search depth.
pub fn search_best(board: &Board, depth: u32) -> Board {
    Search::new()
        .best(board, depth)
        .unwrap_or_else(|| board.clone())
}

/// Best successor of `board` found within `budget_ms` of wall-clock time.
/// A zero or negative budget yields the depth-1 result.
pub fn search_within(board: &Board, budget_ms: i64) -> Board {
    Search::new()
        .best_within(board, budget_ms)
        .unwrap_or_else(|| board.clone())
}
