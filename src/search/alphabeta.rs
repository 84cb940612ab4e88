//! Depth-first minimax with alpha-beta pruning.
//!
//! Blue maximizes and Red minimizes. Moves are tried in ascending index
//! order and a later move replaces the incumbent only when strictly better,
//! so among equal values the lowest index wins.
//!
//! ## Windows
//!
//! A child value is decayed one step toward zero before the parent sees it,
//! so the parent's window does not translate exactly into the child's. The
//! child is searched with the window widened by one on each side. Decay
//! moves a value by at most one, so a bound the child proves against its
//! widened window is still a bound against the parent's window after decay,
//! and the pruned value equals the exhaustive one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{Color, Error, Position, Result};

use super::config::SearchConfig;
use super::result::{terminal_value, SearchResult, Value, NEG_INF, POS_INF};
use super::stats::SearchStats;

/// Alpha-beta search context.
///
/// Owns the configuration, the statistics of the last search and an
/// optional cancel flag. Holds no position state between calls.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    pub(super) config: SearchConfig,
    pub(super) stats: SearchStats,
    pub(super) cancel: Option<Arc<AtomicBool>>,
}

impl AlphaBeta {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            cancel: None,
        }
    }

    /// Attach a cancel flag, checked on entry to every position.
    ///
    /// Once the flag is set the running search returns `Error::Cancelled`.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Search with the infinite window.
    pub fn solve(&mut self, position: &Position, player: Color) -> Result<SearchResult> {
        self.search(position, player, NEG_INF, POS_INF)
    }

    /// Search `position` with `player` to move inside `(alpha, beta)`.
    ///
    /// Fails with `InvalidWindow` if `alpha >= beta`. Otherwise it only fails
    /// when cancelled: every ply removes at least one branch, so the tree is
    /// finite.
    pub fn search(
        &mut self,
        position: &Position,
        player: Color,
        alpha: Value,
        beta: Value,
    ) -> Result<SearchResult> {
        if alpha >= beta {
            return Err(Error::InvalidWindow { alpha, beta });
        }
        let start = Instant::now();
        self.stats.reset();

        let result = self.root(position, player, alpha, beta);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        match &result {
            Ok(found) => log::debug!(
                "{} to move over {} branches: value {} best {:?} ({} nodes, {} cutoffs, {}us)",
                player,
                position.len(),
                found.value,
                found.best_move().map(|mv| mv.0),
                self.stats.nodes,
                self.stats.cutoffs,
                self.stats.time_us,
            ),
            Err(err) => log::debug!("{} to move: {} after {} nodes", player, err, self.stats.nodes),
        }
        result
    }

    #[cfg(feature = "parallel")]
    fn root(
        &mut self,
        position: &Position,
        player: Color,
        alpha: Value,
        beta: Value,
    ) -> Result<SearchResult> {
        if self.config.parallel {
            self.root_parallel(position, player, alpha, beta)
        } else {
            self.node(position, player, alpha, beta, 0)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn root(
        &mut self,
        position: &Position,
        player: Color,
        alpha: Value,
        beta: Value,
    ) -> Result<SearchResult> {
        self.node(position, player, alpha, beta, 0)
    }

    /// Recursive step.
    pub(super) fn node(
        &mut self,
        position: &Position,
        player: Color,
        mut alpha: Value,
        mut beta: Value,
        depth: u16,
    ) -> Result<SearchResult> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let moves = position.legal_moves(player);
        if moves.is_empty() {
            self.stats.terminals += 1;
            return Ok(SearchResult::terminal(self.terminal(player)));
        }

        let mut best: Option<SearchResult> = None;
        for (tried, &mv) in moves.iter().enumerate() {
            let child = position.apply(mv)?;
            let result = self
                .node(
                    &child,
                    player.other(),
                    alpha.saturating_sub(1),
                    beta.saturating_add(1),
                    depth + 1,
                )?
                .through(mv);

            let value = result.value;
            if improves(player, value, best.as_ref()) {
                best = Some(result);
            }

            if !self.config.pruning {
                continue;
            }
            if player.is_maximizer() {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if alpha >= beta {
                if tried + 1 < moves.len() {
                    self.stats.cutoffs += 1;
                    log::trace!(
                        "cutoff at depth {} after {} of {} moves",
                        depth,
                        tried + 1,
                        moves.len()
                    );
                }
                break;
            }
        }

        Ok(best.unwrap_or_else(|| SearchResult::terminal(self.terminal(player))))
    }

    /// Value of the position where `loser` cannot move.
    pub(super) fn terminal(&self, loser: Color) -> Value {
        terminal_value(loser, Value::from(self.config.win_value.max(1)))
    }

    pub(super) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Check if `value` beats the incumbent from `player`'s side.
///
/// Strict comparison keeps the earliest move among equals.
pub(super) fn improves(player: Color, value: Value, incumbent: Option<&SearchResult>) -> bool {
    match incumbent {
        None => true,
        Some(best) if player.is_maximizer() => value > best.value,
        Some(best) => value < best.value,
    }
}
