//! Root-split parallel search on the rayon pool.
//!
//! Every root move is searched by its own worker with the caller's full
//! window, so workers share no pruning state. Results are merged in move
//! order with the same strict comparison as the sequential search, which
//! keeps the value and the chosen root move identical to it.

use rayon::prelude::*;

use crate::core::{Color, Error, Position, Result};

use super::alphabeta::{improves, AlphaBeta};
use super::result::{SearchResult, Value};
use super::stats::SearchStats;

impl AlphaBeta {
    pub(super) fn root_parallel(
        &mut self,
        position: &Position,
        player: Color,
        alpha: Value,
        beta: Value,
    ) -> Result<SearchResult> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        self.stats.nodes += 1;

        let moves = position.legal_moves(player);
        if moves.is_empty() {
            self.stats.terminals += 1;
            return Ok(SearchResult::terminal(self.terminal(player)));
        }

        let subtrees = moves
            .par_iter()
            .map(|&mv| -> Result<(SearchResult, SearchStats)> {
                let mut worker = AlphaBeta {
                    config: self.config.clone(),
                    stats: SearchStats::default(),
                    cancel: self.cancel.clone(),
                };
                let child = position.apply(mv)?;
                let result = worker.node(
                    &child,
                    player.other(),
                    alpha.saturating_sub(1),
                    beta.saturating_add(1),
                    1,
                )?;
                Ok((result.through(mv), worker.stats))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut best: Option<SearchResult> = None;
        for (result, stats) in subtrees {
            self.stats.merge(&stats);
            if improves(player, result.value, best.as_ref()) {
                best = Some(result);
            }
        }
        log::trace!("merged {} root subtrees", moves.len());

        Ok(best.unwrap_or_else(|| SearchResult::terminal(self.terminal(player))))
    }
}
