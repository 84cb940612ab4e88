//! The game driver: current position, turn order and history.

use serde::{Deserialize, Serialize};

use crate::core::{Branch, Color, Error, Level, Move, Position, Result};
use crate::search::{AlphaBeta, SearchResult};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,

    /// Moves played before the loser ran out of branches.
    pub plies: usize,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: Color) -> bool {
        self.winner == player
    }

    #[must_use]
    pub fn loser(&self) -> Color {
        self.winner.other()
    }
}

/// One played move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Color,

    /// Index the move was given as, in the position it was played in.
    pub branch: Move,

    /// Endpoints and color of the branch that was cut.
    pub cut: Branch,

    /// Branches that fell with it, not counting the cut branch.
    pub fallen: usize,
}

/// A game in progress.
///
/// Holds the state a driver needs between turns; the engine itself keeps
/// none.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    position: Position,
    to_move: Color,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Start a game from a position.
    pub fn new(position: Position, first: Color) -> Self {
        Self {
            position,
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Validate a level and start a game on it.
    pub fn from_level(level: Level, first: Color) -> Result<Self> {
        Ok(Self::new(level.into_position()?, first))
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Branches the player to move may cut.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves(self.to_move)
    }

    /// `Some` once the player to move has nothing to cut.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.position.has_move(self.to_move) {
            None
        } else {
            Some(GameResult {
                winner: self.to_move.other(),
                plies: self.history.len(),
            })
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Cut a branch for the player to move and pass the turn.
    ///
    /// Fails with `InvalidMove` for an unknown index or a branch of the other
    /// color; the game is left unchanged.
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord> {
        let cut = *self.position.branch(mv).ok_or_else(|| Error::InvalidMove {
            branch: mv,
            reason: format!("position has branches 1..={}", self.position.len()),
        })?;
        let next = self.position.play(self.to_move, mv)?;

        let record = MoveRecord {
            player: self.to_move,
            branch: mv,
            cut,
            fallen: self.position.len() - 1 - next.len(),
        };
        log::debug!(
            "{} cut {} ({}-{}), {} fell, {} left",
            record.player,
            mv,
            cut.from,
            cut.to,
            record.fallen,
            next.len()
        );

        self.position = next;
        self.to_move = self.to_move.other();
        self.history.push(record);
        Ok(record)
    }

    /// Ask the engine for the best line from the current position.
    pub fn analyze(&self, search: &mut AlphaBeta) -> Result<SearchResult> {
        search.solve(&self.position, self.to_move)
    }

    /// Let the engine play for the player to move.
    ///
    /// Returns `None` when the game is already over.
    pub fn bot_move(&mut self, search: &mut AlphaBeta) -> Result<Option<MoveRecord>> {
        let analysis = self.analyze(search)?;
        match analysis.best_move() {
            Some(mv) => self.play(mv).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vertex;

    #[test]
    fn test_play_records_fall() {
        let mut game = Game::from_level(Level::sample(), Color::Blue).unwrap();
        // Branch 2 is the Blue trunk (0,1) holding three more branches
        let record = game.play(Move(2)).unwrap();

        assert_eq!(record.player, Color::Blue);
        assert_eq!(record.branch, Move(2));
        assert_eq!(record.cut, Branch::new(Vertex(0), Vertex(1), Color::Blue));
        assert_eq!(record.fallen, 3);
        assert_eq!(game.position().len(), 2);
        assert_eq!(game.to_move(), Color::Red);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_play_rejects_wrong_color() {
        let mut game = Game::from_level(Level::sample(), Color::Blue).unwrap();
        let err = game.play(Move(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { .. }));
        // Unchanged
        assert_eq!(game.to_move(), Color::Blue);
        assert_eq!(game.position().len(), 6);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_result_when_mover_is_stuck() {
        let level = Level::from_tuples(&[(0, 1, Color::Blue)]);
        let game = Game::from_level(level.clone(), Color::Red).unwrap();
        assert_eq!(
            game.result(),
            Some(GameResult {
                winner: Color::Blue,
                plies: 0
            })
        );

        let mut game = Game::from_level(level, Color::Blue).unwrap();
        assert!(!game.is_over());
        game.play(Move(1)).unwrap();
        let result = game.result().unwrap();
        assert!(result.is_winner(Color::Blue));
        assert_eq!(result.loser(), Color::Red);
        assert_eq!(result.plies, 1);
    }

    #[test]
    fn test_bot_plays_out_sample() {
        let mut game = Game::from_level(Level::sample(), Color::Blue).unwrap();
        let mut search = AlphaBeta::default();

        while game.bot_move(&mut search).unwrap().is_some() {}

        let result = game.result().unwrap();
        assert_eq!(result.winner, Color::Blue);
        // Value 95 is a win five plies away
        assert_eq!(result.plies, 5);
        assert!(game.bot_move(&mut search).unwrap().is_none());
    }
}
