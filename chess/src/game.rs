use cozy_chess::Square;

use crate::captures::CapturedPieces;
use crate::fen::FenError;
use crate::position::Position;
use crate::san::format_san;
use crate::status::GameStatus;
use crate::types::{Piece, PieceColor, PieceKind};
use crate::uci::format_uci_move;

/// A candidate move proposed by the interface, not yet checked by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, piece: PieceKind) -> Self {
        self.promotion = Some(piece);
        self
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_uci_move(self.from, self.to, self.promotion))
    }
}

/// Record of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,                 // Piece that made the move
    pub captured: Option<Piece>,      // Captured piece, with the color it belonged to
    pub promotion: Option<PieceKind>, // Promotion piece if any
    pub san: String,                  // Standard Algebraic Notation
    pub fen: String,                  // FEN after this move
}

/// Authoritative game state: the current position, the moves that led to
/// it, and the pieces each side has lost.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: Vec<HistoryEntry>,
    captured: CapturedPieces,
}

impl Game {
    /// Create a new game from the standard starting position
    pub fn new() -> Self {
        Self::from_position(Position::start())
    }

    /// Create a game from a FEN string
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    fn from_position(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
            captured: CapturedPieces::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.position.side_to_move()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.position)
    }

    /// Full moves made so far: one per pair of plies, rounded up.
    pub fn move_count(&self) -> usize {
        self.history.len().div_ceil(2)
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Validate and commit a candidate move.
    ///
    /// The move is played on a scratch copy of the position; the game only
    /// changes when the rules accept it. Promotions without an explicit piece
    /// become queens. Nothing is accepted once the game has ended, including
    /// by repetition or the fifty-move rule.
    pub fn apply(&mut self, request: MoveRequest) -> Result<HistoryEntry, GameError> {
        let status = self.status();
        if status.is_terminal() {
            return Err(GameError::GameOver(status.text()));
        }

        let legal = self
            .position
            .find_legal(request.from, request.to)
            .ok_or_else(|| GameError::IllegalMove(request.to_string()))?;

        let promotion = if legal.is_promotion {
            Some(request.promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        };

        let next = self.position.play(&legal, promotion)?;

        let mover = self.position.side_to_move();
        let captured = legal.captured.map(|kind| Piece::new(kind, !mover));
        let san = format_san(&self.position, &legal, promotion, &next);

        let entry = HistoryEntry {
            from: legal.from,
            to: legal.to,
            piece: Piece::new(legal.piece, mover),
            captured,
            promotion,
            san,
            fen: next.to_fen(),
        };

        if let Some(piece) = captured {
            self.captured.record(piece);
        }
        self.history.push(entry.clone());
        self.position = next;

        tracing::debug!(san = %entry.san, fen = %entry.fen, "Move committed");
        Ok(entry)
    }

    /// Back to the standard starting position with no history or captures.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(String),
    #[error("Game over: {0}")]
    GameOver(String),
    #[error("FEN parse error: {0}")]
    FenError(#[from] FenError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uci::parse_uci_move;

    fn play(game: &mut Game, moves: &[&str]) {
        for m in moves {
            game.apply(parse_uci_move(m).unwrap()).unwrap();
        }
    }

    #[test]
    fn apply_commits_and_records_history() {
        let mut game = Game::new();
        let entry = game.apply(MoveRequest::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(entry.san, "e4");
        assert_eq!(entry.piece, Piece::new(PieceKind::Pawn, PieceColor::White));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.side_to_move(), PieceColor::Black);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn illegal_move_leaves_state_untouched() {
        let mut game = Game::new();
        let before = game.to_fen();
        let err = game.apply(MoveRequest::new(Square::E2, Square::E5));
        assert!(matches!(err, Err(GameError::IllegalMove(_))));
        assert_eq!(game.to_fen(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn capture_goes_to_the_victims_collection() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "d7d5", "e4d5"]);
        assert_eq!(
            game.captured().lost_by(PieceColor::Black),
            &[Piece::new(PieceKind::Pawn, PieceColor::Black)]
        );
        assert!(game.captured().lost_by(PieceColor::White).is_empty());
        assert_eq!(
            game.history().last().unwrap().captured,
            Some(Piece::new(PieceKind::Pawn, PieceColor::Black))
        );
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let mut game = Game::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        let entry = game.apply(MoveRequest::new(Square::E7, Square::E8)).unwrap();
        assert_eq!(entry.promotion, Some(PieceKind::Queen));
        assert_eq!(
            game.position().piece_at(Square::E8),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
    }

    #[test]
    fn explicit_promotion_is_honoured() {
        let mut game = Game::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        game.apply(MoveRequest::new(Square::E7, Square::E8).with_promotion(PieceKind::Rook))
            .unwrap();
        assert_eq!(
            game.position().piece_at(Square::E8).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
    }

    #[test]
    fn move_count_rounds_up() {
        let mut game = Game::new();
        assert_eq!(game.move_count(), 0);
        play(&mut game, &["e2e4", "e7e5", "g1f3"]);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "d7d5", "e4d5"]);
        game.reset();
        assert_eq!(game.to_fen(), crate::fen::STARTING_FEN);
        assert!(game.captured().is_empty());
        assert!(game.history().is_empty());
    }

    #[test]
    fn no_moves_after_threefold_repetition() {
        let mut game = Game::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        play(&mut game, &shuffle);
        play(&mut game, &shuffle);
        assert_eq!(
            game.status(),
            GameStatus::Draw(crate::status::DrawReason::ThreefoldRepetition)
        );

        let before = game.to_fen();
        let err = game.apply(MoveRequest::new(Square::E2, Square::E4));
        assert!(matches!(err, Err(GameError::GameOver(_))));
        assert_eq!(game.history().len(), 8);
        assert_eq!(game.to_fen(), before);
    }

    #[test]
    fn no_moves_after_checkmate() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        let err = game.apply(MoveRequest::new(Square::E2, Square::E4)).unwrap_err();
        assert_eq!(err.to_string(), "Game over: Checkmate! Black wins.");
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn invalid_fen_is_an_error() {
        assert!(matches!(
            Game::from_fen("not a fen"),
            Err(GameError::FenError(_))
        ));
    }
}
