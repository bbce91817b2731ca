//! Human-readable game status derived from a position.

use crate::position::Position;
use crate::types::PieceColor;

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    FiftyMoveRule,
}

/// Status of a position. The first matching condition wins:
/// checkmate, then any draw, then check, then the plain turn indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Checkmate { winner: PieceColor },
    Draw(DrawReason),
    Check { side: PieceColor },
    Turn { side: PieceColor },
}

impl GameStatus {
    pub fn of(position: &Position) -> Self {
        let side = position.side_to_move();

        if position.is_checkmate() {
            return Self::Checkmate { winner: !side };
        }
        if let Some(reason) = draw_reason(position) {
            return Self::Draw(reason);
        }
        if position.is_check() {
            return Self::Check { side };
        }
        Self::Turn { side }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Checkmate { .. } | Self::Draw(_))
    }

    pub fn text(self) -> String {
        match self {
            Self::Checkmate { winner } => format!("Checkmate! {} wins.", winner.name()),
            Self::Draw(DrawReason::Stalemate) => "Stalemate!".to_string(),
            Self::Draw(DrawReason::ThreefoldRepetition) => {
                "Draw by Threefold Repetition!".to_string()
            }
            Self::Draw(DrawReason::InsufficientMaterial) => {
                "Draw by Insufficient Material!".to_string()
            }
            Self::Draw(DrawReason::FiftyMoveRule) => "Draw!".to_string(),
            Self::Check { .. } => "Check!".to_string(),
            Self::Turn { side } => format!("{}'s Turn", side.name()),
        }
    }
}

fn draw_reason(position: &Position) -> Option<DrawReason> {
    if position.is_stalemate() {
        Some(DrawReason::Stalemate)
    } else if position.is_threefold_repetition() {
        Some(DrawReason::ThreefoldRepetition)
    } else if position.is_insufficient_material() {
        Some(DrawReason::InsufficientMaterial)
    } else if position.is_fifty_move_draw() {
        Some(DrawReason::FiftyMoveRule)
    } else {
        None
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}
