//! Pieces removed from the board during one game.

use crate::types::{Piece, PieceColor};

/// Two append-only collections keyed by the color of the captured piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    lost_by_white: Vec<Piece>,
    lost_by_black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a captured piece under its own color.
    pub fn record(&mut self, piece: Piece) {
        match piece.color {
            PieceColor::White => self.lost_by_white.push(piece),
            PieceColor::Black => self.lost_by_black.push(piece),
        }
    }

    /// Pieces `color` has lost, in capture order.
    pub fn lost_by(&self, color: PieceColor) -> &[Piece] {
        match color {
            PieceColor::White => &self.lost_by_white,
            PieceColor::Black => &self.lost_by_black,
        }
    }

    /// Pieces `color` has lost, pawns first and queens last. Stable within a kind.
    pub fn sorted(&self, color: PieceColor) -> Vec<Piece> {
        let mut pieces = self.lost_by(color).to_vec();
        pieces.sort_by_key(|p| p.kind.display_priority());
        pieces
    }

    /// Material value `color` has lost.
    pub fn material(&self, color: PieceColor) -> u32 {
        self.lost_by(color)
            .iter()
            .map(|p| p.kind.material_value())
            .sum()
    }

    /// Material advantage of White in pawns; negative when Black is ahead.
    pub fn balance(&self) -> i32 {
        self.material(PieceColor::Black) as i32 - self.material(PieceColor::White) as i32
    }

    pub fn is_empty(&self) -> bool {
        self.lost_by_white.is_empty() && self.lost_by_black.is_empty()
    }

    pub fn clear(&mut self) {
        self.lost_by_white.clear();
        self.lost_by_black.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, PieceColor::Black)
    }

    #[test]
    fn record_files_by_captured_color() {
        let mut captured = CapturedPieces::new();
        captured.record(black(PieceKind::Knight));
        captured.record(Piece::new(PieceKind::Pawn, PieceColor::White));

        assert_eq!(captured.lost_by(PieceColor::Black), &[black(PieceKind::Knight)]);
        assert_eq!(captured.lost_by(PieceColor::White).len(), 1);
    }

    #[test]
    fn sorted_uses_display_priority() {
        let mut captured = CapturedPieces::new();
        for kind in [
            PieceKind::Queen,
            PieceKind::Pawn,
            PieceKind::Rook,
            PieceKind::Pawn,
            PieceKind::Bishop,
        ] {
            captured.record(black(kind));
        }
        let kinds: Vec<_> = captured
            .sorted(PieceColor::Black)
            .iter()
            .map(|p| p.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                PieceKind::Pawn,
                PieceKind::Pawn,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
            ]
        );
        // Capture order is preserved underneath.
        assert_eq!(captured.lost_by(PieceColor::Black)[0].kind, PieceKind::Queen);
    }

    #[test]
    fn material_and_balance() {
        let mut captured = CapturedPieces::new();
        captured.record(black(PieceKind::Rook));
        captured.record(Piece::new(PieceKind::Knight, PieceColor::White));
        assert_eq!(captured.material(PieceColor::Black), 5);
        assert_eq!(captured.material(PieceColor::White), 3);
        assert_eq!(captured.balance(), 2);
    }

    #[test]
    fn clear_empties_both_sides() {
        let mut captured = CapturedPieces::new();
        captured.record(black(PieceKind::Pawn));
        captured.record(Piece::new(PieceKind::Pawn, PieceColor::White));
        captured.clear();
        assert!(captured.is_empty());
    }
}
