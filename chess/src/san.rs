//! Standard Algebraic Notation for committed moves.

use crate::converters::{file_char, format_square, rank_char};
use crate::position::{LegalMove, Position};
use crate::types::PieceKind;

/// Format `mv` as SAN. `before` is the position the move was played from,
/// `after` the position it produced (for the check and mate suffix).
pub fn format_san(
    before: &Position,
    mv: &LegalMove,
    promotion: Option<PieceKind>,
    after: &Position,
) -> String {
    let mut san = if mv.is_castle {
        if mv.to.file() as u8 > mv.from.file() as u8 {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        }
    } else {
        piece_move_text(before, mv, promotion)
    };

    if after.is_checkmate() {
        san.push('#');
    } else if after.is_check() {
        san.push('+');
    }

    san
}

fn piece_move_text(before: &Position, mv: &LegalMove, promotion: Option<PieceKind>) -> String {
    let mut san = String::new();

    match mv.piece {
        PieceKind::Pawn => {
            // Pawn captures include the origin file
            if mv.captured.is_some() {
                san.push(file_char(mv.from.file()));
            }
        }
        piece => {
            san.push(piece.to_char_upper());
            san.push_str(&disambiguation(before, mv));
        }
    }

    if mv.captured.is_some() {
        san.push('x');
    }

    san.push_str(&format_square(mv.to));

    if let Some(promo) = promotion.filter(|_| mv.is_promotion) {
        san.push('=');
        san.push(promo.to_char_upper());
    }

    san
}

/// File, rank, or both, when another piece of the same kind can reach the
/// same square.
fn disambiguation(before: &Position, mv: &LegalMove) -> String {
    let rivals: Vec<LegalMove> = before
        .legal_moves()
        .into_iter()
        .filter(|other| other.piece == mv.piece && other.to == mv.to && other.from != mv.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|r| r.from.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|r| r.from.rank() == mv.from.rank());

    if !shares_file {
        file_char(mv.from.file()).to_string()
    } else if !shares_rank {
        rank_char(mv.from.rank()).to_string()
    } else {
        format_square(mv.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uci::parse_uci_move;

    fn san_of(fen: &str, uci: &str) -> String {
        let before = Position::from_fen(fen).unwrap();
        let req = parse_uci_move(uci).unwrap();
        let mv = before.find_legal(req.from, req.to).unwrap();
        let promotion = req.promotion.or(mv.is_promotion.then_some(PieceKind::Queen));
        let after = before.play(&mv, promotion).unwrap();
        format_san(&before, &mv, promotion, &after)
    }

    const START: &str = crate::fen::STARTING_FEN;

    #[test]
    fn pawn_and_piece_moves() {
        assert_eq!(san_of(START, "e2e4"), "e4");
        assert_eq!(san_of(START, "g1f3"), "Nf3");
    }

    #[test]
    fn captures() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
        assert_eq!(san_of(fen, "e4d5"), "exd5");
    }

    #[test]
    fn castling() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san_of(fen, "e1g1"), "O-O");
        assert_eq!(san_of(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn file_disambiguation() {
        // Knights on b1 and f3 can both reach d2.
        let fen = "4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1";
        assert_eq!(san_of(fen, "b1d2"), "Nbd2");
    }

    #[test]
    fn rank_disambiguation() {
        // Rooks on a1 and a5 can both reach a3.
        let fen = "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1";
        assert_eq!(san_of(fen, "a1a3"), "R1a3");
    }

    #[test]
    fn promotion_and_mate_suffix() {
        assert_eq!(san_of("k7/4P3/1K6/8/8/8/8/8 w - - 0 1", "e7e8q"), "e8=Q#");
        assert_eq!(san_of("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7a8n"), "a8=N");
        assert_eq!(
            san_of(
                "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
                "d8h4"
            ),
            "Qh4#"
        );
    }

    #[test]
    fn check_suffix() {
        assert_eq!(san_of("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", "a1a8"), "Ra8+");
    }
}
