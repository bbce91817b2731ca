//! Coordinate ("UCI-style") move notation.
//!
//! cozy-chess encodes castling as the king capturing its own rook (e1h1);
//! everything user-facing uses the king's landing square instead (e1g1).

use cozy_chess::{Board, File, Move, Piece, Square};

use crate::converters::{format_piece, format_square, parse_square};
use crate::game::MoveRequest;
use crate::types::PieceKind;

/// True when `mv` is cozy-chess's king-takes-own-rook castling encoding.
pub fn is_cozy_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King)
        && board.piece_on(mv.to) == Some(Piece::Rook)
        && board.color_on(mv.to) == board.color_on(mv.from)
}

/// Square the king lands on for a castling move in cozy-chess encoding.
///
/// Kingside rooks (to the king's right) land the king on the g-file,
/// queenside rooks on the c-file.
pub fn castle_king_destination(mv: Move) -> Square {
    let file = if mv.to.file() as u8 > mv.from.file() as u8 {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

/// Format a move in coordinate notation (e.g., "e2e4", "e7e8q").
pub fn format_uci_move(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut s = format!("{}{}", format_square(from), format_square(to));
    if let Some(promo) = promotion {
        s.push(format_piece(promo.into()));
    }
    s
}

/// Parse "e2e4" / "e7e8q" into a candidate move.
pub fn parse_uci_move(input: &str) -> Option<MoveRequest> {
    let input = input.trim();
    if !input.is_ascii() || !(4..=5).contains(&input.len()) {
        return None;
    }
    let from = parse_square(&input[0..2])?;
    let to = parse_square(&input[2..4])?;
    let promotion = match input[4..].chars().next() {
        Some(c) => match PieceKind::from_char(c)? {
            PieceKind::Pawn | PieceKind::King => return None,
            kind => Some(kind),
        },
        None => None,
    };
    Some(MoveRequest {
        from,
        to,
        promotion,
    })
}
