//! Immutable position adapter over cozy-chess.
//!
//! cozy-chess answers legality and check questions. Repetition, insufficient
//! material and the fifty-move rule are derived here from its board queries.

use cozy_chess::{Board, Move, Piece as CozyPiece, Square};

use crate::converters::is_light_square;
use crate::fen::{format_fen, parse_fen, FenError};
use crate::game::GameError;
use crate::types::{Piece, PieceColor, PieceKind};
use crate::uci::{castle_king_destination, format_uci_move, is_cozy_castle};

/// A move the rules engine certifies as legal in a specific position.
///
/// Promotions appear once per origin/destination pair; the piece is chosen
/// when the move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Square,
    /// Destination as the player sees it. For castling this is the king's
    /// landing square (g1, c1, g8, c8).
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub is_promotion: bool,
    pub is_castle: bool,
    pub is_en_passant: bool,
    /// Destination in cozy-chess encoding (the rook square when castling).
    engine_to: Square,
}

impl LegalMove {
    fn engine_move(&self, promotion: Option<PieceKind>) -> Move {
        Move {
            from: self.from,
            to: self.engine_to,
            promotion: if self.is_promotion {
                promotion.map(Into::into)
            } else {
                None
            },
        }
    }
}

/// A complete game position: board placement, side to move, castling and
/// en-passant rights, clocks, and the positions seen since the last
/// irreversible move.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    /// Hashes of earlier positions reachable by repetition.
    seen: Vec<u64>,
}

impl Position {
    /// The standard starting position.
    pub fn start() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen).map(Self::from_board)
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            seen: Vec::new(),
        }
    }

    pub fn to_fen(&self) -> String {
        format_fen(&self.board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let kind = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(kind.into(), color.into()))
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.board.side_to_move().into()
    }

    /// True if `sq` holds a piece belonging to the side to move.
    pub fn is_own_piece(&self, sq: Square) -> bool {
        self.piece_at(sq)
            .is_some_and(|p| p.color == self.side_to_move())
    }

    pub fn halfmove_clock(&self) -> u8 {
        self.board.halfmove_clock()
    }

    /// Every legal move in the position.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        let mut raw = Vec::new();
        self.board.generate_moves(|moves| {
            raw.extend(moves);
            false
        });

        raw.into_iter()
            // One entry per promotion square; the queen variant stands in for all four.
            .filter(|mv| matches!(mv.promotion, None | Some(CozyPiece::Queen)))
            .filter_map(|mv| self.describe(mv))
            .collect()
    }

    /// Legal moves whose origin is `from`. Empty for empty squares and for
    /// the side not to move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<LegalMove> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .collect()
    }

    /// Look up a legal move by origin and player-facing destination.
    pub fn find_legal(&self, from: Square, to: Square) -> Option<LegalMove> {
        self.legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.to == to)
    }

    fn describe(&self, mv: Move) -> Option<LegalMove> {
        let piece: PieceKind = self.board.piece_on(mv.from)?.into();
        let is_castle = is_cozy_castle(&self.board, mv);
        let is_en_passant = piece == PieceKind::Pawn
            && mv.from.file() != mv.to.file()
            && self.board.piece_on(mv.to).is_none();

        let captured = if is_castle {
            None
        } else if is_en_passant {
            Some(PieceKind::Pawn)
        } else {
            self.board.piece_on(mv.to).map(Into::into)
        };

        let to = if is_castle {
            castle_king_destination(mv)
        } else {
            mv.to
        };

        Some(LegalMove {
            from: mv.from,
            to,
            piece,
            captured,
            is_promotion: mv.promotion.is_some(),
            is_castle,
            is_en_passant,
            engine_to: mv.to,
        })
    }

    /// Play a legal move, producing the next position. `self` is untouched,
    /// so a rejected move leaves the caller's position as it was.
    ///
    /// A promotion move without a promotion piece is rejected.
    pub fn play(&self, mv: &LegalMove, promotion: Option<PieceKind>) -> Result<Position, GameError> {
        let engine_move = mv.engine_move(promotion);
        if !self.board.is_legal(engine_move) {
            return Err(GameError::IllegalMove(format_uci_move(mv.from, mv.to, promotion)));
        }

        let mut next = self.clone();
        next.board.play_unchecked(engine_move);

        if next.halfmove_clock() == 0 {
            // Captures and pawn moves make earlier positions unreachable.
            next.seen.clear();
        } else {
            next.seen.push(self.board.hash());
        }

        Ok(next)
    }

    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn has_legal_moves(&self) -> bool {
        // The listener aborts generation as soon as one move is found.
        self.board.generate_moves(|moves| !moves.to.is_empty())
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    /// The current position has occurred at least twice before.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.seen.iter().filter(|&&h| h == current).count() >= 2
    }

    /// Neither side can deliver mate: K v K, K+minor v K, or kings plus
    /// bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let total = board.occupied().len();
        if total == 2 {
            return true;
        }

        let knights = board.pieces(CozyPiece::Knight).len();
        let bishops = board.pieces(CozyPiece::Bishop);
        if total == 3 && (knights == 1 || bishops.len() == 1) {
            return true;
        }

        if total == bishops.len() + 2 {
            let light = bishops.into_iter().filter(|&sq| is_light_square(sq)).count() as u32;
            return light == 0 || light == bishops.len();
        }

        false
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100 && self.has_legal_moves()
    }

    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
            || self.is_fifty_move_draw()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}
