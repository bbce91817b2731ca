//! Chess rules adapter for ChessDuel.
//!
//! Move legality and check detection come from cozy-chess. This crate wraps
//! it in an immutable [`Position`], keeps the authoritative [`Game`], tracks
//! captured pieces and derives the status line.

pub mod captures;
pub mod converters;
pub mod fen;
pub mod game;
pub mod position;
pub mod san;
pub mod status;
pub mod types;
pub mod uci;

pub use captures::CapturedPieces;
pub use converters::*;
pub use fen::{FenError, STARTING_FEN};
pub use game::{Game, GameError, HistoryEntry, MoveRequest};
pub use position::{LegalMove, Position};
pub use status::{DrawReason, GameStatus};
pub use types::{Piece, PieceColor, PieceKind};
pub use uci::{format_uci_move, parse_uci_move};

pub use cozy_chess::Square;
