use cozy_chess::Board;

/// Standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a Board
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 4 || parts[0].split('/').count() != 8 {
        return Err(FenError::InvalidFormat);
    }

    fen.trim()
        .parse()
        .map_err(|e| FenError::InvalidPosition(format!("{:?}", e)))
}

/// Format a Board as a FEN string
pub fn format_fen(board: &Board) -> String {
    board.to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("Invalid FEN format")]
    InvalidFormat,
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_fen_matches_default_board() {
        let board = parse_fen(STARTING_FEN).unwrap();
        assert_eq!(format_fen(&board), format_fen(&Board::default()));
        assert_eq!(format_fen(&board), STARTING_FEN);
    }

    #[test]
    fn rejects_truncated_fen() {
        assert!(matches!(parse_fen(""), Err(FenError::InvalidFormat)));
        assert!(matches!(
            parse_fen("8/8/8/8 w - -"),
            Err(FenError::InvalidFormat)
        ));
    }

    #[test]
    fn rejects_impossible_position() {
        // No kings at all.
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPosition(_))
        ));
    }
}
