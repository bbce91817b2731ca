//! String and grid conversions for squares and pieces.

use cozy_chess::{File, Piece, Rank, Square};

/// Format a square as "e4".
pub fn format_square(sq: Square) -> String {
    format!("{}{}", file_char(sq.file()), rank_char(sq.rank()))
}

/// Parse "e4" into a square. Case-insensitive on the file letter.
pub fn parse_square(s: &str) -> Option<Square> {
    let mut chars = s.trim().chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    let file = File::index(file as usize - 'a' as usize);
    let rank = Rank::index(rank as usize - '1' as usize);
    Some(Square::new(file, rank))
}

/// Lowercase piece letter, as used in coordinate notation ("e7e8q").
pub fn format_piece(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

pub fn file_char(file: File) -> char {
    (b'a' + file as u8) as char
}

pub fn rank_char(rank: Rank) -> char {
    (b'1' + rank as u8) as char
}

/// Square shown at a visual grid cell. Row 0 is the top row, column 0 the
/// left column, seen from White's side: row 0 col 0 is a8.
pub fn square_at(row: usize, col: usize) -> Option<Square> {
    if row > 7 || col > 7 {
        return None;
    }
    Some(Square::new(File::index(col), Rank::index(7 - row)))
}

/// Inverse of [`square_at`]: `(row, col)` of a square.
pub fn grid_position(sq: Square) -> (usize, usize) {
    (7 - sq.rank() as usize, sq.file() as usize)
}

/// a1 is dark, h1 is light.
pub fn is_light_square(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 1
}
