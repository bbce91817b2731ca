use chess::{Piece, Square};

use crate::ui::theme::OverlayKind;

/// Per-square render input derived from the controller and the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<Piece>,
    pub is_light: bool,
    pub selected: bool,
    pub legal_target: bool,
    pub drag_origin: bool,
    /// `Some(is_legal)` while a dragged piece hovers this square.
    pub drag_over: Option<bool>,
    /// Holds a piece the side to move may pick up.
    pub movable: bool,
    pub last_move: bool,
}

impl SquareView {
    /// The strongest decoration that applies to this square.
    pub fn overlay(&self) -> Option<OverlayKind> {
        match self.drag_over {
            Some(true) => return Some(OverlayKind::DropLegal),
            Some(false) => return Some(OverlayKind::DropIllegal),
            None => {}
        }
        if self.selected {
            Some(OverlayKind::Selected)
        } else if self.legal_target {
            Some(OverlayKind::LegalMove)
        } else if self.last_move {
            Some(OverlayKind::LastMove)
        } else {
            None
        }
    }

    /// The piece is being carried elsewhere; draw the square without it.
    pub fn piece_lifted(&self) -> bool {
        self.drag_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(square: Square) -> SquareView {
        SquareView {
            square,
            piece: None,
            is_light: true,
            selected: false,
            legal_target: false,
            drag_origin: false,
            drag_over: None,
            movable: false,
            last_move: false,
        }
    }

    #[test]
    fn drag_hover_outranks_other_overlays() {
        let mut view = blank(Square::E4);
        view.legal_target = true;
        view.last_move = true;
        assert_eq!(view.overlay(), Some(OverlayKind::LegalMove));

        view.drag_over = Some(false);
        assert_eq!(view.overlay(), Some(OverlayKind::DropIllegal));
        view.drag_over = Some(true);
        assert_eq!(view.overlay(), Some(OverlayKind::DropLegal));
    }

    #[test]
    fn plain_square_has_no_overlay() {
        assert_eq!(blank(Square::A1).overlay(), None);
    }
}
