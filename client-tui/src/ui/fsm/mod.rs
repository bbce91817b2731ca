//! Selection and drag controller.
//!
//! Turns square-level gestures into selection changes or candidate moves.
//! The controller never touches the game; it only reads the current
//! [`Position`] and hands back a [`MoveRequest`] when a gesture completes.

pub mod square_view;

pub use square_view::SquareView;

use chess::{is_light_square, square_at, LegalMove, MoveRequest, Piece, Position, Square};

/// Square-level gestures, already resolved from raw terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Click(Square),
    DragStart(Square),
    DragOver(Square),
    Drop(Square),
    /// The drag ended somewhere that is not a square.
    DragCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPhase {
    #[default]
    Idle,
    Selected(Square),
    Dragging(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub origin: Square,
    pub piece: Piece,
    pub hover: Option<Square>,
    pub hover_is_legal: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UiStateMachine {
    selected: Option<Square>,
    legal_moves: Vec<LegalMove>,
    drag: Option<DragState>,
}

impl UiStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> InputPhase {
        match (self.drag, self.selected) {
            (Some(drag), _) => InputPhase::Dragging(drag.origin),
            (None, Some(sq)) => InputPhase::Selected(sq),
            (None, None) => InputPhase::Idle,
        }
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Moves available from the selected square; empty when nothing is selected.
    pub fn legal_moves(&self) -> &[LegalMove] {
        &self.legal_moves
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_legal_target(&self, sq: Square) -> bool {
        self.legal_moves.iter().any(|m| m.to == sq)
    }

    /// Feed one gesture through the state machine.
    ///
    /// Returns a candidate move when the gesture completes one. The caller
    /// is expected to submit it and then call [`clear`](Self::clear).
    pub fn handle(&mut self, event: BoardEvent, position: &Position) -> Option<MoveRequest> {
        match event {
            BoardEvent::Click(sq) => self.on_click(sq, position),
            BoardEvent::DragStart(sq) => {
                self.on_drag_start(sq, position);
                None
            }
            BoardEvent::DragOver(sq) => {
                self.on_drag_over(sq);
                None
            }
            BoardEvent::Drop(sq) => self.on_drop(sq),
            BoardEvent::DragCancel => {
                if self.drag.is_none() {
                    tracing::debug!("Drag cancel without an active drag");
                }
                self.clear();
                None
            }
        }
    }

    /// Drop selection, drag and the legal-move set.
    pub fn clear(&mut self) {
        self.selected = None;
        self.legal_moves.clear();
        self.drag = None;
    }

    fn on_click(&mut self, sq: Square, position: &Position) -> Option<MoveRequest> {
        if self.drag.take().is_some() {
            tracing::debug!(square = %sq, "Click during drag; drag discarded");
        }

        let Some(from) = self.selected else {
            self.select(sq, position);
            return None;
        };

        if sq == from {
            self.clear();
            return None;
        }
        if self.is_legal_target(sq) {
            self.clear();
            return Some(MoveRequest::new(from, sq));
        }
        if !self.select(sq, position) {
            self.clear();
        }
        None
    }

    fn on_drag_start(&mut self, sq: Square, position: &Position) {
        if !self.select(sq, position) {
            tracing::debug!(square = %sq, "Drag start ignored");
            return;
        }
        if let Some(piece) = position.piece_at(sq) {
            self.drag = Some(DragState {
                origin: sq,
                piece,
                hover: None,
                hover_is_legal: false,
            });
        }
    }

    fn on_drag_over(&mut self, sq: Square) {
        let is_legal = self.is_legal_target(sq);
        match self.drag.as_mut() {
            Some(drag) => {
                drag.hover = Some(sq);
                drag.hover_is_legal = is_legal;
            }
            None => {
                tracing::debug!(square = %sq, "Drag over without an active drag");
                self.clear();
            }
        }
    }

    fn on_drop(&mut self, sq: Square) -> Option<MoveRequest> {
        let drag = self.drag.take();
        let request = match drag {
            Some(drag) if self.is_legal_target(sq) => Some(MoveRequest::new(drag.origin, sq)),
            Some(_) => None,
            None => {
                tracing::debug!(square = %sq, "Drop without an active drag");
                None
            }
        };
        self.clear();
        request
    }

    /// Select `sq` if it holds a piece of the side to move and the game is
    /// still running. Returns whether the selection took.
    fn select(&mut self, sq: Square, position: &Position) -> bool {
        if !position.is_own_piece(sq) || position.is_game_over() {
            return false;
        }
        self.selected = Some(sq);
        self.legal_moves = position.legal_moves_from(sq);
        true
    }

    /// Everything the renderer needs to know about one square.
    pub fn square_view(
        &self,
        sq: Square,
        position: &Position,
        last_move: Option<(Square, Square)>,
        game_over: bool,
    ) -> SquareView {
        let piece = position.piece_at(sq);
        let drag_over = self
            .drag
            .filter(|d| d.hover == Some(sq))
            .map(|d| d.hover_is_legal);

        SquareView {
            square: sq,
            piece,
            is_light: is_light_square(sq),
            selected: self.selected == Some(sq),
            legal_target: self.is_legal_target(sq),
            drag_origin: self.drag.is_some_and(|d| d.origin == sq),
            drag_over,
            movable: !game_over && piece.is_some_and(|p| p.color == position.side_to_move()),
            last_move: last_move.is_some_and(|(from, to)| from == sq || to == sq),
        }
    }

    /// Views for all 64 squares, row-major from a8 to h1.
    pub fn board_view(&self, position: &Position, last_move: Option<(Square, Square)>) -> Vec<SquareView> {
        let game_over = position.is_game_over();
        (0..8)
            .flat_map(|row| (0..8).map(move |col| (row, col)))
            .filter_map(|(row, col)| square_at(row, col))
            .map(|sq| self.square_view(sq, position, last_move, game_over))
            .collect()
    }
}
