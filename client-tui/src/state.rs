use chess::{format_square, Game, GameError, GameStatus, HistoryEntry, MoveRequest, Square};

use crate::ui::fsm::{BoardEvent, SquareView, UiStateMachine};

/// One running game plus the interaction state layered over it.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    game: Game,
    fsm: UiStateMachine,
    status_message: Option<String>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position. Later new games use the standard start.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Self {
            game: Game::from_fen(fen)?,
            ..Self::default()
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn fsm(&self) -> &UiStateMachine {
        &self.fsm
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.game.history().last().map(|entry| (entry.from, entry.to))
    }

    pub fn board_view(&self) -> Vec<SquareView> {
        self.fsm.board_view(self.game.position(), self.last_move())
    }

    /// Route a gesture through the controller, committing any move it completes.
    pub fn handle_board_event(&mut self, event: BoardEvent) -> Option<HistoryEntry> {
        let request = self.fsm.handle(event, self.game.position());

        if let Some(request) = request {
            return self.submit_move(request);
        }
        self.status_message = self
            .fsm
            .selected()
            .map(|sq| format!("Selected {}", format_square(sq)));
        None
    }

    /// Hand a candidate move to the game. A rejection leaves the position
    /// untouched. Selection is cleared either way.
    pub fn submit_move(&mut self, request: MoveRequest) -> Option<HistoryEntry> {
        let result = self.game.apply(request);
        self.fsm.clear();

        match result {
            Ok(entry) => {
                tracing::info!(san = %entry.san, fen = %entry.fen, "Move played");
                self.status_message = Some(format!("Played {}", entry.san));
                Some(entry)
            }
            Err(e) => {
                tracing::warn!(request = %request, error = %e, "Move rejected");
                self.status_message = Some(e.to_string());
                None
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.fsm.clear();
        self.status_message = None;
    }

    /// Standard starting position, no history, no captures, no selection.
    pub fn new_game(&mut self) {
        self.game.reset();
        self.fsm.clear();
        self.status_message = Some("New game".to_string());
        tracing::info!("New game started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::STARTING_FEN;

    #[test]
    fn committed_move_updates_game_and_clears_selection() {
        let mut session = GameSession::new();
        session.handle_board_event(BoardEvent::Click(Square::E2));
        assert_eq!(session.status_message(), Some("Selected e2"));

        let entry = session.handle_board_event(BoardEvent::Click(Square::E4));
        assert_eq!(entry.map(|e| e.san), Some("e4".to_string()));
        assert_eq!(session.fsm().selected(), None);
        assert_eq!(session.last_move(), Some((Square::E2, Square::E4)));
        assert_eq!(session.status_message(), Some("Played e4"));
    }

    #[test]
    fn selection_message_goes_when_selection_does() {
        let mut session = GameSession::new();

        session.handle_board_event(BoardEvent::Click(Square::E2));
        session.handle_board_event(BoardEvent::Click(Square::E2));
        assert_eq!(session.status_message(), None);

        session.handle_board_event(BoardEvent::Click(Square::E2));
        session.handle_board_event(BoardEvent::Click(Square::H5));
        assert_eq!(session.status_message(), None);

        session.handle_board_event(BoardEvent::DragStart(Square::G1));
        assert_eq!(session.status_message(), Some("Selected g1"));
        session.handle_board_event(BoardEvent::Drop(Square::G1));
        assert_eq!(session.status_message(), None);

        session.handle_board_event(BoardEvent::DragStart(Square::B1));
        session.handle_board_event(BoardEvent::DragCancel);
        assert_eq!(session.status_message(), None);
    }

    #[test]
    fn rejected_move_keeps_position() {
        let mut session = GameSession::new();
        session.handle_board_event(BoardEvent::Click(Square::E2));

        let entry = session.submit_move(MoveRequest::new(Square::E2, Square::E5));
        assert!(entry.is_none());
        assert_eq!(session.game().to_fen(), STARTING_FEN);
        assert_eq!(session.fsm().selected(), None);
    }

    #[test]
    fn new_game_ignores_custom_start() {
        let mut session = GameSession::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        session.new_game();
        assert_eq!(session.game().to_fen(), STARTING_FEN);
    }

    #[test]
    fn bad_fen_is_rejected() {
        assert!(GameSession::from_fen("8/8/8").is_err());
    }
}
