use chess::{parse_square, parse_uci_move};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::GameSession;
use crate::ui::fsm::BoardEvent;
use crate::ui::theme::Theme;

/// Longest thing worth typing: a promotion like `e7e8q`.
const MAX_INPUT_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Keyboard handling with a small typed-input buffer.
///
/// Single-key commands only fire while the buffer is empty, so letters
/// that double as files or promotion pieces can still be typed.
#[derive(Debug, Clone, Default)]
pub struct KeyInput {
    buffer: String,
}

impl KeyInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn handle(&mut self, key: KeyEvent, session: &mut GameSession, theme: &mut Theme) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Esc => {
                self.buffer.clear();
                session.clear_selection();
            }
            KeyCode::Backspace => {
                self.buffer.pop();
            }
            KeyCode::Enter => self.submit(session),
            KeyCode::Char(c) if self.buffer.is_empty() && is_command(c) => {
                return run_command(c, session, theme);
            }
            KeyCode::Char(c) if c.is_ascii_alphanumeric() && self.buffer.len() < MAX_INPUT_LEN => {
                self.buffer.push(c.to_ascii_lowercase());
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn submit(&mut self, session: &mut GameSession) {
        let input = std::mem::take(&mut self.buffer);

        if let Some(sq) = parse_square(&input) {
            session.handle_board_event(BoardEvent::Click(sq));
        } else if let Some(request) = parse_uci_move(&input) {
            session.submit_move(request);
        } else if !input.is_empty() {
            tracing::debug!(input = %input, "Unrecognized input");
            session.set_status_message(format!("Not a square or move: {input}"));
        }
    }
}

fn is_command(c: char) -> bool {
    matches!(c, 'q' | 'n' | 't' | 'p')
}

fn run_command(c: char, session: &mut GameSession, theme: &mut Theme) -> AppAction {
    match c {
        'q' => return AppAction::Quit,
        'n' => session.new_game(),
        't' => {
            theme.toggle();
            tracing::debug!(theme = theme.name(), "Theme toggled");
        }
        'p' => {
            theme.cycle_glyphs();
            tracing::debug!(glyphs = theme.glyphs.name(), "Glyph set changed");
        }
        _ => {}
    }
    AppAction::Continue
}
