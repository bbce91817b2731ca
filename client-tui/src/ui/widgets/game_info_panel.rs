use chess::GameStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::state::GameSession;
use crate::ui::fsm::InputPhase;
use crate::ui::theme::Theme;

pub struct GameInfoPanel<'a> {
    pub session: &'a GameSession,
    pub theme: &'a Theme,
}

impl<'a> GameInfoPanel<'a> {
    pub fn new(session: &'a GameSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    fn status_color(&self, status: GameStatus) -> Color {
        match status {
            GameStatus::Checkmate { .. } => self.theme.negative,
            GameStatus::Draw(_) => self.theme.info,
            GameStatus::Check { .. } => self.theme.warning,
            GameStatus::Turn { .. } => self.theme.positive,
        }
    }
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default().fg(theme.info).add_modifier(Modifier::BOLD);
        let status = self.session.status();
        let game = self.session.game();

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    status.text(),
                    Style::default()
                        .fg(self.status_color(status))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("Move: {}", game.move_count()),
                    Style::default().fg(theme.text_secondary),
                ),
            ]),
            Line::raw(""),
        ];

        let phase = match self.session.fsm().phase() {
            InputPhase::Idle => "Select a piece".to_string(),
            InputPhase::Selected(sq) => format!("{sq} selected"),
            InputPhase::Dragging(sq) => format!("Dragging from {sq}"),
        };
        lines.push(Line::from(vec![
            Span::styled("Input: ", label),
            Span::styled(phase, Style::default().fg(theme.text_primary)),
        ]));

        lines.push(Line::from(vec![
            Span::styled("Theme: ", label),
            Span::styled(
                format!("{} / {}", theme.name(), theme.glyphs.name()),
                Style::default().fg(theme.text_primary),
            ),
        ]));

        if let Some(message) = self.session.status_message() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                message.to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
