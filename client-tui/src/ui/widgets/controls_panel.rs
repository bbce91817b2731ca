use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

const KEYS: [(&str, &str); 6] = [
    ("n", "New game"),
    ("Esc", "Clear"),
    ("t", "Theme"),
    ("p", "Pieces"),
    ("q", "Quit"),
    ("e2e4⏎", "Move"),
];

/// Typed input on the left, key hints after it.
pub struct ControlsPanel<'a> {
    pub input_buffer: &'a str,
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(input_buffer: &'a str, theme: &'a Theme) -> Self {
        Self {
            input_buffer,
            theme,
        }
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(" Controls ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(
                "> ",
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<6}", self.input_buffer),
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        for (key, action) in KEYS {
            spans.push(Span::styled(
                format!(" {key} "),
                Style::default().fg(theme.positive).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(action, Style::default().fg(theme.muted)));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
