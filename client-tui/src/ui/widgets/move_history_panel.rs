use chess::HistoryEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub struct MoveHistoryPanel<'a> {
    pub history: &'a [HistoryEntry],
    pub theme: &'a Theme,
}

impl<'a> MoveHistoryPanel<'a> {
    pub fn new(history: &'a [HistoryEntry], theme: &'a Theme) -> Self {
        Self { history, theme }
    }
}

/// SAN pairs, one line per full move: `1. e4  e5`.
pub fn history_lines<'a>(history: &'a [HistoryEntry], theme: &Theme) -> Vec<Line<'a>> {
    let san_style = |white: bool| {
        let color = if white { theme.text_primary } else { theme.text_secondary };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut spans = vec![Span::styled(
                format!("{}. ", i + 1),
                Style::default().fg(theme.warning),
            )];
            spans.push(Span::styled(pair[0].san.as_str(), san_style(true)));
            if let Some(black) = pair.get(1) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(black.san.as_str(), san_style(false)));
            }
            Line::from(spans)
        })
        .collect()
}

impl Widget for MoveHistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Moves ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.history.is_empty() {
            Paragraph::new("No moves yet")
                .style(Style::default().fg(self.theme.muted))
                .render(inner, buf);
            return;
        }

        let lines = history_lines(self.history, self.theme);
        // Keep the latest moves in view.
        let overflow = (lines.len() as u16).saturating_sub(inner.height);
        Paragraph::new(lines).scroll((overflow, 0)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{parse_uci_move, Game};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn pairs_moves_by_number() {
        let mut game = Game::new();
        for m in ["e2e4", "e7e5", "g1f3"] {
            game.apply(parse_uci_move(m).unwrap()).unwrap();
        }

        let theme = Theme::dark();
        let lines = history_lines(game.history(), &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "1. e4  e5");
        assert_eq!(line_text(&lines[1]), "2. Nf3");
    }
}
