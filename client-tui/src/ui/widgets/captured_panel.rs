use chess::{CapturedPieces, PieceColor};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Pieces each side has lost, in display order, plus the material balance.
pub struct CapturedPanel<'a> {
    pub captured: &'a CapturedPieces,
    pub theme: &'a Theme,
}

impl<'a> CapturedPanel<'a> {
    pub fn new(captured: &'a CapturedPieces, theme: &'a Theme) -> Self {
        Self { captured, theme }
    }

    fn row(&self, color: PieceColor) -> Line<'static> {
        let theme = self.theme;
        let glyphs: String = self
            .captured
            .sorted(color)
            .into_iter()
            .map(|p| theme.glyph(p))
            .collect();

        Line::from(vec![
            Span::styled(
                format!("{} lost: ", color.name()),
                Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
            ),
            Span::styled(glyphs, Style::default().fg(theme.text_primary)),
        ])
    }

    fn balance(&self) -> Line<'static> {
        let theme = self.theme;
        let text = match self.captured.balance() {
            0 => "Material: even".to_string(),
            n if n > 0 => format!("Material: White +{n}"),
            n => format!("Material: Black +{}", -n),
        };
        Line::styled(text, Style::default().fg(theme.text_secondary))
    }
}

impl Widget for CapturedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Captured ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            self.row(PieceColor::White),
            self.row(PieceColor::Black),
            self.balance(),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
