use chess::{file_char, rank_char, square_at, Square};
use cozy_chess::{File, Rank};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::fsm::{DragState, SquareView};
use crate::ui::theme::Theme;

/// Rank labels sit left of the squares.
const LABEL_WIDTH: u16 = 3;
/// File labels sit below the squares.
const LABEL_HEIGHT: u16 = 1;

/// Square sizes in cells, largest first. Odd sizes keep the glyph centered.
const SQUARE_SIZES: [(u16, u16); 4] = [(11, 5), (9, 5), (7, 3), (5, 3)];
const SMALLEST_SQUARE: (u16, u16) = (3, 1);

/// Where the squares landed on screen for a given board area.
///
/// Rendering and mouse hit-testing both derive this from the same `Rect`,
/// so a click always maps to the square drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub square_width: u16,
    pub square_height: u16,
}

impl BoardGeometry {
    pub fn for_area(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let available_width = inner.width.saturating_sub(LABEL_WIDTH);
        let available_height = inner.height.saturating_sub(LABEL_HEIGHT);

        let (square_width, square_height) = SQUARE_SIZES
            .iter()
            .copied()
            .find(|&(w, h)| w * 8 <= available_width && h * 8 <= available_height)
            .unwrap_or(SMALLEST_SQUARE);

        let total_width = square_width * 8 + LABEL_WIDTH;
        let total_height = square_height * 8 + LABEL_HEIGHT;

        Self {
            origin_x: inner.x + inner.width.saturating_sub(total_width) / 2 + LABEL_WIDTH,
            origin_y: inner.y + inner.height.saturating_sub(total_height) / 2,
            square_width,
            square_height,
        }
    }

    /// Screen rectangle of the square at grid `row` (0 = rank 8) and `col` (0 = file a).
    pub fn square_rect(&self, row: u16, col: u16) -> Rect {
        Rect::new(
            self.origin_x + col * self.square_width,
            self.origin_y + row * self.square_height,
            self.square_width,
            self.square_height,
        )
    }

    /// Hit-test a terminal cell.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let col = (column - self.origin_x) / self.square_width;
        let row = (row - self.origin_y) / self.square_height;
        if col >= 8 || row >= 8 {
            return None;
        }
        square_at(row as usize, col as usize)
    }
}

pub struct BoardWidget<'a> {
    pub views: &'a [SquareView],
    pub drag: Option<&'a DragState>,
    pub theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(views: &'a [SquareView], drag: Option<&'a DragState>, theme: &'a Theme) -> Self {
        Self { views, drag, theme }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.board_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let geometry = BoardGeometry::for_area(area);
        let fits = |rect: Rect| rect.right() <= inner.right() && rect.bottom() <= inner.bottom();

        for (idx, view) in self.views.iter().enumerate() {
            let (row, col) = ((idx / 8) as u16, (idx % 8) as u16);
            let rect = geometry.square_rect(row, col);
            if !fits(rect) {
                continue;
            }
            self.render_square(view, rect, buf);
        }

        let label_style = Style::default().fg(theme.board_label);
        for row in 0..8u16 {
            let rect = geometry.square_rect(row, 0);
            let label = rank_char(Rank::index(7 - row as usize));
            if rect.bottom() <= inner.bottom() && rect.x >= inner.x + 2 {
                buf.set_string(rect.x - 2, rect.y + rect.height / 2, label.to_string(), label_style);
            }
        }
        for col in 0..8u16 {
            let rect = geometry.square_rect(7, col);
            let label = file_char(File::index(col as usize));
            let y = rect.bottom();
            if y < inner.bottom() && rect.right() <= inner.right() {
                buf.set_string(rect.x + rect.width / 2, y, label.to_string(), label_style);
            }
        }
    }
}

impl BoardWidget<'_> {
    fn render_square(&self, view: &SquareView, rect: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let bg = theme.square_bg(view.is_light, view.overlay());
        buf.set_style(rect, Style::default().bg(bg));

        let center_x = rect.x + rect.width / 2;
        let center_y = rect.y + rect.height / 2;

        // A hovered square shows the piece being carried.
        let hovering = self.drag.filter(|_| view.drag_over.is_some());
        let (piece, bold, dimmed) = match hovering {
            Some(drag) => (Some(drag.piece), true, false),
            None => (view.piece, view.movable, view.piece_lifted()),
        };

        match piece {
            Some(piece) => {
                let mut style = Style::default().fg(theme.piece_fg(piece.color)).bg(bg);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if dimmed {
                    style = style.add_modifier(Modifier::DIM);
                }
                buf.set_string(center_x, center_y, theme.glyph(piece), style);
            }
            None if view.legal_target => {
                buf.set_string(center_x, center_y, "·", Style::default().fg(theme.muted).bg(bg));
            }
            None => {}
        }
    }
}
