use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::ui::fsm::BoardEvent;
use crate::ui::widgets::BoardGeometry;
use chess::Square;

/// Turns raw terminal mouse events into square-level [`BoardEvent`]s.
///
/// A press that is released on the same square is a click. A drag only
/// begins once the pointer leaves the square it was pressed on.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    press: Option<Square>,
    dragging: bool,
    hover: Option<Square>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: MouseEvent, geometry: &BoardGeometry) -> Vec<BoardEvent> {
        let over = geometry.square_at(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = over;
                self.dragging = false;
                self.hover = over;
                Vec::new()
            }
            MouseEventKind::Drag(MouseButton::Left) => self.on_drag(over),
            MouseEventKind::Up(MouseButton::Left) => self.on_release(over),
            _ => Vec::new(),
        }
    }

    fn on_drag(&mut self, over: Option<Square>) -> Vec<BoardEvent> {
        let Some(press) = self.press else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if !self.dragging {
            if over == Some(press) {
                return events;
            }
            self.dragging = true;
            events.push(BoardEvent::DragStart(press));
            self.hover = None;
        }

        if over != self.hover {
            self.hover = over;
            if let Some(sq) = over {
                events.push(BoardEvent::DragOver(sq));
            }
        }
        events
    }

    fn on_release(&mut self, over: Option<Square>) -> Vec<BoardEvent> {
        let press = self.press.take();
        let was_dragging = std::mem::take(&mut self.dragging);
        self.hover = None;

        if was_dragging {
            return vec![match over {
                Some(sq) => BoardEvent::Drop(sq),
                None => BoardEvent::DragCancel,
            }];
        }
        match press {
            Some(sq) if over == Some(sq) => vec![BoardEvent::Click(sq)],
            _ => Vec::new(),
        }
    }
}
