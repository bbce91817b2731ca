pub mod board;
pub mod captured_panel;
pub mod controls_panel;
pub mod game_info_panel;
pub mod move_history_panel;

pub use board::{BoardGeometry, BoardWidget};
pub use captured_panel::CapturedPanel;
pub use controls_panel::ControlsPanel;
pub use game_info_panel::GameInfoPanel;
pub use move_history_panel::MoveHistoryPanel;
