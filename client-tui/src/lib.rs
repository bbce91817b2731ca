pub mod config;
pub mod state;
pub mod ui;

pub use state::GameSession;
pub use ui::fsm;
pub use ui::widgets;
