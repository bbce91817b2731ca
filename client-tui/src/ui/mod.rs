// UI modules
pub mod fsm;
pub mod theme;
pub mod widgets;

// Input translation
pub mod input;
pub mod pointer;

pub mod render_loop;

pub use render_loop::run_app;
