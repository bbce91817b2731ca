use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};

use crate::config::Config;
use crate::state::GameSession;
use crate::ui::input::{AppAction, KeyInput};
use crate::ui::pointer::PointerTracker;
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    BoardGeometry, BoardWidget, CapturedPanel, ControlsPanel, GameInfoPanel, MoveHistoryPanel,
};

/// Everything the loop owns between events.
struct App {
    session: GameSession,
    theme: Theme,
    keys: KeyInput,
    pointer: PointerTracker,
    /// Board area from the last frame, for mouse hit-testing.
    board_area: Rect,
}

pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let session = match &config.fen {
        Some(fen) => GameSession::from_fen(fen).context("Invalid start position")?,
        None => GameSession::new(),
    };
    let mut app = App {
        session,
        theme: Theme::new(config.theme, config.glyphs),
        keys: KeyInput::new(),
        pointer: PointerTracker::new(),
        board_area: Rect::default(),
    };

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_ui_loop(&mut terminal, &mut app).await;

    // Restore terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_ui_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let mut term_events = EventStream::new();

    // Redraw tick; input wakes the loop immediately via select!.
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal.draw(|f| draw(f, app))?;

        let term_event = tokio::select! {
            biased;

            maybe_event = term_events.next() => match maybe_event {
                Some(Ok(ev)) => Some(ev),
                Some(Err(e)) => {
                    tracing::warn!("Terminal event error: {}", e);
                    None
                }
                None => return Ok(()),
            },

            _ = tick.tick() => None,
        };

        let Some(event) = term_event else {
            continue;
        };

        match event {
            Event::Key(key) => {
                if app.keys.handle(key, &mut app.session, &mut app.theme) == AppAction::Quit {
                    tracing::info!("Quit requested");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let geometry = BoardGeometry::for_area(app.board_area);
                for board_event in app.pointer.handle(mouse, &geometry) {
                    app.session.handle_board_event(board_event);
                }
            }
            _ => {}
        }
    }
}

fn draw(f: &mut Frame, app: &mut App) {
    let [main, controls] = Layout::vertical([Constraint::Min(10), Constraint::Length(3)]).areas(f.area());
    let [board, side] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(main);
    let [info, captured, history] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Min(4),
    ])
    .areas(side);

    app.board_area = board;

    let session = &app.session;
    let theme = &app.theme;
    let views = session.board_view();

    f.render_widget(BoardWidget::new(&views, session.fsm().drag(), theme), board);
    f.render_widget(GameInfoPanel::new(session, theme), info);
    f.render_widget(CapturedPanel::new(session.game().captured(), theme), captured);
    f.render_widget(MoveHistoryPanel::new(session.game().history(), theme), history);
    f.render_widget(ControlsPanel::new(app.keys.buffer(), theme), controls);
}
