use std::io::{self, stdout, Stdout};
use std::time::Instant;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{execute, terminal::*};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::session::{Notice, Session};

pub use actions::Action;

mod actions;
mod events;
mod ui;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// A notice on screen since `shown_at`.
struct Toast {
    notice: Notice,
    shown_at: Instant,
}

pub struct App {
    exit: bool,
    session: Session,
    toast: Option<Toast>,
    /// Size of the last drawn frame, used to hit-test mouse clicks
    area: Rect,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    token: CancellationToken,
}

impl App {
    pub fn new(session: Session) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        App {
            exit: false,
            session,
            toast: None,
            area: Rect::default(),
            action_tx,
            action_rx,
            token: CancellationToken::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let task = self.handle_events();

        while !self.exit {
            self.area = terminal.size()?;
            terminal.draw(|frame| self.render_frame(frame))?;

            match self.action_rx.recv().await {
                Some(action) => self.update(action).await,
                None => break,
            }
        }
        self.token.cancel();
        join_input(task).await;
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}

/// Wait for the input task; returns `false` if it panicked.
async fn join_input(task: JoinHandle<()>) -> bool {
    match task.await {
        Ok(()) => true,
        Err(err) => {
            warn!("input task failed: {err}");
            false
        }
    }
}
