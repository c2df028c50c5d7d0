use std::time::{Duration, Instant};

use tracing::debug;

use super::*;
use crate::session::Event;
use crate::view::VirtualKey;

/// How long a notice stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(2);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Exit,
    Tick,
    EnterChar(char),
    DeleteChar,
    Submit,
    NewGame,
    Click { column: u16, row: u16 },
}

impl From<VirtualKey> for Action {
    fn from(key: VirtualKey) -> Self {
        match key {
            VirtualKey::Letter(c) => Action::EnterChar(c),
            VirtualKey::Enter => Action::Submit,
            VirtualKey::Backspace => Action::DeleteChar,
        }
    }
}

impl App {
    pub async fn update(&mut self, action: Action) {
        // On-screen keys behave exactly like their physical counterparts
        let action = match action {
            Action::Click { column, row } => {
                let key = ui::key_at(self.area, column, row);
                debug!(column, row, ?key, "click");
                match key {
                    Some(key) => Action::from(key),
                    None => return,
                }
            }
            action => action,
        };

        let event = match action {
            Action::Exit => {
                self.token.cancel();
                self.exit = true;
                None
            }
            Action::Tick => {
                self.expire_toast(Instant::now());
                None
            }
            Action::EnterChar(c) => Some(Event::Letter(c)),
            Action::DeleteChar => Some(Event::Delete),
            // Enter on a finished game is the shortcut for a new one
            Action::Submit if self.session.game().is_over() => Some(Event::NewGame),
            Action::Submit => Some(Event::Submit),
            Action::NewGame => Some(Event::NewGame),
            Action::Click { .. } => None,
        };

        if let Some(event) = event {
            if let Some(notice) = self.session.dispatch(event).await {
                self.show(notice);
            } else if event == Event::NewGame {
                self.toast = None;
            }
        }
    }

    fn show(&mut self, notice: Notice) {
        self.toast = Some(Toast {
            notice,
            shown_at: Instant::now(),
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            // The final result stays until the next game
            if self.session.game().is_over() {
                return;
            }
            if now.duration_since(toast.shown_at) >= TOAST_LIFETIME {
                self.toast = None;
            }
        }
    }
}
