use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use tracing::warn;

use super::*;

const TICK_RATE: std::time::Duration = std::time::Duration::from_millis(250);

impl App {
    /// Forward terminal input to the action channel until the token is
    /// cancelled.
    pub fn handle_events(&self) -> tokio::task::JoinHandle<()> {
        let tx = self.action_tx.clone();
        let token = self.token.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(TICK_RATE);
            loop {
                let action = tokio::select! {
                    _ = token.cancelled() => break,
                    _ = tick.tick() => Some(Action::Tick),
                    event = reader.next() => match event {
                        Some(Ok(event)) => map_event(event),
                        Some(Err(err)) => {
                            warn!("terminal input error: {err}");
                            None
                        }
                        None => break,
                    },
                };
                if let Some(action) = action {
                    if tx.send(action).is_err() {
                        break;
                    }
                }
            }
        })
    }
}

fn map_event(event: TermEvent) -> Option<Action> {
    match event {
        // crossterm also emits key release and repeat events on Windows
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key),
        TermEvent::Mouse(mouse) => handle_mouse_event(mouse),
        _ => None,
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Exit,
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::NewGame,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::DeleteChar,

        // Enter words; the session reports anything that is not a letter
        KeyCode::Char(x) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::EnterChar(x),
        _ => return None,
    };
    Some(action)
}

fn handle_mouse_event(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> TermEvent {
        TermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            map_event(press(KeyCode::Char('a'), none)),
            Some(Action::EnterChar('a'))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::EnterChar('A'))
        );
        assert_eq!(map_event(press(KeyCode::Enter, none)), Some(Action::Submit));
        assert_eq!(
            map_event(press(KeyCode::Backspace, none)),
            Some(Action::DeleteChar)
        );
        assert_eq!(map_event(press(KeyCode::Esc, none)), Some(Action::Exit));
        assert_eq!(
            map_event(press(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::NewGame)
        );
        assert_eq!(
            map_event(press(KeyCode::Char('1'), none)),
            Some(Action::EnterChar('1'))
        );
        assert_eq!(map_event(press(KeyCode::Char('a'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_event(press(KeyCode::Tab, none)), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(TermEvent::Key(release)), None);
    }

    #[test]
    fn left_clicks() {
        let click = |kind| {
            TermEvent::Mouse(MouseEvent {
                kind,
                column: 12,
                row: 30,
                modifiers: KeyModifiers::NONE,
            })
        };
        let left = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(map_event(click(left)), Some(Action::Click { column: 12, row: 30 }));
        assert_eq!(map_event(click(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(map_event(click(MouseEventKind::Moved)), None);
    }
}
