use ratatui::{
    prelude::*,
    widgets::{block::*, *},
};

use super::App;
use crate::game::{CellClass, GameStatus};
use crate::session::Severity;
use crate::view::{derive_view, keyboard_layout, Cell, KeyCap, RenderModel, VirtualKey};
use crate::wordle::{LetterStatus, MAX_ATTEMPTS, NLETTER};

const TILE_HEIGHT: u16 = 3;
const TILE_WIDTH: u16 = 7;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 9;
const MESSAGE_HEIGHT: u16 = 3;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = derive_view(self.session.game());
        let border = self.create_border();
        let [board, message, keyboard] = sections(area);

        render_board(&model, board, buf);
        self.render_message(&model, message, buf);
        render_keyboard(&model, keyboard, buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Wordle ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            " Submit ".into(),
            "<Enter> ".blue().bold(),
            " New game ".into(),
            "<Ctrl-N> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(block::Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_message(&self, model: &RenderModel, area: Rect, buf: &mut Buffer) {
        let line: Line = match &self.toast {
            Some(toast) => {
                let style = match toast.notice.severity {
                    Severity::Info => Style::new().light_green().bold(),
                    Severity::Warning => Style::new().light_yellow(),
                    Severity::Error => Style::new().light_red().bold(),
                };
                Line::styled(toast.notice.message.clone(), style)
            }
            None => match (model.status, model.revealed) {
                (GameStatus::Playing, _) | (_, None) => Line::from(
                    format!("Attempt {} of {}", model.attempts + 1, MAX_ATTEMPTS).dark_gray(),
                ),
                (GameStatus::Won, Some(_)) => Line::from(vec![
                    "You guessed it! ".light_green().bold(),
                    "<Enter> ".blue().bold(),
                    "to play again".into(),
                ]),
                (GameStatus::Lost, Some(word)) => Line::from(vec![
                    "The word was ".into(),
                    word.to_string().bold().magenta(),
                    ". ".into(),
                    "<Enter> ".blue().bold(),
                    "to play again".into(),
                ]),
            },
        };
        Paragraph::new(line)
            .centered()
            .block(Block::new().padding(Padding::new(0, 0, 1, 0)))
            .render(area, buf);
    }
}

/// Board, message line and keyboard inside the border.
fn sections(area: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(TILE_HEIGHT * MAX_ATTEMPTS as u16),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(TILE_HEIGHT * keyboard_layout().len() as u16),
            Constraint::Fill(1),
        ])
        .split(inner);
    [rows[0], rows[1], rows[2]]
}

fn key_width(key: VirtualKey) -> u16 {
    match key {
        VirtualKey::Letter(_) => KEY_WIDTH,
        VirtualKey::Enter | VirtualKey::Backspace => WIDE_KEY_WIDTH,
    }
}

/// Where every on-screen key is drawn inside the keyboard section.
fn key_areas(keyboard: Rect) -> Vec<(Rect, VirtualKey)> {
    let key_rows = keyboard_layout();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); key_rows.len()])
        .split(keyboard);

    key_rows
        .into_iter()
        .zip(rows.iter())
        .flat_map(|(keys, &row)| {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(keys.iter().map(|&k| Constraint::Length(key_width(k))))
                .flex(layout::Flex::Center)
                .split(row);
            cells.iter().copied().zip(keys).collect::<Vec<_>>()
        })
        .collect()
}

/// The on-screen key under a mouse click in a frame of size `area`.
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<VirtualKey> {
    let [_, _, keyboard] = sections(area);
    key_areas(keyboard)
        .into_iter()
        .find(|(r, _)| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .map(|(_, key)| key)
}

fn render_board(model: &RenderModel, area: Rect, buf: &mut Buffer) {
    let word_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); MAX_ATTEMPTS])
        .split(area);
    for (i, cells) in model.rows.iter().enumerate() {
        let row_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(TILE_WIDTH); NLETTER])
            .flex(layout::Flex::Center)
            .split(word_rows[i]);
        let active = model.active_row == Some(i);
        for (cell, &tile) in cells.iter().zip(row_layout.iter()) {
            render_tile(cell, active, tile, buf);
        }
    }
}

fn class_style(class: CellClass) -> Style {
    match class {
        CellClass::Empty => Style::default(),
        CellClass::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
        CellClass::Present => Style::default().bg(Color::LightYellow).fg(Color::Black),
        CellClass::Correct => Style::default()
            .bg(Color::LightGreen)
            .fg(Color::Black)
            .bold(),
    }
}

fn render_tile(cell: &Cell, active: bool, area: Rect, buf: &mut Buffer) {
    let border_style = match (active, cell.letter) {
        (true, Some(_)) => Style::default().white(),
        (true, None) => Style::default().gray(),
        (false, _) => Style::default().dark_gray(),
    };
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let letter = cell.letter.map(String::from).unwrap_or_default();
    Paragraph::new(letter)
        .style(class_style(cell.class))
        .bold()
        .centered()
        .block(block)
        .render(area, buf);
}

fn render_keyboard(model: &RenderModel, area: Rect, buf: &mut Buffer) {
    let caps = model.keyboard.iter().flatten();
    for ((key_area, _), cap) in key_areas(area).into_iter().zip(caps) {
        render_key(cap, key_area, buf);
    }
}

fn render_key(cap: &KeyCap, area: Rect, buf: &mut Buffer) {
    let style = match cap.status {
        None => Style::default(),
        Some(LetterStatus::Absent) => class_style(CellClass::Absent).fg(Color::Gray),
        Some(status) => class_style(status.into()),
    };
    Paragraph::new(cap.key.label())
        .centered()
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().dark_gray()),
        )
        .style(style)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::Session;
    use crate::tui::Action;
    use crate::wordle::{Scoring, Word};
    use crate::words::StaticWords;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    async fn app(target: &str) -> App {
        let words = StaticWords::new(vec![Word::parse(target).unwrap()]).unwrap();
        let session = Session::start(Arc::new(words), None, Scoring::Simple)
            .await
            .unwrap();
        let mut app = App::new(session);
        app.area = SCREEN;
        app
    }

    fn center_of(key: VirtualKey) -> (u16, u16) {
        let [_, _, keyboard] = sections(SCREEN);
        let (r, _) = key_areas(keyboard)
            .into_iter()
            .find(|(_, k)| *k == key)
            .unwrap();
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn every_key_has_its_own_area() {
        let [_, _, keyboard] = sections(SCREEN);
        let areas = key_areas(keyboard);
        assert_eq!(areas.len(), 28);
        for (i, (a, _)) in areas.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for (b, _) in &areas[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn clicks_hit_keys() {
        for key in [
            VirtualKey::Letter('Q'),
            VirtualKey::Letter('M'),
            VirtualKey::Enter,
            VirtualKey::Backspace,
        ] {
            let (x, y) = center_of(key);
            assert_eq!(key_at(SCREEN, x, y), Some(key));
        }
        assert_eq!(key_at(SCREEN, 0, 0), None);
        assert_eq!(key_at(SCREEN, 40, 5), None);
    }

    #[tokio::test]
    async fn clicking_the_virtual_keyboard_plays() {
        let mut app = app("CRISP").await;
        for c in "CRISP".chars() {
            let (column, row) = center_of(VirtualKey::Letter(c));
            app.update(Action::Click { column, row }).await;
        }
        assert_eq!(app.session.game().current_guess(), "CRISP");

        let (column, row) = center_of(VirtualKey::Backspace);
        app.update(Action::Click { column, row }).await;
        assert_eq!(app.session.game().current_guess(), "CRIS");

        app.update(Action::EnterChar('p')).await;
        let (column, row) = center_of(VirtualKey::Enter);
        app.update(Action::Click { column, row }).await;
        assert_eq!(app.session.game().status(), GameStatus::Won);
    }

    #[tokio::test]
    async fn clicking_enter_after_a_win_starts_a_new_game() {
        let mut app = app("CRISP").await;
        for c in "crisp".chars() {
            app.update(Action::EnterChar(c)).await;
        }
        app.update(Action::Submit).await;
        assert_eq!(app.session.game().status(), GameStatus::Won);

        let (column, row) = center_of(VirtualKey::Enter);
        app.update(Action::Click { column, row }).await;
        assert_eq!(app.session.game().status(), GameStatus::Playing);
        assert!(app.session.game().guesses().is_empty());
    }

    #[tokio::test]
    async fn clicking_outside_the_keyboard_does_nothing() {
        let mut app = app("CRISP").await;
        app.update(Action::EnterChar('c')).await;
        app.update(Action::Click { column: 0, row: 0 }).await;
        assert_eq!(app.session.game().current_guess(), "C");
        assert!(app.toast.is_none());
    }

    #[tokio::test]
    async fn renders_board_and_keyboard() {
        let mut app = app("SHORE").await;
        for c in "TRUST".chars() {
            app.update(Action::EnterChar(c)).await;
        }
        app.update(Action::Submit).await;
        app.update(Action::EnterChar('h')).await;

        let mut buf = Buffer::empty(SCREEN);
        (&app).render(SCREEN, &mut buf);
        let screen = text(&buf);
        assert!(screen.contains("Wordle"));
        assert!(screen.contains("ENTER"));
        assert!(screen.contains("DEL"));
        assert!(screen.contains("Attempt 2 of 6"));

        let (x, y) = center_of(VirtualKey::Letter('R'));
        assert_eq!(buf.get(x, y).bg, Color::LightYellow);
        let (x, y) = center_of(VirtualKey::Letter('U'));
        assert_eq!(buf.get(x, y).bg, Color::DarkGray);
        let (x, y) = center_of(VirtualKey::Letter('Q'));
        assert_eq!(buf.get(x, y).bg, Color::Reset);
    }

    #[tokio::test]
    async fn renders_notices() {
        let mut app = app("SHORE").await;
        app.update(Action::EnterChar('s')).await;
        app.update(Action::Submit).await;

        let mut buf = Buffer::empty(SCREEN);
        (&app).render(SCREEN, &mut buf);
        assert!(text(&buf).contains("Word must be 5 letters long"));
    }
}
