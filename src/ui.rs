// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod quit_confirm;

use crate::controller::{Screen, ScreenController};
use crate::reply::ReplySource;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draws the whole screen and hands the resulting list width and send
/// button area back to the controller.
pub fn draw<R: ReplySource>(f: &mut Frame<'_>, controller: &mut ScreenController<R>) {
    let [header_area, messages_area, input_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Messages
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .areas(f.area());

    let input_layout = chat::input_layout(input_area);
    controller.update_layout(messages_area, input_layout.button);

    header::draw_header(f, header_area, controller.conversation().len());
    chat::draw_messages(f, messages_area, controller.presenter());
    chat::draw_input(f, input_layout, controller.input(), controller.screen());
    footer::draw_footer(f, footer_area, controller.screen());

    if controller.screen() == Screen::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, centered(f.area(), 40, 5));
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};

    const WIDTH: u16 = 40;
    const HEIGHT: u16 = 16;

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..HEIGHT)
            .map(|y| {
                (0..WIDTH)
                    .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                    .collect::<String>()
            })
            .collect()
    }

    fn send(controller: &mut ScreenController, text: &str) {
        for c in text.chars() {
            controller.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        controller.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn test_draws_bubbles_on_their_sides() {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        let mut controller = ScreenController::with_prefix("Reply to: ");
        send(&mut controller, "hello");

        terminal.draw(|f| draw(f, &mut controller)).unwrap();
        let rows = rows(&terminal);

        assert!(rows.iter().any(|row| row.ends_with("│ hello │")));
        assert!(rows.iter().any(|row| row.starts_with("│ Reply to: hello │")));
        assert!(rows.iter().any(|row| row.contains("[ Send ]")));
    }

    #[test]
    fn test_draw_records_send_button() {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        let mut controller = ScreenController::with_prefix("Reply to: ");
        terminal.draw(|f| draw(f, &mut controller)).unwrap();

        let rows = rows(&terminal);
        let (row, line) = rows
            .iter()
            .enumerate()
            .find(|(_, line)| line.contains("[ Send ]"))
            .unwrap();
        let byte = line.find("[ Send ]").unwrap();
        let column = line[..byte].chars().count();

        for c in "via mouse".chars() {
            controller.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        controller.handle_mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: column as u16 + 2,
            row: row as u16,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });

        assert_eq!(controller.conversation().len(), 2);
    }

    #[test]
    fn test_quit_confirm_popup() {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        let mut controller = ScreenController::with_prefix("Reply to: ");
        controller.handle_key(KeyEvent::from(KeyCode::Esc));

        terminal.draw(|f| draw(f, &mut controller)).unwrap();

        assert!(rows(&terminal).iter().any(|row| row.contains("Leave the chat?")));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 4);
        assert_eq!(centered(area, 40, 5), Rect::new(0, 0, 20, 4));
        assert_eq!(centered(Rect::new(0, 0, 40, 10), 20, 4), Rect::new(10, 3, 20, 4));
    }
}
