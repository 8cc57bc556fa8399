use crate::constants::SEND_BUTTON_LABEL;
use crate::controller::Screen;
use crate::input::InputField;
use crate::presenter::ListPresenter;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Areas making up the input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLayout {
    pub frame: Rect,
    pub field: Rect,
    pub button: Rect,
}

pub fn input_layout(area: Rect) -> InputLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let [field, _gap, button] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(SEND_BUTTON_LABEL.width() as u16),
        ])
        .areas(inner);

    InputLayout {
        frame: area,
        field,
        button,
    }
}

pub fn draw_messages(f: &mut Frame<'_>, area: Rect, presenter: &ListPresenter) {
    if presenter.row_count() == 0 {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No messages yet. Type below and press Enter.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center);
        f.render_widget(hint, area);
        return;
    }

    let scroll = presenter.visible_scroll();
    let messages = Paragraph::new(presenter.lines()).scroll((scroll, 0));
    f.render_widget(messages, area);
}

pub fn draw_input(f: &mut Frame<'_>, layout: InputLayout, input: &InputField, screen: Screen) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Message")
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(block, layout.frame);

    // Keep the cursor inside the field by scrolling the text horizontally.
    let before_cursor: String = input.text().chars().take(input.cursor()).collect();
    let cursor_offset = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
    let scroll_offset = cursor_offset.saturating_sub(layout.field.width.saturating_sub(1));

    let text = Paragraph::new(input.text())
        .style(Style::default().fg(Color::White))
        .scroll((0, scroll_offset));
    f.render_widget(text, layout.field);

    let button_style = if input.text().trim().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Span::styled(SEND_BUTTON_LABEL, button_style)),
        layout.button,
    );

    if screen == Screen::Chat {
        f.set_cursor_position((
            layout
                .field
                .x
                .saturating_add(cursor_offset - scroll_offset),
            layout.field.y,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_layout_places_button_on_the_right() {
        let layout = input_layout(Rect::new(0, 10, 40, 3));

        assert_eq!(layout.button, Rect::new(31, 11, 8, 1));
        assert_eq!(layout.field, Rect::new(1, 11, 29, 1));
    }

    #[test]
    fn test_very_long_input_keeps_cursor_in_field() {
        use ratatui::{backend::TestBackend, Terminal};

        let input = InputField::from("x".repeat(70_000).as_str());
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let layout = input_layout(Rect::new(0, 0, 40, 3));

        terminal
            .draw(|f| draw_input(f, layout, &input, Screen::Chat))
            .unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.y, layout.field.y);
        assert!(cursor.x >= layout.field.x);
        assert!(cursor.x < layout.field.x + layout.field.width);
    }
}
