use crate::controller::Screen;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, screen: Screen) {
    let footer = Paragraph::new(instructions(screen))
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}

fn instructions(screen: Screen) -> &'static str {
    match screen {
        Screen::Chat => "Enter or [ Send ] to send, PgUp/PgDn to scroll, Esc to quit.",
        Screen::QuitConfirm => "Press 'y' to quit or 'n' to go back.",
    }
}
