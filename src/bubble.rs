use crate::constants::{
    BUBBLE_WIDTH_RATIO, LIGHT_HORIZONTAL, LIGHT_VERTICAL, MIN_BUBBLE_WIDTH, ROUND_DOWN_AND_LEFT,
    ROUND_DOWN_AND_RIGHT, ROUND_UP_AND_LEFT, ROUND_UP_AND_RIGHT,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// The two visual layouts a message can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BubbleTemplate {
    Sent,
    Received,
}

impl BubbleTemplate {
    fn border_style(self) -> Style {
        match self {
            BubbleTemplate::Sent => Style::default().fg(Color::Rgb(255, 223, 128)),
            BubbleTemplate::Received => Style::default().fg(Color::Rgb(144, 238, 144)),
        }
    }

    fn text_style(self) -> Style {
        match self {
            BubbleTemplate::Sent => Style::default().fg(Color::White),
            BubbleTemplate::Received => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// A template instance with its single text field filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    template: BubbleTemplate,
    text: String,
}

impl Bubble {
    pub fn new(template: BubbleTemplate, text: impl Into<String>) -> Self {
        Self {
            template,
            text: text.into(),
        }
    }

    pub fn template(&self) -> BubbleTemplate {
        self.template
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Draws the bubble for a list `width` columns wide. Sent bubbles hug
    /// the right edge, received bubbles the left.
    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let (num, den) = BUBBLE_WIDTH_RATIO;
        let max_outer = (width.saturating_mul(num) / den).max(MIN_BUBBLE_WIDTH);
        let wrap_width = (max_outer as usize).saturating_sub(4).max(1);

        let wrapped: Vec<String> = wrap(&self.text, wrap_width)
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        let content_width = wrapped
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0);

        let box_width = content_width + 4;
        let indent = match self.template {
            BubbleTemplate::Sent => " ".repeat((width as usize).saturating_sub(box_width)),
            BubbleTemplate::Received => String::new(),
        };

        let border = self.template.border_style();
        let text_style = self.template.text_style();
        let rule: String = std::iter::repeat(LIGHT_HORIZONTAL)
            .take(content_width + 2)
            .collect();

        let mut lines = Vec::with_capacity(wrapped.len() + 2);
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                format!("{}{}{}", ROUND_DOWN_AND_RIGHT, rule, ROUND_DOWN_AND_LEFT),
                border,
            ),
        ]));

        for text_line in wrapped {
            let padding = " ".repeat(content_width - text_line.width());
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(format!("{} ", LIGHT_VERTICAL), border),
                Span::styled(text_line, text_style),
                Span::raw(padding),
                Span::styled(format!(" {}", LIGHT_VERTICAL), border),
            ]));
        }

        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(
                format!("{}{}{}", ROUND_UP_AND_RIGHT, rule, ROUND_UP_AND_LEFT),
                border,
            ),
        ]));

        lines
    }
}
