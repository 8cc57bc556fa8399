use crate::bubble::{Bubble, BubbleTemplate};
use crate::conversation::{Conversation, ConversationObserver, Origin};
use ratatui::text::Line;

/// Picks the bubble layout for an entry's origin.
pub fn template_for(origin: Origin) -> BubbleTemplate {
    match origin {
        Origin::Sent => BubbleTemplate::Sent,
        Origin::Received => BubbleTemplate::Received,
    }
}

/// Binds conversation entries to bubbles and keeps one rendered row per
/// entry. Rows are only re-rendered when their entry is added or the list
/// width changes.
#[derive(Debug)]
pub struct ListPresenter {
    width: u16,
    height: u16,
    rows: Vec<Vec<Line<'static>>>,
    follow_tail: bool,
    // Lines scrolled up from the bottom when not following the tail.
    scroll_back: u16,
}

impl Default for ListPresenter {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            rows: Vec::new(),
            follow_tail: true,
            scroll_back: 0,
        }
    }
}

impl ListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self, conversation: &Conversation) -> usize {
        conversation.len()
    }

    pub fn item_template(&self, conversation: &Conversation, index: usize) -> Option<BubbleTemplate> {
        conversation
            .get(index)
            .map(|entry| template_for(entry.origin()))
    }

    pub fn bind(&self, conversation: &Conversation, index: usize) -> Option<Bubble> {
        conversation
            .get(index)
            .map(|entry| Bubble::new(template_for(entry.origin()), entry.text()))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Re-renders every row if `width` differs from the last one used.
    pub fn set_width(&mut self, conversation: &Conversation, width: u16) {
        if width == self.width && self.rows.len() == conversation.len() {
            return;
        }
        log::trace!(
            "re-rendering {} rows for width {} (was {})",
            conversation.len(),
            width,
            self.width
        );
        self.width = width;
        self.rows = (0..conversation.len())
            .filter_map(|index| self.bind(conversation, index))
            .map(|bubble| bubble.render(width))
            .collect();
    }

    /// Records how many lines of the list are visible at once.
    pub fn set_viewport_height(&mut self, height: u16) {
        self.height = height;
        self.scroll_back = self.scroll_back.min(self.max_scroll());
    }

    pub fn viewport_height(&self) -> u16 {
        self.height
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rendered rows, separated by a blank line.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for row in &self.rows {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.extend(row.iter().cloned());
        }
        lines
    }

    pub fn total_height(&self) -> u16 {
        let rows: usize = self.rows.iter().map(Vec::len).sum();
        let gaps = self.rows.len().saturating_sub(1);
        u16::try_from(rows + gaps).unwrap_or(u16::MAX)
    }

    pub fn is_following_tail(&self) -> bool {
        self.follow_tail
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow_tail = false;
        self.scroll_back = self
            .scroll_back
            .saturating_add(lines)
            .min(self.max_scroll());
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
        if self.scroll_back == 0 {
            self.follow_tail = true;
        }
    }

    fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.height)
    }

    /// Top line offset to hand to the list paragraph.
    pub fn visible_scroll(&self) -> u16 {
        let max_scroll = self.max_scroll();
        if self.follow_tail {
            max_scroll
        } else {
            max_scroll.saturating_sub(self.scroll_back)
        }
    }
}

impl ConversationObserver for ListPresenter {
    fn entry_added(&mut self, conversation: &Conversation, index: usize) {
        // A gap means rows were never rendered for this conversation.
        if index != self.rows.len() {
            let width = self.width;
            self.rows.clear();
            self.set_width(conversation, width);
        } else if let Some(bubble) = self.bind(conversation, index) {
            self.rows.push(bubble.render(self.width));
        }
        self.follow_tail = true;
        self.scroll_back = 0;
    }
}
