// src/controller.rs

use crate::conversation::{ChatEntry, Conversation};
use crate::input::InputField;
use crate::presenter::ListPresenter;
use crate::reply::{PrefixReply, ReplySource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

const PAGE_SCROLL: u16 = 5;
const WHEEL_SCROLL: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    ProcessingSend,
}

/// Which screen the keyboard is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    QuitConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was empty after trimming; nothing changed.
    Ignored,
    Sent { sent_index: usize, reply_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerAction {
    Continue,
    Quit,
}

/// Owns the conversation and everything that reacts to it.
pub struct ScreenController<R: ReplySource = PrefixReply> {
    conversation: Conversation,
    presenter: ListPresenter,
    input: InputField,
    replies: R,
    state: ControllerState,
    screen: Screen,
    send_button: Option<Rect>,
}

impl ScreenController<PrefixReply> {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(PrefixReply::new(prefix))
    }
}

impl<R: ReplySource> ScreenController<R> {
    pub fn new(replies: R) -> Self {
        Self {
            conversation: Conversation::new(),
            presenter: ListPresenter::new(),
            input: InputField::new(),
            replies,
            state: ControllerState::Idle,
            screen: Screen::Chat,
            send_button: None,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn presenter(&self) -> &ListPresenter {
        &self.presenter
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Sends whatever is in the input. Runs to completion before returning.
    pub fn send(&mut self) -> SendOutcome {
        let text = self.input.text().trim().to_string();
        if text.is_empty() {
            log::debug!("ignoring empty send");
            return SendOutcome::Ignored;
        }

        self.state = ControllerState::ProcessingSend;

        let sent_index = self
            .conversation
            .append_and_notify(ChatEntry::sent(text.clone()), &mut self.presenter);
        self.input.clear();

        let reply = self.replies.reply(&text);
        let reply_index = self
            .conversation
            .append_and_notify(ChatEntry::received(reply), &mut self.presenter);

        self.state = ControllerState::Idle;
        log::debug!(
            "sent entry {} with reply {}, conversation length {}",
            sent_index,
            reply_index,
            self.conversation.len()
        );

        SendOutcome::Sent {
            sent_index,
            reply_index,
        }
    }

    /// Called by the draw pass with the list area and the send button area.
    pub fn update_layout(&mut self, list_area: Rect, send_button: Rect) {
        self.presenter.set_width(&self.conversation, list_area.width);
        self.presenter.set_viewport_height(list_area.height);
        self.send_button = Some(send_button);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ControllerAction {
        match self.screen {
            Screen::Chat => self.handle_chat_key(key),
            Screen::QuitConfirm => self.handle_quit_confirm_key(key),
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> ControllerAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ControllerAction::Quit;
            }
            KeyCode::Esc => self.screen = Screen::QuitConfirm,
            KeyCode::Enter => {
                self.send();
            }
            KeyCode::PageUp => self.presenter.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.presenter.scroll_down(PAGE_SCROLL),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c)
            }
            _ => {}
        }
        ControllerAction::Continue
    }

    fn handle_quit_confirm_key(&mut self, key: KeyEvent) -> ControllerAction {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => return ControllerAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ControllerAction::Quit;
            }
            KeyCode::Char('n') | KeyCode::Esc => self.screen = Screen::Chat,
            _ => {}
        }
        ControllerAction::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Chat {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .send_button
                    .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
                if hit {
                    self.send();
                }
            }
            MouseEventKind::ScrollUp => self.presenter.scroll_up(WHEEL_SCROLL),
            MouseEventKind::ScrollDown => self.presenter.scroll_down(WHEEL_SCROLL),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Origin;

    fn controller() -> ScreenController {
        ScreenController::new(PrefixReply::default())
    }

    fn type_text(controller: &mut ScreenController, text: &str) {
        for c in text.chars() {
            controller.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn entries(controller: &ScreenController) -> Vec<(String, Origin)> {
        controller
            .conversation()
            .iter()
            .map(|entry| (entry.text().to_string(), entry.origin()))
            .collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_send_hello_appends_entry_and_reply() {
        let mut controller = controller();
        type_text(&mut controller, "hello");

        let outcome = controller.send();

        assert_eq!(
            outcome,
            SendOutcome::Sent {
                sent_index: 0,
                reply_index: 1
            }
        );
        assert_eq!(
            entries(&controller),
            vec![
                ("hello".to_string(), Origin::Sent),
                ("Reply to: hello".to_string(), Origin::Received),
            ]
        );
        assert!(controller.input().is_empty());
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_whitespace_only_input_is_ignored() {
        let mut controller = controller();
        type_text(&mut controller, "   ");

        assert_eq!(controller.send(), SendOutcome::Ignored);
        assert!(controller.conversation().is_empty());
        assert_eq!(controller.presenter().row_count(), 0);
        // Ignored sends leave the field as typed.
        assert_eq!(controller.input().text(), "   ");
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut controller = controller();
        assert_eq!(controller.send(), SendOutcome::Ignored);
        assert_eq!(controller.conversation().len(), 0);
    }

    #[test]
    fn test_sequential_sends_keep_order() {
        let mut controller = controller();
        type_text(&mut controller, "a");
        controller.handle_key(KeyEvent::from(KeyCode::Enter));
        type_text(&mut controller, "b");
        controller.handle_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(
            entries(&controller),
            vec![
                ("a".to_string(), Origin::Sent),
                ("Reply to: a".to_string(), Origin::Received),
                ("b".to_string(), Origin::Sent),
                ("Reply to: b".to_string(), Origin::Received),
            ]
        );
    }

    #[test]
    fn test_sent_text_is_trimmed() {
        let mut controller = controller();
        type_text(&mut controller, "  hi there \t");
        controller.send();
        assert_eq!(
            entries(&controller),
            vec![
                ("hi there".to_string(), Origin::Sent),
                ("Reply to: hi there".to_string(), Origin::Received),
            ]
        );
    }

    #[test]
    fn test_presenter_tracks_every_append() {
        let mut controller = controller();
        controller.update_layout(Rect::new(0, 1, 40, 8), Rect::new(30, 10, 8, 1));
        for text in ["one", "two", "three"] {
            type_text(&mut controller, text);
            controller.send();
        }
        assert_eq!(
            controller.presenter().row_count(),
            controller.conversation().len()
        );
        assert_eq!(controller.conversation().len(), 6);
    }

    struct Shouting;

    impl ReplySource for Shouting {
        fn reply(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_custom_reply_source() {
        let mut controller = ScreenController::new(Shouting);
        for c in "quiet".chars() {
            controller.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        controller.send();
        assert_eq!(controller.conversation().get(1).map(|e| e.text()), Some("QUIET"));
    }

    #[test]
    fn test_page_down_after_scrolling_to_top_moves_view() {
        let mut controller = controller();
        controller.update_layout(Rect::new(0, 1, 30, 5), Rect::new(20, 8, 8, 1));
        for text in ["a", "b", "c", "d"] {
            type_text(&mut controller, text);
            controller.send();
        }
        let bottom = controller.presenter().visible_scroll();
        assert!(bottom > 0);

        for _ in 0..20 {
            controller.handle_key(KeyEvent::from(KeyCode::PageUp));
        }
        assert_eq!(controller.presenter().visible_scroll(), 0);

        controller.handle_key(KeyEvent::from(KeyCode::PageDown));
        assert_eq!(controller.presenter().visible_scroll(), PAGE_SCROLL);
    }

    #[test]
    fn test_click_on_send_button_sends() {
        let mut controller = controller();
        controller.update_layout(Rect::new(0, 1, 40, 8), Rect::new(30, 10, 8, 1));
        type_text(&mut controller, "clicked");

        controller.handle_mouse(click(5, 10));
        assert!(controller.conversation().is_empty());

        controller.handle_mouse(click(33, 10));
        assert_eq!(controller.conversation().len(), 2);
    }

    #[test]
    fn test_click_before_first_draw_is_ignored() {
        let mut controller = controller();
        type_text(&mut controller, "early");
        controller.handle_mouse(click(0, 0));
        assert!(controller.conversation().is_empty());
    }

    #[test]
    fn test_ctrl_chars_do_not_edit_input() {
        let mut controller = controller();
        controller.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(controller.input().is_empty());
        assert_eq!(
            controller.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ControllerAction::Quit
        );
    }

    #[test]
    fn test_quit_confirm_flow() {
        let mut controller = controller();
        assert_eq!(
            controller.handle_key(KeyEvent::from(KeyCode::Esc)),
            ControllerAction::Continue
        );
        assert_eq!(controller.screen(), Screen::QuitConfirm);

        // Typing is not forwarded to the input while confirming.
        controller.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert!(controller.input().is_empty());

        controller.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(controller.screen(), Screen::Chat);

        controller.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(
            controller.handle_key(KeyEvent::from(KeyCode::Char('y'))),
            ControllerAction::Quit
        );
    }
}
