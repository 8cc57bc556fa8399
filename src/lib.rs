// src/lib.rs

pub mod bubble;
pub mod config;
pub mod constants;
pub mod controller;
pub mod conversation;
pub mod errors;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod reply;
pub mod tui;
pub mod ui;

pub use controller::{ScreenController, SendOutcome};
pub use conversation::{ChatEntry, Conversation, ConversationObserver, Origin};
pub use reply::{PrefixReply, ReplySource};
