// src/reply.rs

use crate::constants::DEFAULT_REPLY_PREFIX;

/// Produces the received message for a sent one. This is where a real
/// backend would be plugged in.
pub trait ReplySource {
    fn reply(&self, text: &str) -> String;
}

/// Local stand-in that answers with a fixed prefix followed by the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixReply {
    prefix: String,
}

impl PrefixReply {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixReply {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_PREFIX)
    }
}

impl ReplySource for PrefixReply {
    fn reply(&self, text: &str) -> String {
        format!("{}{}", self.prefix, text)
    }
}
