// src/conversation.rs

/// Who authored a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Sent,
    Received,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    text: String,
    origin: Origin,
}

impl ChatEntry {
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    pub fn sent(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Sent)
    }

    pub fn received(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Received)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}

/// Receives a point notification for every entry appended through
/// [`Conversation::append_and_notify`].
pub trait ConversationObserver {
    fn entry_added(&mut self, conversation: &Conversation, index: usize);
}

/// Ordered, append-only sequence of chat entries.
#[derive(Debug, Default, Clone)]
pub struct Conversation {
    entries: Vec<ChatEntry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends without validation and returns the new entry's index.
    pub fn append(&mut self, entry: ChatEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Appends, then notifies `observer` exactly once at the new index.
    pub fn append_and_notify(
        &mut self,
        entry: ChatEntry,
        observer: &mut dyn ConversationObserver,
    ) -> usize {
        let index = self.append(entry);
        observer.entry_added(self, index);
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ChatEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }
}
