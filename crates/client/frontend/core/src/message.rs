//! Player-facing message history.
use std::collections::VecDeque;

/// How prominently a message is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Frame the message was produced in, if it came from the simulation.
    pub frame: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, frame: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            frame,
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Info)
    }
}

/// Bounded history; the oldest line is evicted once `limit` is reached.
#[derive(Clone, Debug)]
pub struct MessageLog {
    lines: VecDeque<MessageEntry>,
    limit: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let limit = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        while self.lines.len() >= self.limit {
            self.lines.pop_front();
        }
        self.lines.push_back(entry);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::info(text));
    }

    /// Newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &MessageEntry> {
        self.lines.iter().rev().take(count)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
