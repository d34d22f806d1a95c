//! Teleconsultation: conversation list and active chat.
//!
//! Messages typed here are appended to the on-screen transcript only. They
//! go nowhere and are dropped with the screen.

use std::collections::BTreeMap;

use super::{step_cursor, Back};
use crate::models::{ChatMessage, Conversation, MessageKind, Sender};
use crate::traits::ContentSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatView {
    #[default]
    ConversationList,
    ActiveChat(u32),
}

#[derive(Debug, Default)]
pub struct TelePhysioScreen {
    view: ChatView,
    cursor: usize,
    draft: String,
    sent: BTreeMap<u32, Vec<ChatMessage>>,
}

impl TelePhysioScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ChatView {
        self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn move_cursor(&mut self, delta: isize, content: &dyn ContentSource) {
        self.cursor = step_cursor(self.cursor, delta, content.conversations().len());
    }

    /// Open a conversation. Unknown ids leave the list showing.
    pub fn open(&mut self, id: u32, content: &dyn ContentSource) -> bool {
        if content.conversation(id).is_none() {
            return false;
        }
        tracing::debug!(conversation = id, "open chat");
        self.view = ChatView::ActiveChat(id);
        true
    }

    pub fn open_at_cursor(&mut self, content: &dyn ContentSource) -> bool {
        match content.conversations().get(self.cursor) {
            Some(c) => {
                let id = c.id;
                self.open(id, content)
            }
            None => false,
        }
    }

    pub fn active<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c Conversation> {
        match self.view {
            ChatView::ActiveChat(id) => content.conversation(id),
            ChatView::ConversationList => None,
        }
    }

    pub fn back(&mut self) -> Back {
        match self.view {
            ChatView::ActiveChat(_) => {
                self.view = ChatView::ConversationList;
                Back::Handled
            }
            ChatView::ConversationList => Back::Leave,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if matches!(self.view, ChatView::ActiveChat(_)) {
            self.draft.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Append the draft to the open chat's transcript.
    ///
    /// Returns `false` with no chat open or a blank draft.
    pub fn send_draft(&mut self, time: impl Into<String>, content: &dyn ContentSource) -> bool {
        let ChatView::ActiveChat(id) = self.view else {
            return false;
        };
        let text = self.draft.trim();
        if text.is_empty() {
            return false;
        }

        let base = content.messages().iter().map(|m| m.id).max().unwrap_or(0);
        let sent = self.sent.entry(id).or_default();
        let message = ChatMessage {
            id: base + sent.len() as u32 + 1,
            sender: Sender::User,
            content: text.to_string(),
            time: time.into(),
            kind: MessageKind::Text,
        };
        sent.push(message);
        self.draft.clear();
        true
    }

    /// Sample transcript followed by anything sent in this session.
    pub fn transcript<'a>(&'a self, content: &'a dyn ContentSource) -> Vec<&'a ChatMessage> {
        let mut all: Vec<&ChatMessage> = content.messages().iter().collect();
        if let ChatView::ActiveChat(id) = self.view {
            if let Some(sent) = self.sent.get(&id) {
                all.extend(sent.iter());
            }
        }
        all
    }
}
