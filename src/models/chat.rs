use serde::{Deserialize, Serialize};

/// Presence of a therapist in the consultation list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    #[default]
    Offline,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Away => "Away",
            Presence::Offline => "Last seen 2h ago",
        }
    }
}

/// A teleconsultation thread with one therapist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub status: Presence,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Therapist,
    User,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Video,
}

/// One entry of a consultation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub content: String,
    pub time: String,
    #[serde(default)]
    pub kind: MessageKind,
}

impl ChatMessage {
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
