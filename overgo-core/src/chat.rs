use serde::{Deserialize, Serialize};

/// Author of a chat turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Any other author (e.g. "system"); never consulted for extraction
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Joins the user-authored turns of a conversation, order preserved.
pub fn user_text(history: &[ChatTurn]) -> String {
    history
        .iter()
        .filter(|turn| turn.role == Role::User)
        .map(|turn| turn.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
