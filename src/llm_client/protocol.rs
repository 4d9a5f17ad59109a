use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LlmRole {
    Assistant,
    User,
    System,
}

impl Display for LlmRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmRole::Assistant => write!(f, "assistant"),
            LlmRole::User => write!(f, "user"),
            LlmRole::System => write!(f, "system"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct LlmMessage {
    pub(crate) role: LlmRole,
    pub(crate) content: String,
}

impl LlmMessage {
    pub(crate) fn system(content: String) -> Self {
        Self {
            role: LlmRole::System,
            content,
        }
    }

    pub(crate) fn user(content: String) -> Self {
        Self {
            role: LlmRole::User,
            content,
        }
    }
}
