//! Expert personas: each maps to a fixed system instruction.

use serde::Deserialize;

use crate::chat::ChatMessage;

pub const STYLIST_SYSTEM_PROMPT: &str = "you are an excellent fashion stylist";
pub const NUTRITIONIST_SYSTEM_PROMPT: &str = "you are an excellent nutritionist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Stylist,
    Nutritionist,
}

impl Persona {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Self::Stylist => STYLIST_SYSTEM_PROMPT,
            Self::Nutritionist => NUTRITIONIST_SYSTEM_PROMPT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stylist => "fashion stylist",
            Self::Nutritionist => "nutritionist",
        }
    }
}

/// Builds the ordered [system, user] message pair for one submission.
pub fn build_messages(persona: Persona, question: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system".to_string(),
            content: persona.system_prompt().to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: question.to_string(),
        },
    ]
}
