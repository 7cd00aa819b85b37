//! Submission pipeline for the expert assistant: validation gate, then
//! prompt build, then the provider round trip.

use std::error::Error;
use std::fmt;

use crate::chat::{ChatClient, ChatError};
use crate::persona::{build_messages, Persona};

#[derive(Debug)]
pub enum AskError {
    MissingApiKey,
    MissingQuestion,
    Provider(ChatError),
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "API key is missing: enter your key and submit again"),
            Self::MissingQuestion => {
                write!(f, "question is missing: enter a question and submit again")
            }
            Self::Provider(err) => write!(f, "assistant request failed: {err}"),
        }
    }
}

impl Error for AskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
            _ => None,
        }
    }
}

/// Key is checked before the question; either failure short-circuits
/// before any network call.
pub fn validate(api_key: &str, question: &str) -> Result<(), AskError> {
    if api_key.trim().is_empty() {
        return Err(AskError::MissingApiKey);
    }
    if question.trim().is_empty() {
        return Err(AskError::MissingQuestion);
    }
    Ok(())
}

pub async fn answer(
    chat: &ChatClient,
    persona: Persona,
    api_key: &str,
    question: &str,
) -> Result<String, AskError> {
    validate(api_key, question)?;

    let messages = build_messages(persona, question.trim());
    chat.ask(api_key.trim(), messages)
        .await
        .map_err(AskError::Provider)
}
