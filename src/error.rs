use thiserror::Error;

use crate::scheduler::GenerationExhausted;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid roster: {}", join_messages(.0))]
    InvalidRoster(Vec<ValidationError>),

    #[error(transparent)]
    Exhausted(#[from] GenerationExhausted),
}

impl MatcherError {
    /// Message shown to the person at the keyboard.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MatcherError::InvalidRoster(errors) => {
                format!("Please enter the names of all 12 players ({})", join_messages(errors))
            }
            MatcherError::Exhausted(_) => {
                "Could not find a schedule without repeats. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MatcherError>;
