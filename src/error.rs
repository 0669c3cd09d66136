use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("update error: {0}")]
    Mutation(String),
}

impl AppError {
    /// Text shown to the user on the board. Unlike `Display`, this drops the
    /// category prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(message)
            | AppError::Authentication(message)
            | AppError::Transport(message)
            | AppError::Mutation(message) => message.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
