use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Missing API key: set {setting} in the environment or a .env file")]
    Configuration { setting: String },

    #[error("{message}")]
    Provider { message: String },

    #[error("empty response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GenerationError {
    /// True when generation was never attempted because setup is incomplete
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
