use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No seed derived yet: call reseed() before rolling")]
    NotSeeded,

    #[error("Color '{color}' is not in the catalog")]
    UnknownColor { color: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// True for every failure the caller caused with a bad request,
    /// as opposed to bad configuration or data files.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnknownColor { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Csv(_) | Self::Serialization(_))
    }
}

pub type SimResult<T> = Result<T, SimError>;
