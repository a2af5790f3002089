use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for geoprobe operations
pub type Result<T> = std::result::Result<T, GeoProbeError>;

/// Error types for whole-run failures. Per-address problems never surface
/// here; they are contained in the report rows.
#[derive(Debug, Error)]
pub enum GeoProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Input file must include an extension (.csv or .json), e.g. addresses.csv")]
    MissingInputExtension,

    #[error("Unsupported input file format: {extension}. Use .csv or .json")]
    UnsupportedInputFormat { extension: String },

    #[error("Unsupported output file format: {extension}. Use .csv or .json")]
    UnsupportedOutputFormat { extension: String },

    #[error("Input has no '{column}' column")]
    MissingColumn { column: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Provider failure carrying the provider's own description verbatim, so
    /// classification sees the original message shape.
    #[error("{message}")]
    Provider { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl GeoProbeError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Create a provider failure with a verbatim description
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Human-oriented message for the CLI surface
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::InputNotFound { path } => format!("File not found — {}", path.display()),
            Self::ConfigParse(err) => format!("Failed to parse configuration: {err}"),
            other => other.to_string(),
        }
    }
}
