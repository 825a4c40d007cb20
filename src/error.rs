use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Unknown major \"{major}\" for student \"{username}\"")]
    UnknownMajor { major: String, username: String },

    #[error("Unknown college \"{college}\" for student \"{username}\"")]
    UnknownCollege { college: String, username: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EtlError>;
