use thiserror::Error;

/// Settings and credential errors. All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("missing required environment variable {name}")]
    MissingEnv { name: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("rate service error: {0}")]
    RateService(String),

    #[error("offer service error: {0}")]
    OfferService(String),

    #[error("invalid price '{price}' on offer from '{advertiser}': {source}")]
    OfferPrice {
        advertiser: String,
        price: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("notification dispatch failed: {0}")]
    Dispatch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
