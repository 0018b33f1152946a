use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0} not supported yet")]
    UnsupportedExchange(String),

    #[error("{exchange} returned no data for the requested window")]
    EmptyUpstreamResponse { exchange: &'static str },

    #[error("no epoch windows available to bound the candle query")]
    MissingEpochWindow,

    #[error("no USD-quoted tickers to reduce")]
    NoEligibleTickers,

    #[error("malformed epoch dataset {path}: {reason}")]
    MalformedDataset { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
