use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid server address \"{input}\": {reason}")]
    InvalidServerUrl { input: String, reason: String },

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{endpoint} returned an error: {message}")]
    Api { endpoint: String, message: String },

    #[error("Malformed response from {endpoint}: {source}")]
    Payload {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid pricing entry \"{model}\": {reason}")]
    InvalidEntry { model: String, reason: String },

    #[error("Invalid group ratio {value} (expected a finite, non-negative number)")]
    InvalidGroupRatio { value: f64 },

    #[error("No cached pricing available. Run once without --offline first.")]
    NoCachedPricing,

    #[error("Failed to encode JSON output: {0}")]
    Encode(serde_json::Error),

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
#[error("Request to {url} failed after {attempts} attempt(s): {source}")]
pub(crate) struct FetchError {
    pub(crate) url: String,
    pub(crate) attempts: usize,
    #[source]
    pub(crate) source: ureq::Error,
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to write store {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode store: {0}")]
    Encode(serde_json::Error),
}
