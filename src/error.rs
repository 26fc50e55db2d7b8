use thiserror::Error;

/// Everything that can go wrong between sending the request and holding a
/// list of bars.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or HTTP failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with an explicit `"Error Message"`.
    #[error("API error: {0}")]
    Api(String),

    /// Throttled or rejected key (`"Note"` / `"Information"` payloads).
    #[error("API refused the request: {0}")]
    RateLimited(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no \"Time Series (Daily)\" object")]
    MissingSeries,

    #[error("{date}: missing field \"{field}\"")]
    MissingField { date: String, field: &'static str },

    #[error("{date}: field \"{field}\" is not a number: {value:?}")]
    InvalidNumber {
        date: String,
        field: &'static str,
        value: String,
    },
}
