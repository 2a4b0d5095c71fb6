use thiserror::Error;

/// Enumerates the possible errors that can arise during extractor operations.
///
/// This error type consolidates issues from every stage of the pipeline:
/// request construction, the network call itself, the HTTP status check and
/// the JSON or DOM extraction of the response body. Nothing is retried or
/// recovered internally; every failure is returned to the caller as-is.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// An attempt was made to fetch posts from page zero, which is invalid for
    /// every revision of the server.
    #[error("Page number cannot be zero.")]
    ZeroPage,

    /// The configured base host could not be turned into a valid request URL.
    #[error("Failed to build a valid request URL from {url}")]
    InvalidUrl { url: String },

    /// An error occurred during a network request (e.g. connection timeout, DNS
    /// resolution failure). Wraps the underlying `reqwest::Error` unchanged.
    #[error("Connection Error")]
    ConnectionError(#[from] skc_common::reqwest::Error),

    /// The server answered with a failure status. Carries the status code and a
    /// snippet of the response body when one was readable.
    #[error("Server replied with status {status}: {message}")]
    HttpFailure { status: u16, message: String },

    /// An error occurred while deserializing a JSON response from the API.
    /// A single malformed record fails the whole call.
    #[error("Error while deserializing JSON")]
    JsonDecodeFail(#[from] skc_common::serde_json::Error),

    /// A page body could not be queried as an HTML document.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseFail(String),

    /// The detail page carries no original-file link, so neither the file URL
    /// nor the content hash can be derived. This is the only hard extraction
    /// failure in HTML mode.
    #[error("Post page has no original file link")]
    MissingOriginalFile,
}
