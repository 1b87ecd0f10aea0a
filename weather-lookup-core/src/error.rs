use thiserror::Error;

/// Message shown when the city field is submitted blank.
pub const EMPTY_INPUT_MESSAGE: &str = "El campo ciudad es obligatorio";

/// Failure of a single lookup attempt.
///
/// None of these are fatal: the view stays interactive and the next submit
/// starts from a clean error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query was empty after trimming. No request was made.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// The API answered with an `error` object; the message is passed through verbatim.
    #[error("{0}")]
    RemoteError(String),

    /// Transport or parsing failure.
    #[error("{0}")]
    Unknown(String),
}

impl QueryError {
    /// Text to show the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// The request URL carries the API key, so it is stripped before the message is kept.
impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Unknown(err.without_url().to_string())
    }
}
