use std::{error::Error, fmt::Display};

/// Return this error when query parameters could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A value could not be serialized into JSON
    Serialization(String),
    /// Input text was not valid JSON
    InvalidJson(String),
    /// Parsed parameters were valid JSON, but not a JSON object
    NotAnObject,
}
impl Error for QueryError {}
impl Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Serialization(reason) => {
                write!(f, "Failed to serialize query parameter: {reason}")
            }
            QueryError::InvalidJson(reason) => write!(f, "Invalid JSON: {reason}"),
            QueryError::NotAnObject => write!(f, "Query parameters must be a JSON object"),
        }
    }
}
impl From<serde_json::Error> for QueryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

/// Return this error when an endpoint could not be turned into a request [url::Url].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    InvalidUrl(InvalidUrlError),
}
impl Error for EndpointError {}
impl Display for EndpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl(e) => e.fmt(f),
        }
    }
}
impl From<InvalidUrlError> for EndpointError {
    fn from(value: InvalidUrlError) -> Self {
        Self::InvalidUrl(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUrlError {
    url: String,
    reason: url::ParseError,
}

impl InvalidUrlError {
    pub fn new(url: impl Into<String>, reason: url::ParseError) -> Self {
        Self {
            url: url.into(),
            reason,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn reason(&self) -> url::ParseError {
        self.reason
    }
}
impl Error for InvalidUrlError {}
impl Display for InvalidUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a valid url: {}", self.url, self.reason)
    }
}
