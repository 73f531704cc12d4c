//! Everything that can go wrong, in one enum.
//!
//! Failures come in two tiers.  Setup problems (no credential, an empty
//! credential, a model label nobody recognizes) surface as
//! [`Error::Configuration`] before any request leaves the process.
//! Everything else arises while talking to the Generative Language API and
//! maps onto the remaining variants by transport failure, HTTP status, or
//! response payload.

use std::error;
use std::fmt;
use std::sync::Arc;

/// Error type shared by every fallible operation in this crate.
#[derive(Clone, Debug)]
pub enum Error {
    /// Raised before any I/O when the crate was asked to run with incomplete
    /// or invalid setup.  Callers can fix these without retrying.
    Configuration { message: String },

    /// The request never reached the service.
    Connection {
        message: String,
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The request exceeded its deadline, locally or server-side.
    Timeout {
        message: String,
        /// The deadline that was exceeded, in seconds, when known.
        duration: Option<f64>,
    },

    /// The credential was rejected (HTTP 401 or 403).
    Authentication { message: String },

    /// No such resource, usually a backend model id the service has never
    /// heard of (HTTP 404).
    NotFound { message: String },

    /// Quota exhausted (HTTP 429).
    RateLimit {
        message: String,
        /// Seconds to wait, taken from the `retry-after` header.
        retry_after: Option<u64>,
    },

    /// The service fell over (HTTP 500).
    InternalServer { message: String },

    /// The service is overloaded or briefly down (HTTP 502 through 504).
    ServiceUnavailable {
        message: String,
        retry_after: Option<u64>,
    },

    /// Any other non-success status.  Carries the google.rpc status string
    /// (`INVALID_ARGUMENT` and friends) when the error body included one.
    Api {
        status_code: u16,
        status: Option<String>,
        message: String,
    },

    /// Transport-level failure inside the HTTP client, before any status
    /// code existed.
    HttpClient {
        message: String,
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A request or response body failed to encode or decode.
    Serialization {
        message: String,
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A base URL failed to parse.
    Url {
        message: String,
        source: Option<url::ParseError>,
    },

    /// The safety layer swallowed the prompt or the candidate and left no
    /// text to return.
    Blocked { message: String },
}

impl Error {
    /// Setup problem, raised before any request is attempted.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The request never made it to the service.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Deadline exceeded, with the deadline in seconds when known.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Credential rejected.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Resource missing.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// Quota exhausted, with the server's retry hint when it sent one.
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// HTTP 500 from the service.
    pub fn internal_server(message: impl Into<String>) -> Self {
        Error::InternalServer {
            message: message.into(),
        }
    }

    /// HTTP 502 through 504 from the service.
    pub fn service_unavailable(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::ServiceUnavailable {
            message: message.into(),
            retry_after,
        }
    }

    /// Non-success status with no more specific mapping.
    pub fn api(status_code: u16, status: Option<String>, message: impl Into<String>) -> Self {
        Error::Api {
            status_code,
            status,
            message: message.into(),
        }
    }

    /// Failure inside the HTTP client itself.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Body failed to encode or decode.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Bad base URL.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Safety filtering left no text behind.
    pub fn blocked(message: impl Into<String>) -> Self {
        Error::Blocked {
            message: message.into(),
        }
    }

    /// True for setup problems that precede any I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    /// True when the credential was rejected.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// True when the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True when quota ran out.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// True when a deadline was exceeded.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// True when the request never reached the service.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// True for any 5xx-mapped variant.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Error::InternalServer { .. } | Error::ServiceUnavailable { .. }
        )
    }

    /// True when safety filtering removed the prompt or the candidate.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Error::Blocked { .. })
    }

    /// The HTTP status, for errors that kept one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The server's retry hint in seconds, if it sent one.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            Error::ServiceUnavailable { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "Configuration error: {message}")
            }
            Error::Connection { message, .. } => {
                write!(f, "Connection error: {message}")
            }
            Error::Timeout { message, duration } => match duration {
                Some(duration) => write!(f, "Timeout error: {message} ({duration} seconds)"),
                None => write!(f, "Timeout error: {message}"),
            },
            Error::Authentication { message } => {
                write!(f, "Authentication failed: {message}")
            }
            Error::NotFound { message } => {
                write!(f, "Not found: {message}")
            }
            Error::RateLimit {
                message,
                retry_after,
            } => match retry_after {
                Some(seconds) => {
                    write!(f, "Rate limited: {message} (retry after {seconds} seconds)")
                }
                None => write!(f, "Rate limited: {message}"),
            },
            Error::InternalServer { message } => {
                write!(f, "Internal server error: {message}")
            }
            Error::ServiceUnavailable {
                message,
                retry_after,
            } => match retry_after {
                Some(seconds) => {
                    write!(
                        f,
                        "Service unavailable: {message} (retry after {seconds} seconds)"
                    )
                }
                None => write!(f, "Service unavailable: {message}"),
            },
            Error::Api {
                status_code,
                status,
                message,
            } => match status {
                Some(status) => write!(f, "{status} ({status_code}): {message}"),
                None => write!(f, "HTTP {status_code}: {message}"),
            },
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Serialization { message, .. } => {
                write!(f, "Serialization error: {message}")
            }
            Error::Url { message, .. } => {
                write!(f, "Invalid URL: {message}")
            }
            Error::Blocked { message } => {
                write!(f, "Generation blocked: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. }
            | Error::HttpClient { source, .. }
            | Error::Serialization { source, .. } => source
                .as_deref()
                .map(|err| err as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => source
                .as_ref()
                .map(|err| err as &(dyn error::Error + 'static)),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string(), Some(Box::new(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(err.to_string(), Some(err))
    }
}

/// Alias used by every fallible function in this crate.
pub type Result<T> = std::result::Result<T, Error>;
