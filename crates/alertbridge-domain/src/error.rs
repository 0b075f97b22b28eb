//! Error handling types
//!
//! Every failure in the bridge is an [`Error`]. Callers that need to react
//! programmatically (drop-and-log versus reject) match on [`Error::kind`]
//! instead of inspecting messages.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by infrastructure-flavoured variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Closed classification of every [`Error`] variant
///
/// | Kind | Meaning | Handling |
/// |------|---------|----------|
/// | `Precondition` | Duplicate name, unknown receiver, bad argument | Returned before any I/O |
/// | `TransientDelivery` | Transport error or non-2xx from the remote engine | Logged, batch dropped |
/// | `Attribution` | Alert without rule id or receivers | Logged per alert, alert skipped |
/// | `DualWriteGate` | Remote call failed inside a commit gate | Mutation aborted, local state untouched |
/// | `Bootstrap` | No organization known yet | Logged, batch dropped, retried on next batch |
/// | `Store` | Config store failure | Propagated |
/// | `Configuration` | Invalid application configuration | Fail fast at startup |
/// | `Internal` | Serialization, I/O and other unexpected failures | Propagated |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local validation failed before any side effect
    Precondition,
    /// The remote engine could not be reached or rejected the request
    TransientDelivery,
    /// An alert could not be attributed to any receiver
    Attribution,
    /// The remote call gating a local write failed
    DualWriteGate,
    /// No organization is available yet
    Bootstrap,
    /// The config store failed
    Store,
    /// Configuration is invalid
    Configuration,
    /// Anything else
    Internal,
}

/// Main error type for Alert Bridge
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Resource not found
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Resource already exists
    #[error("Already exists: {resource}")]
    AlreadyExists {
        /// The resource that already exists
        resource: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// An alert could not be attributed to a receiver
    #[error("Cannot attribute alert: {message}")]
    Attribution {
        /// Rule identifier found on the alert, if any
        rule_id: Option<String>,
        /// Description of the attribution failure
        message: String,
    },

    /// The remote engine answered with a non-2xx status
    #[error("bad response status {status} from {endpoint}")]
    RemoteStatus {
        /// Endpoint path that was called
        endpoint: String,
        /// HTTP status line (e.g. `500 Internal Server Error`)
        status: String,
    },

    /// Transport-level failure talking to the remote engine
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The remote call gating a local write failed
    #[error("Remote commit gate failed for receiver '{receiver}': {source}")]
    RemoteGate {
        /// Receiver whose route was being written
        receiver: String,
        /// The remote failure
        #[source]
        source: Box<Error>,
    },

    /// No organization exists yet
    #[error("No organizations found")]
    NoOrganization,

    /// Config store failure
    #[error("Database error: {message}")]
    Database {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::AlreadyExists { .. } | Self::InvalidArgument { .. } => {
                ErrorKind::Precondition
            }
            Self::Attribution { .. } => ErrorKind::Attribution,
            Self::RemoteStatus { .. } | Self::Network { .. } => ErrorKind::TransientDelivery,
            Self::RemoteGate { .. } => ErrorKind::DualWriteGate,
            Self::NoOrganization => ErrorKind::Bootstrap,
            Self::Database { .. } => ErrorKind::Store,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Json { .. } | Self::Io { .. } | Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// True for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for [`Error::AlreadyExists`]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

// Precondition error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists<S: Into<String>>(resource: S) -> Self {
        Self::AlreadyExists {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an attribution error
    pub fn attribution<S: Into<String>>(rule_id: Option<&str>, message: S) -> Self {
        Self::Attribution {
            rule_id: rule_id.map(str::to_string),
            message: message.into(),
        }
    }
}

// Remote engine error creation methods
impl Error {
    /// Create a remote status error from an endpoint and HTTP status line
    pub fn remote_status<E: Into<String>, S: Into<String>>(endpoint: E, status: S) -> Self {
        Self::RemoteStatus {
            endpoint: endpoint.into(),
            status: status.into(),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a remote failure raised inside a commit gate
    pub fn remote_gate<S: Into<String>>(receiver: S, source: Error) -> Self {
        Self::RemoteGate {
            receiver: receiver.into(),
            source: Box::new(source),
        }
    }
}

// Store, configuration and internal error creation methods
impl Error {
    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source
    pub fn internal_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
