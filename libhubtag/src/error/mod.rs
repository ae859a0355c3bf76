//! Error types for hubtag
//!
//! Every stage of the tag pipeline reports failures through [`HubtagError`].
//! Errors carry enough context (URL, status code, pattern, path) to produce a
//! useful diagnostic without further lookups.

use thiserror::Error;


/// Main error type for hubtag operations
#[derive(Error, Debug)]
pub enum HubtagError {
    /// The registry could not be reached or the response could not be read
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The registry answered with a non-success status
    #[error("Unexpected status code {status_code} from {url}")]
    UnexpectedStatus { status_code: u16, url: String },

    /// The payload was not the expected JSON envelope
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Nothing survived the version filters
    #[error("No candidate tags left after filtering ({considered} tags considered)")]
    NoCandidates { considered: usize },

    /// A user-supplied pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Invalid input such as an empty repository identifier
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration errors (invalid config file, missing settings)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Local file could not be written
    #[error("I/O error on {path}: {message}")]
    Io {
        message: String,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for hubtag operations
pub type Result<T> = std::result::Result<T, HubtagError>;

impl HubtagError {
    /// Creates a new transport error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::error::HubtagError;
    ///
    /// let err = HubtagError::transport("connection refused");
    /// assert!(matches!(err, HubtagError::Transport { .. }));
    /// ```
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transport error with a source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new unexpected status error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::error::HubtagError;
    ///
    /// let err = HubtagError::unexpected_status(404, "https://example.com/tags");
    /// assert_eq!(err.status_code(), Some(404));
    /// ```
    pub fn unexpected_status<S: Into<String>>(status_code: u16, url: S) -> Self {
        Self::UnexpectedStatus {
            status_code,
            url: url.into(),
        }
    }

    /// Creates a new decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new decode error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::error::HubtagError;
    ///
    /// let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    /// let err = HubtagError::decode_with_source("bad payload", json_err);
    /// assert!(matches!(err, HubtagError::Decode { .. }));
    /// ```
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new "no candidates" error.
    pub fn no_candidates(considered: usize) -> Self {
        Self::NoCandidates { considered }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::error::HubtagError;
    ///
    /// let err = HubtagError::validation("repository identifier cannot be empty");
    /// assert!(matches!(err, HubtagError::Validation { .. }));
    /// ```
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new I/O error for the given path.
    pub fn io<S, P>(message: S, path: P, source: std::io::Error) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self::Io {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// Returns the HTTP status code for [`HubtagError::UnexpectedStatus`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for HubtagError {
    fn from(err: config::ConfigError) -> Self {
        HubtagError::config_with_source("Failed to build configuration", None, err)
    }
}
