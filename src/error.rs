//! Error types for coop-door.
//!
//! Gestures and parameter edits never fail: malformed input is silently
//! ignored and edits are clamped. What can fail is configuration (parsing,
//! validation, assembling the controller) and the parameter store. Store
//! failures never abort the controller, so [`StorageError`] stays outside
//! [`Error`] and is only handed to [`ParameterStore`](crate::hal::ParameterStore)
//! callers.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all coop-door operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Press thresholds are not strictly ordered
    InvalidTiming {
        /// Name of the offending field
        field: &'static str,
        /// Configured value in milliseconds
        value: u32,
        /// Value it must stay below (or above, for lower bounds)
        bound: u32,
    },
    /// Encoder divisor must be at least 1
    InvalidEncoderDivisor(i32),
    /// A default parameter value lies outside its bounds
    DefaultOutOfRange {
        /// Parameter name
        parameter: &'static str,
        /// Configured default
        value: i32,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
    /// A required component was not supplied to the builder
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Parameter store errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    Io(heapless::String<128>),
    /// Stored data could not be decoded
    Parse(heapless::String<128>),
    /// Snapshot could not be encoded
    Serialize(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidTiming { field, value, bound } => {
                write!(f, "Invalid timing: {} = {} ms conflicts with {} ms", field, value, bound)
            }
            ConfigError::InvalidEncoderDivisor(v) => {
                write!(f, "Invalid encoder divisor: {}. Must be >= 1", v)
            }
            ConfigError::DefaultOutOfRange { parameter, value, min, max } => {
                write!(f, "Default {} = {} outside [{}, {}]", parameter, value, min, max)
            }
            ConfigError::MissingComponent(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Stored parameters unreadable: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Parameters not encodable: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Truncating conversion used when wrapping foreign error messages.
pub(crate) fn message<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}
