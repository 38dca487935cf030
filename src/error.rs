//! Error types for environment variable access and coercion

/// Errors that can occur when reading configuration from the environment store.
///
/// This error type covers three failure scenarios:
/// - A required environment variable is absent at validation time
/// - A file read failure when using the `{VAR}_FILE` secret pattern
/// - A coercion failure while parsing a boolean or numeric value
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required environment variable is not set.
    ///
    /// Raised by validation when a variable in the required-variable
    /// registry is absent from the environment store. Signals a
    /// misconfigured deployment and should abort startup.
    #[error("Environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Failed to read from a file specified by a `{VAR}_FILE` environment variable.
    ///
    /// Secret-bearing getters fall back to the file named by `{VAR}_FILE`
    /// when the direct variable is unset. This error occurs if that file
    /// cannot be read (e.g., file doesn't exist, permission denied).
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the `{VAR}_FILE` environment variable (e.g., "E_API_JWT_SECRET_FILE")
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },

    /// Failed to coerce an environment variable value into the target type.
    ///
    /// Occurs when a boolean field holds an unrecognized token or a numeric
    /// field holds a string that does not parse.
    #[error("Failed to parse environment variable '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the coercion helper
        message: String,
    },
}

impl EnvError {
    /// Create a parse error for the named variable and target type.
    pub fn parse_error<T>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing environment variable error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }
}
