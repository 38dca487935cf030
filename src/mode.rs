//! Deployment mode enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The deployment mode stored under `E_ENV`.
///
/// A single stored value, so at most one of the registry's mode predicates
/// is true at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
    /// Local development.
    Development,
    /// Production deployment.
    Production,
    /// Production behavior with locally provided environment variables.
    Test,
}

impl DeployMode {
    /// The serialized form stored in the environment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized deployment mode.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized deployment mode '{0}'")]
pub struct ParseModeError(String);

impl FromStr for DeployMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        for mode in [
            DeployMode::Development,
            DeployMode::Production,
            DeployMode::Test,
        ] {
            assert_eq!(mode.to_string().parse::<DeployMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("staging".parse::<DeployMode>().is_err());
        assert!("".parse::<DeployMode>().is_err());
    }
}
