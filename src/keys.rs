//! Stable environment variable key names
//!
//! These names are part of the deployment contract and must not change.
//!
//! | Key | Type | Default | Required by default |
//! |-----|------|---------|---------------------|
//! | `E_ENV` | deployment mode | — | yes |
//! | `E_DEBUG` | bool | false | yes |
//! | `E_SERVER_TOKEN` | string | — | yes |
//! | `E_SERVER_AES_KEY` | string | — | yes |
//! | `E_DB_HOST` | string | — | yes |
//! | `E_DB_USERNAME` | string | — | yes |
//! | `E_DB_PASSWORD` | string | — | yes |
//! | `E_DB_NAME` | string | — | yes |
//! | `E_DB_ECHO` | bool | false | yes |
//! | `E_BASIC_AUTH_USERNAME` | string | none | once API settings are set |
//! | `E_BASIC_AUTH_PASSWORD` | string | none | once API settings are set |
//! | `E_API_JWT_SECRET` | string | none | once API settings are set |
//! | `E_API_MIN_VERSION` | float | 0 | once API settings are set |

/// Deployment mode value.
pub const E_ENV: &str = "E_ENV";
/// Debug flag gating diagnostic trace output.
pub const E_DEBUG: &str = "E_DEBUG";
/// Server-wide action token.
pub const E_SERVER_TOKEN: &str = "E_SERVER_TOKEN";
/// Symmetric encryption key for server-side data.
pub const E_SERVER_AES_KEY: &str = "E_SERVER_AES_KEY";
/// Database host.
pub const E_DB_HOST: &str = "E_DB_HOST";
/// Database username.
pub const E_DB_USERNAME: &str = "E_DB_USERNAME";
/// Database password.
pub const E_DB_PASSWORD: &str = "E_DB_PASSWORD";
/// Database name.
pub const E_DB_NAME: &str = "E_DB_NAME";
/// Database statement echo flag.
pub const E_DB_ECHO: &str = "E_DB_ECHO";
/// Basic-auth username for the API.
pub const E_BASIC_AUTH_USERNAME: &str = "E_BASIC_AUTH_USERNAME";
/// Basic-auth password for the API.
pub const E_BASIC_AUTH_PASSWORD: &str = "E_BASIC_AUTH_PASSWORD";
/// Signing secret for API bearer tokens.
pub const E_API_JWT_SECRET: &str = "E_API_JWT_SECRET";
/// Minimum supported API version.
pub const E_API_MIN_VERSION: &str = "E_API_MIN_VERSION";

/// Keys required by default, in validation order.
pub const DEFAULT_REQUIRED: [&str; 9] = [
    E_ENV,
    E_DEBUG,
    E_SERVER_TOKEN,
    E_SERVER_AES_KEY,
    E_DB_HOST,
    E_DB_USERNAME,
    E_DB_PASSWORD,
    E_DB_NAME,
    E_DB_ECHO,
];
