//! Coercion helpers for environment variable values
//!
//! Raw values are plain strings; these helpers turn them into booleans and
//! floats, and implement the `{VAR}_FILE` fallback used by secret-bearing
//! variables.

use std::fs;

use crate::error::EnvError;
use crate::store::EnvStore;

/// Coerce a string token into a boolean.
///
/// Case-insensitive: `true`/`1`/`yes` are true, `false`/`0`/`no` and the
/// empty string are false. Any other token is a [`EnvError::Parse`] error
/// rather than a silent default, so a typo like `E_DEBUG=ture` surfaces at
/// the call site instead of disabling debug output.
pub fn parse_bool(name: &str, value: &str) -> Result<bool, EnvError> {
    let token = value.trim();
    if token.eq_ignore_ascii_case("true")
        || token.eq_ignore_ascii_case("yes")
        || token == "1"
    {
        return Ok(true);
    }
    if token.is_empty()
        || token.eq_ignore_ascii_case("false")
        || token.eq_ignore_ascii_case("no")
        || token == "0"
    {
        return Ok(false);
    }
    Err(EnvError::parse_error::<bool>(
        name,
        format!("unrecognized boolean token '{value}'"),
    ))
}

/// Coerce a string into an `f64`.
pub fn parse_f64(name: &str, value: &str) -> Result<f64, EnvError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| EnvError::parse_error::<f64>(name, e))
}

/// Get a variable value with a `{VAR}_FILE` fallback.
///
/// Priority order:
/// 1. Direct variable (`name`)
/// 2. File named by `{name}_FILE`, trimmed (Kubernetes/Docker secret mounts)
/// 3. `None` if neither is set
///
/// The file path itself is read from the store, but the file contents come
/// from the filesystem regardless of the store implementation.
pub fn get_with_file_fallback<S: EnvStore>(
    store: &S,
    name: &str,
) -> Result<Option<String>, EnvError> {
    if let Some(value) = store.get(name) {
        return Ok(Some(value));
    }

    let file_var_name = format!("{name}_FILE");
    if let Some(file_path) = store.get(&file_var_name) {
        return fs::read_to_string(&file_path)
            .map(|s| Some(s.trim().to_string()))
            .map_err(|e| EnvError::FileRead {
                name: file_var_name,
                path: file_path,
                source: e,
            });
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEnv;

    #[test]
    fn parse_bool_truthy_tokens() {
        for token in ["true", "True", "TRUE", "1", "yes", "Yes"] {
            assert!(parse_bool("TEST_BOOL", token).unwrap(), "token: {token}");
        }
    }

    #[test]
    fn parse_bool_falsy_tokens() {
        for token in ["false", "False", "FALSE", "0", "no", "No", ""] {
            assert!(!parse_bool("TEST_BOOL", token).unwrap(), "token: {token}");
        }
    }

    #[test]
    fn parse_bool_rejects_unrecognized_token() {
        let result = parse_bool("TEST_BOOL", "enabled");
        match result {
            Err(EnvError::Parse { name, type_name, .. }) => {
                assert_eq!(name, "TEST_BOOL");
                assert!(type_name.contains("bool"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_f64_accepts_fractions() {
        assert_eq!(parse_f64("TEST_F64", "2.5").unwrap(), 2.5);
        assert_eq!(parse_f64("TEST_F64", "0").unwrap(), 0.0);
    }

    #[test]
    fn parse_f64_rejects_garbage() {
        let result = parse_f64("TEST_F64", "not_a_number");
        assert!(matches!(result, Err(EnvError::Parse { .. })));
    }

    #[test]
    fn file_fallback_prefers_direct_value() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "file_value").unwrap();

        let mut store = MemoryEnv::new();
        store.set("SECRET", "direct_value");
        store.set("SECRET_FILE", &temp_file.path().to_string_lossy());

        let result = get_with_file_fallback(&store, "SECRET").unwrap();
        assert_eq!(result.as_deref(), Some("direct_value"));
    }

    #[test]
    fn file_fallback_reads_trimmed_contents() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "secret_value").unwrap();

        let mut store = MemoryEnv::new();
        store.set("SECRET_FILE", &temp_file.path().to_string_lossy());

        let result = get_with_file_fallback(&store, "SECRET").unwrap();
        assert_eq!(result.as_deref(), Some("secret_value"));
    }

    #[test]
    fn file_fallback_missing_both_is_none() {
        let store = MemoryEnv::new();
        let result = get_with_file_fallback(&store, "SECRET").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn file_fallback_unreadable_path_errors() {
        let mut store = MemoryEnv::new();
        store.set("SECRET_FILE", "/nonexistent/file/path");

        let result = get_with_file_fallback(&store, "SECRET");
        assert!(matches!(result, Err(EnvError::FileRead { .. })));
    }
}
