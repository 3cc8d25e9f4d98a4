//! Credential fixtures.
//!
//! A fixture file is a small JSON document with a `validUser` and an
//! `invalidUser` record. It is loaded once at the start of a run and is
//! read-only from then on. Real credentials never live in the repository;
//! `ARGUS_CREDENTIALS` points a run at a secret file outside the tree.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the fixture file location.
pub const CREDENTIALS_ENV: &str = "ARGUS_CREDENTIALS";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("fixture field {0} is empty")]
    EmptyField(&'static str),
}

/// One email/password pair.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub password: String,
}

/// The credential fixture: one account the dashboard accepts and one it
/// must reject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub valid_user: Account,
    pub invalid_user: Account,
}

impl Credentials {
    /// Load credentials from a JSON fixture file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        if !path.exists() {
            return Err(FixtureError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let creds: Credentials =
            serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        creds.validate()?;
        Ok(creds)
    }

    /// Load from `ARGUS_CREDENTIALS` when set, otherwise from `fallback`.
    pub fn from_env_or(fallback: &Path) -> Result<Self, FixtureError> {
        match std::env::var(CREDENTIALS_ENV) {
            Ok(p) if !p.is_empty() => Self::load(Path::new(&p)),
            _ => Self::load(fallback),
        }
    }

    fn validate(&self) -> Result<(), FixtureError> {
        if self.valid_user.email.is_empty() {
            return Err(FixtureError::EmptyField("validUser.email"));
        }
        if self.valid_user.password.is_empty() {
            return Err(FixtureError::EmptyField("validUser.password"));
        }
        if self.invalid_user.email.is_empty() {
            return Err(FixtureError::EmptyField("invalidUser.email"));
        }
        if self.invalid_user.password.is_empty() {
            return Err(FixtureError::EmptyField("invalidUser.password"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_well_formed_fixture() {
        let f = write_fixture(
            r#"{
              "validUser": { "email": "qa@example.com", "password": "hunter2!" },
              "invalidUser": { "email": "nobody@example.com", "password": "wrong" }
            }"#,
        );
        let creds = Credentials::load(f.path()).unwrap();
        assert_eq!(creds.valid_user.email, "qa@example.com");
        assert_eq!(creds.invalid_user.password, "wrong");
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let err = Credentials::load(Path::new("/nonexistent/credentials.json")).unwrap_err();
        assert!(matches!(err, FixtureError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let f = write_fixture("{ not json");
        let err = Credentials::load(f.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }

    #[test]
    fn empty_email_is_rejected() {
        let f = write_fixture(
            r#"{
              "validUser": { "email": "", "password": "x" },
              "invalidUser": { "email": "a@b.c", "password": "y" }
            }"#,
        );
        let err = Credentials::load(f.path()).unwrap_err();
        assert!(matches!(err, FixtureError::EmptyField("validUser.email")));
    }
}
