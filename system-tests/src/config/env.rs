// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, and malformed
//! numbers fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Base endpoint of the posts server under test.
    BaseUrl,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional reference-dataset path override.
    FixturePath,
    /// Optional artifact run root override.
    RunRoot,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "POSTCHECK_SYSTEM_TEST_BASE_URL",
            Self::TimeoutSeconds => "POSTCHECK_SYSTEM_TEST_TIMEOUT_SEC",
            Self::FixturePath => "POSTCHECK_SYSTEM_TEST_FIXTURE",
            Self::RunRoot => "POSTCHECK_SYSTEM_TEST_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Base endpoint of the server under test, when configured.
    pub base_url: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional reference-dataset path override.
    pub fixture_path: Option<PathBuf>,
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let fixture_path =
            read_env_nonempty(SystemTestEnv::FixturePath.as_str())?.map(PathBuf::from);
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        Ok(Self {
            base_url,
            timeout,
            fixture_path,
            run_root,
        })
    }

    /// Returns the configured base URL or a fail-closed error.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when no base URL is configured;
    /// suites never fall back to a default server address.
    pub fn require_base_url(&self) -> Result<&str, String> {
        self.base_url.as_deref().ok_or_else(|| {
            format!("{} must be set to run system tests", SystemTestEnv::BaseUrl.as_str())
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
