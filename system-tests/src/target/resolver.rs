// system-tests/src/target/resolver.rs
// ============================================================================
// Module: API Target Resolver
// Description: Builds absolute request URLs from relative resource paths.
// Purpose: Prefix a configured base endpoint onto suite-supplied paths.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Given a relative resource path such as `posts/1`, the resolver returns
//! the absolute URL by prefixing the configured base endpoint. Malformed
//! input passes through unchanged; rejecting it is the server's job, and
//! several suites rely on that to probe failure paths.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::config::SystemTestConfig;

// ============================================================================
// SECTION: Target Types
// ============================================================================

/// Resolved API target for the posts server under test.
///
/// # Invariants
/// - Holds no state beyond the configured base endpoint.
/// - Never validates or rewrites resource paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    /// Base endpoint without a trailing slash.
    endpoint: String,
}

impl ApiTarget {
    /// Creates a target from a base endpoint.
    ///
    /// A single trailing slash on the endpoint is tolerated so that both
    /// `http://host/api` and `http://host/api/` resolve identically.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        if endpoint.ends_with('/') {
            endpoint.pop();
        }
        Self {
            endpoint,
        }
    }

    /// Creates a target from the loaded system-test configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when no base URL is configured.
    pub fn from_config(config: &SystemTestConfig) -> Result<Self, String> {
        Ok(Self::new(config.require_base_url()?))
    }

    /// Returns the configured base endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the absolute URL for a relative resource path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint)
    }
}
