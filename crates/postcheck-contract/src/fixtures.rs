// crates/postcheck-contract/src/fixtures.rs
// ============================================================================
// Module: Reference Fixtures
// Description: Reference dataset loading for read-suite oracles.
// Purpose: Parse the server's seed data into typed posts and comments.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Read suites compare live responses against a static reference dataset
//! shaped like the server's seed file (`{"posts": [...], "comments": [...]}`).
//! The dataset is the expected-value oracle; it is loaded once per suite and
//! never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::Comment;
use crate::ContractError;
use crate::Post;

// ============================================================================
// SECTION: Dataset Types
// ============================================================================

/// The reference dataset used as the expected-value oracle in read suites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Seed posts in server order.
    pub posts: Vec<Post>,
    /// Seed comments in server order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ReferenceData {
    /// Parses a reference dataset from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::FixtureFormat`] when the document does not
    /// match the seed-data shape.
    pub fn from_json_str(raw: &str) -> Result<Self, ContractError> {
        serde_json::from_str(raw).map_err(ContractError::FixtureFormat)
    }

    /// Reads and parses a reference dataset from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::FixtureIo`] when the file cannot be read and
    /// [`ContractError::FixtureFormat`] when its contents do not parse.
    pub fn from_path(path: &Path) -> Result<Self, ContractError> {
        let raw = fs::read_to_string(path).map_err(|source| ContractError::FixtureIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Returns the seed post with the given identifier, when present.
    #[must_use]
    pub fn post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Returns the seed comments belonging to the given post.
    #[must_use]
    pub fn comments_for(&self, post_id: i64) -> Vec<&Comment> {
        self.comments.iter().filter(|comment| comment.post_id == post_id).collect()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
