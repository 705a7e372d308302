// crates/postcheck-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Wire shapes for the posts/comments API under test.
// Purpose: Provide canonical serde models for posts, comments, and envelopes.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Typed wire shapes for the posts/comments server. Successful responses
//! wrap their payload in a `{"data": ...}` envelope; failure responses are
//! free-text bodies and have no typed shape here. Field names follow the
//! server's camelCase wire form (`userId`, `postId`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Resource Types
// ============================================================================

/// A post record as returned by the server.
///
/// # Invariants
/// - `id` is server-assigned; the server rejects client-chosen ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned post identifier.
    pub id: i64,
    /// Identifier of the authoring user.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// A create-request body for `POST posts`.
///
/// Every field is optional so suites can express the failure paths the
/// server must reject: missing required fields, and an explicit `id` the
/// server must refuse to honor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Explicit identifier; only set when probing id-rejection behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Identifier of the authoring user.
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Post title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Post body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PostDraft {
    /// Returns the canonical complete draft used across the create suites.
    #[must_use]
    pub fn example() -> Self {
        Self {
            id: None,
            user_id: Some(1),
            title: Some("title".to_string()),
            body: Some("body".to_string()),
        }
    }

    /// Returns this draft with an explicit identifier set.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Upgrades a complete draft into the post the server is expected to
    /// return once it has assigned `id`.
    ///
    /// Returns `None` when the draft is missing any required field.
    #[must_use]
    pub fn into_post(self, id: i64) -> Option<Post> {
        Some(Post {
            id,
            user_id: self.user_id?,
            title: self.title?,
            body: self.body?,
        })
    }
}

/// A comment record related to a post via `postId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Server-assigned comment identifier.
    pub id: i64,
    /// Identifier of the parent post.
    #[serde(rename = "postId")]
    pub post_id: i64,
    /// Commenter display name.
    pub name: String,
    /// Commenter email address.
    pub email: String,
    /// Comment body text.
    pub body: String,
}

// ============================================================================
// SECTION: Envelope Types
// ============================================================================

/// The `{"data": ...}` wrapper the server puts around successful payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Enveloped payload.
    pub data: T,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
