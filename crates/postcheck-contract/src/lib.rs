// crates/postcheck-contract/src/lib.rs
// ============================================================================
// Module: Postcheck Contract
// Description: Wire contract for the posts/comments API under test.
// Purpose: Provide typed request/response shapes, fixture loading, and schemas.
// Dependencies: serde, serde_json, jsonschema, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the shapes the posts/comments server exchanges over
//! HTTP, the reference fixture dataset used as the expected-value oracle in
//! read tests, and the registered `idSearch` JSON schema. The server itself
//! is an external collaborator; nothing here implements its behavior, only
//! the contract the system-test suites hold it to.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod error;
pub mod fixtures;
pub mod schemas;
mod types;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::ContractError;
pub use fixtures::ReferenceData;
pub use types::Comment;
pub use types::DataEnvelope;
pub use types::Post;
pub use types::PostDraft;
