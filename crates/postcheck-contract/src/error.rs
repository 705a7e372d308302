// crates/postcheck-contract/src/error.rs
// ============================================================================
// Module: Contract Errors
// Description: Error taxonomy for contract parsing and schema compilation.
// Purpose: Give fixture and schema failures typed, propagatable causes.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors raised while loading the reference fixture dataset or compiling
//! the registered JSON schemas. Server-side failures carry no taxonomy in
//! this contract; they surface only as status codes and free-text bodies,
//! which the suites check by substring.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Errors produced by contract-side parsing and schema handling.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Reading a fixture file from disk failed.
    #[error("failed to read fixture {path}: {source}")]
    FixtureIo {
        /// Path of the fixture that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A fixture document did not match the expected dataset shape.
    #[error("invalid fixture document: {0}")]
    FixtureFormat(#[source] serde_json::Error),
    /// A registered schema failed to compile.
    #[error("schema compilation failed for {name}: {message}")]
    SchemaCompile {
        /// Name of the registered schema.
        name: String,
        /// Compiler diagnostic.
        message: String,
    },
}
