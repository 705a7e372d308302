// system-tests/src/target/mod.rs
// ============================================================================
// Module: API Target
// Description: Target resolution for the posts server under test.
// Purpose: Turn relative resource paths into absolute endpoint URLs.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The target resolver is the only place the suites know about the server's
//! address. It is pure string prefixing over a configured base endpoint; it
//! performs no validation and defines no error cases of its own.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod resolver;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use resolver::ApiTarget;
