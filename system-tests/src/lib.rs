// system-tests/src/lib.rs
// ============================================================================
// Module: Postcheck System Tests Library
// Description: Shared configuration and target resolution for system tests.
// Purpose: Provide common utilities for the posts-API system-test suites.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the environment-backed configuration and the API target
//! resolver shared by the posts-API system-test binaries in
//! `system-tests/tests`. The server under test is external; the suites only
//! reach it through URLs produced by [`target::ApiTarget`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod target;
