// crates/postcheck-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: Registered JSON schemas for posts-API responses.
// Purpose: Provide the idSearch shape and compilation helpers for suites.
// Dependencies: jsonschema, serde_json
// ============================================================================

//! ## Overview
//! The suite registers a single schema, `idSearch`, describing the response
//! shape of a single-post lookup: a `data` object carrying integer `userId`
//! and `id` plus string `title` and `body`, all required. Schema assertion
//! is deliberately limited to this one endpoint; everything else is checked
//! by deep equality against expected values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use serde_json::json;

use crate::ContractError;

// ============================================================================
// SECTION: Schema Definitions
// ============================================================================

/// Canonical name of the single-post lookup schema.
pub const ID_SEARCH: &str = "idSearch";

/// Returns the `idSearch` schema for single-post lookup responses.
#[must_use]
pub fn id_search_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "object",
                "properties": {
                    "userId": { "type": "integer" },
                    "id": { "type": "integer" },
                    "title": { "type": "string" },
                    "body": { "type": "string" }
                },
                "required": ["userId", "id", "title", "body"]
            }
        },
        "required": ["data"]
    })
}

// ============================================================================
// SECTION: Compilation
// ============================================================================

/// Compiles a registered schema under JSON Schema Draft 2020-12.
///
/// # Errors
///
/// Returns [`ContractError::SchemaCompile`] when the schema document is not
/// a valid Draft 2020-12 schema.
pub fn compile_schema(name: &str, schema: &Value) -> Result<Validator, ContractError> {
    jsonschema::options().with_draft(Draft::Draft202012).build(schema).map_err(|err| {
        ContractError::SchemaCompile {
            name: name.to_string(),
            message: err.to_string(),
        }
    })
}

/// Validates an instance against a compiled schema, aggregating failures.
///
/// # Errors
///
/// Returns a single message joining every validation error when the
/// instance does not conform.
pub fn assert_matches_schema(
    schema: &Validator,
    instance: &Value,
    label: &str,
) -> Result<(), String> {
    let messages: Vec<String> = schema.iter_errors(instance).map(|err| err.to_string()).collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(format!("schema validation failed ({label}): {}", messages.join("; ")))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
