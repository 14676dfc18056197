//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's wire schema but are declared
//! independently of the server crate, so a schema change on either side
//! shows up as an integration-test failure instead of silently compiling.
//! The wire format is camelCase (`isComplete`).

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Request payload for creating a new todo. The server assigns the id;
/// `isComplete` defaults to false when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Request payload for updating an existing todo. Both fields are required:
/// a PUT overwrites the record's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub name: String,
    pub is_complete: bool,
}
