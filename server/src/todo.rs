//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the stored record; `CreateTodo` and `UpdateTodo` are the request
//! payloads. The wire format uses camelCase (`isComplete`) to match the
//! public JSON contract. `CreateTodo` carries no id field, so a client that
//! sends one is silently ignored and the store's assignment wins.

use serde::{Deserialize, Serialize};

/// A single todo record as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Request payload for creating a new todo. `isComplete` defaults to false
/// when omitted; an explicit true is honored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Request payload for updating an existing todo. Both fields are required;
/// an update overwrites the record's mutable fields in place.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub name: String,
    pub is_complete: bool,
}
