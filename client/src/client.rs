//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the client
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todoitems", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_completed(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todoitems/complete", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todoitems/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todoitems", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todoitems/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todoitems/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_list_completed(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The `Location` header of a create response, if the server sent one.
    pub fn created_location(&self, response: &HttpResponse) -> Option<String> {
        response
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("location"))
            .map(|(_, value)| value.clone())
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
