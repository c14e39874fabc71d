//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Envelope, ErrorBody, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo API.
///
/// `base_url` includes the API prefix, e.g. `http://localhost:3000/api/v1`.
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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.bodiless(HttpMethod::Get, format!("{}/todos/{id}", self.base_url))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, format!("{}/todos", self.base_url), input)
    }

    pub fn build_update_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, format!("{}/todos/{id}", self.base_url), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, format!("{}/todos/{id}", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Like `parse_update_todo` but ignores the body. An optimistic update has
    /// already applied the change locally and only needs to know it stuck.
    pub fn parse_update_ack(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn bodiless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_body<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&Envelope { todo: input })
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        422 => match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(body) => Err(ApiError::Validation(body.errors)),
            Err(_) => Err(http_error(response)),
        },
        _ => Err(http_error(response)),
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
