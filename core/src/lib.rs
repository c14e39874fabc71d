//! Synchronous client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `TodoController` keeps the
//! client's copy of the list and drives the four user operations through a
//! host-supplied `Transport`, `Confirmer` and `Notifier`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use controller::{Confirmer, Failure, Notifier, TodoController, TodoState, DELETE_PROMPT};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{CreateTodo, Todo, UpdateTodo};
