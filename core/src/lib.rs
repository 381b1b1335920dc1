//! Shopcart item lifecycle controller.
//!
//! # Overview
//! Drives a customer's shopcart through its item lifecycle — create,
//! update, read, delete, checkout, list, query-by-price — against a REST
//! backend, mirroring each outcome into a `ViewState` (entry form, result
//! table, flash message). Checkout is the one stateful transition: the
//! item leaves the cart for the order stage and disappears from later
//! list and query results.
//!
//! # Design
//! - Host-does-IO: the crate builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network, so every
//!   operation is deterministic and testable without a server.
//! - `ShopcartClient` is stateless (holds only `base_url`); each operation
//!   is a `build_*` / `parse_*` pair with the round-trip in between.
//! - `CartController` layers the screen semantics on top: form snapshots
//!   at build time, presence preconditions, and the per-operation rules
//!   for when a failure clears the form versus preserving it.
//! - All failures decode into one `OperationError`, so the backend's
//!   `message` field is extracted exactly once per response.

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

pub use client::ShopcartClient;
pub use controller::{CartController, Exchange};
pub use error::OperationError;
pub use form::CartForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ItemDraft, ItemFields, ItemState, ShopcartItem};
pub use view::{ResultTable, ViewState, COLUMNS};
