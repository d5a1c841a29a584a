//! # Breed Service Module
//!
//! Routes under `/api/breeds`. The catalog is read-only over HTTP, so the
//! scope holds a single listing endpoint.
//!
//! ## Sub-modules:
//! - `list`: returns every stored breed, newest first.

mod list;

use crate::db::BreedStore;
use actix_web::web::{get, scope};
use actix_web::Scope;

pub use list::ErrorBody;

/// The base path for all breed-related API endpoints.
const API_PATH: &str = "/api/breeds";

/// Configures and returns the Actix `Scope` for all breed routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/breeds`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the JSON array of all breeds ordered by creation
///       time, newest first. An empty catalog yields `[]`. Store failures answer
///       `500` with an `{"error": ...}` body.
///
/// The store type `S` must be registered as `web::Data<S>` on the app.
pub fn configure_routes<S: BreedStore>() -> Scope {
    scope(API_PATH).route("", get().to(list::process::<S>))
}
