//! Application wiring shared by the server binary and the integration tests.

use crate::db::BreedStore;
use crate::services;
use actix_files::Files;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;
use std::path::Path;

/// Registers the breed API and the static asset root on `cfg`.
///
/// The API scope goes first; everything else falls through to files under
/// `public_dir`, with `index.html` served for `/`.
pub fn configure<S: BreedStore>(cfg: &mut web::ServiceConfig, store: web::Data<S>, public_dir: &Path) {
    cfg.app_data(store)
        .service(services::breeds::configure_routes::<S>())
        .service(Files::new("/", public_dir).index_file("index.html"));
}

/// Headers added to every response so the API can be consumed cross-origin.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}
