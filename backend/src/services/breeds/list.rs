//! # Breed Listing Service
//!
//! Backend logic for `GET /api/breeds`.
//!
//! The store read is synchronous, so it runs on actix's blocking pool through
//! `web::block` and the worker thread stays free for other requests. Every
//! failure is turned into a `500 Internal Server Error` with a JSON body; the
//! client always gets an answer.

use crate::db::BreedStore;
use crate::error::StoreError;
use actix_web::{web, HttpResponse, Responder};
use common::model::breed::Breed;
use log::error;
use serde::{Deserialize, Serialize};

/// JSON body sent with error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Actix web handler for the `GET /api/breeds` endpoint.
///
/// # Returns
/// - `200 OK` with the array of `Breed` objects (possibly empty).
/// - `500 Internal Server Error` with an [`ErrorBody`] when the store fails.
pub async fn process<S: BreedStore>(store: web::Data<S>) -> impl Responder {
    match list_breeds(store).await {
        Ok(breeds) => HttpResponse::Ok().json(breeds),
        Err(e) => {
            error!("Failed to load breeds: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody {
                error: format!("Failed to load breeds: {}", e),
            })
        }
    }
}

async fn list_breeds<S: BreedStore>(store: web::Data<S>) -> Result<Vec<Breed>, String> {
    let result: Result<Vec<Breed>, StoreError> = web::block(move || store.list_all())
        .await
        .map_err(|e| e.to_string())?;
    result.map_err(|e| e.to_string())
}
