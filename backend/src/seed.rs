//! Idempotent seeding of the reference breeds.
//!
//! Each record is find-or-created by `title`, so running the seed again only
//! inserts titles that are still missing and never touches existing rows.

use crate::db::{BreedStore, Database};
use crate::error::StoreError;
use common::model::breed::NewBreed;
use log::{debug, info};
use std::path::Path;

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Rows written by this run.
    pub inserted: usize,
    /// Rows in the table once the run finished.
    pub total: u64,
}

/// The reference dataset shipped with the catalog.
pub fn reference_breeds() -> Vec<NewBreed> {
    vec![
        NewBreed::new(
            "Labrador Retriever",
            "Canada",
            "One of the most popular breeds, known for its friendly temperament and intelligence.",
            1915,
        )
        .with_image("/images/labrador.jpg"),
        NewBreed::new(
            "German Shepherd",
            "Germany",
            "A breed known for its loyalty and excellent working qualities.",
            1899,
        )
        .with_image("/images/german_shepherd.jpg"),
        NewBreed::new(
            "Chihuahua",
            "Mexico",
            "A tiny dog with a big personality, known for its devotion and energy.",
            1950,
        )
        .with_image("/images/chihuahua.jpg"),
        NewBreed::new(
            "Russian Borzoi",
            "Russia",
            "A hunting sighthound with remarkable speed and stamina, the pride of Russia.",
            1900,
        )
        .with_image("/images/russian_borzaya.jpg"),
        NewBreed::new(
            "Estonian Hound",
            "Estonia",
            "A medium-sized hunting dog with an excellent nose and great endurance.",
            1930,
        )
        .with_image("/images/estonian_hound.jpg"),
        NewBreed::new(
            "Rough Collie",
            "United Kingdom",
            "A smart and devoted medium-sized dog, known for being easy to train and affectionate.",
            1870,
        )
        .with_image("/images/test.jpg"),
    ]
}

/// Connect, sync the schema and find-or-create every entry of `breeds`.
///
/// A connect or sync failure aborts before anything is written. A failure on a
/// later record stops the run; records inserted before it stay in place.
pub fn run(db: &Database, breeds: &[NewBreed]) -> Result<SeedReport, StoreError> {
    db.connect()?;
    db.sync()?;

    let repo = db.breed_repo();
    let mut inserted = 0;
    for breed in breeds {
        let (stored, created) = repo.find_or_create(breed)?;
        if created {
            debug!("Seeded breed {:?} (id {})", stored.title, stored.id);
            inserted += 1;
        }
    }

    let total = repo.count()?;
    info!("Seed finished: {} new breeds, {} in store", inserted, total);
    Ok(SeedReport { inserted, total })
}

/// Open the store file at `path`, seed it with `breeds` and close it again.
pub fn run_at(path: impl AsRef<Path>, breeds: &[NewBreed]) -> Result<SeedReport, StoreError> {
    let db = Database::open_at(path)?;
    let report = run(&db, breeds)?;
    db.close()?;
    Ok(report)
}
