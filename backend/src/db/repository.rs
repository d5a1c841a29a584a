use super::DbConn;
use crate::error::StoreError;
use chrono::Utc;
use common::model::breed::{Breed, NewBreed, ValidBreed};
use rusqlite::{params, OptionalExtension, Row};

/// Storage operations for breeds.
///
/// Implementors provide the raw reads and the insert of an already validated
/// record; validation and find-or-create are shared on top of those.
pub trait BreedStore: Send + Sync + 'static {
    fn insert(&self, breed: &ValidBreed) -> Result<Breed, StoreError>;

    /// First breed stored under `title`, if any.
    fn find_by_title(&self, title: &str) -> Result<Option<Breed>, StoreError>;

    /// Every breed, newest first.
    fn list_all(&self) -> Result<Vec<Breed>, StoreError>;

    fn count(&self) -> Result<u64, StoreError>;

    /// Validate `input` and insert it. Nothing is written when validation fails.
    fn create(&self, input: &NewBreed) -> Result<Breed, StoreError> {
        let breed = input.validate()?;
        self.insert(&breed)
    }

    /// Return the breed titled like `input`, inserting it first when absent.
    /// The flag is `true` when a new row was written. Existing rows are never
    /// updated, and the rest of `input` is only validated when it gets inserted.
    fn find_or_create(&self, input: &NewBreed) -> Result<(Breed, bool), StoreError> {
        if let Some(title) = input.title.as_deref().filter(|t| !t.trim().is_empty()) {
            if let Some(existing) = self.find_by_title(title)? {
                return Ok((existing, false));
            }
        }
        let breed = input.validate()?;
        Ok((self.insert(&breed)?, true))
    }
}

/// [`BreedStore`] over the `dogs` table of a SQLite connection.
#[derive(Clone)]
pub struct SqliteBreedRepository {
    conn: DbConn,
}

const SELECT_COLUMNS: &str =
    "SELECT id, title, origin, image, description, year, created_at, updated_at FROM dogs";

impl SqliteBreedRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    fn row_to_breed(row: &Row<'_>) -> rusqlite::Result<Breed> {
        Ok(Breed {
            id: row.get(0)?,
            title: row.get(1)?,
            origin: row.get(2)?,
            image: row.get(3)?,
            description: row.get(4)?,
            year: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

impl BreedStore for SqliteBreedRepository {
    fn insert(&self, breed: &ValidBreed) -> Result<Breed, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let now = Utc::now();
        conn.execute(
            r#"
            INSERT INTO dogs (title, origin, image, description, year, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                breed.title(),
                breed.origin(),
                breed.image(),
                breed.description(),
                breed.year(),
                now,
                now
            ],
        )?;

        Ok(Breed {
            id: conn.last_insert_rowid(),
            title: breed.title().to_string(),
            origin: breed.origin().to_string(),
            image: breed.image().to_string(),
            description: breed.description().to_string(),
            year: breed.year(),
            created_at: now,
            updated_at: now,
        })
    }

    fn find_by_title(&self, title: &str) -> Result<Option<Breed>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE title = ?1 ORDER BY id LIMIT 1"
        ))?;
        let breed = stmt
            .query_row(params![title], Self::row_to_breed)
            .optional()?;
        Ok(breed)
    }

    fn list_all(&self) -> Result<Vec<Breed>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], Self::row_to_breed)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM dogs", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use common::model::breed::DEFAULT_IMAGE;
    use common::schema::ValidationError;

    fn repo() -> SqliteBreedRepository {
        let db = Database::open_in_memory().unwrap();
        db.sync().unwrap();
        db.breed_repo()
    }

    fn breed(title: &str) -> NewBreed {
        NewBreed::new(title, "Canada", "Friendly and intelligent.", 1915)
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let repo = repo();
        let created = repo
            .create(&breed("Labrador Retriever").with_image("/images/labrador.jpg"))
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.image, "/images/labrador.jpg");
        assert_eq!(created.created_at, created.updated_at);

        let stored = repo.find_by_title("Labrador Retriever").unwrap().unwrap();
        assert_eq!(stored, created);
    }

    #[test]
    fn create_without_image_stores_default() {
        let repo = repo();
        let created = repo.create(&breed("Golden Retriever")).unwrap();
        assert_eq!(created.image, DEFAULT_IMAGE);
        assert_eq!(
            repo.find_by_title("Golden Retriever").unwrap().unwrap().image,
            DEFAULT_IMAGE
        );
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let repo = repo();
        let err = repo.create(&breed("Blank Image").with_image("")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyField("image"))
        ));

        let mut ancient = breed("Ancient");
        ancient.year = Some(1699);
        assert!(matches!(
            repo.create(&ancient),
            Err(StoreError::Validation(ValidationError::YearOutOfRange { .. }))
        ));
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn list_all_on_empty_table_is_empty() {
        assert!(repo().list_all().unwrap().is_empty());
    }

    #[test]
    fn list_all_returns_newest_first() {
        let repo = repo();
        for title in ["A", "B", "C"] {
            repo.create(&breed(title)).unwrap();
        }

        let titles: Vec<String> = repo.list_all().unwrap().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn find_or_create_leaves_existing_rows_untouched() {
        let repo = repo();
        let (first, created) = repo.find_or_create(&breed("Chihuahua")).unwrap();
        assert!(created);

        let changed = NewBreed::new("Chihuahua", "Somewhere else", "Different text.", 2000)
            .with_image("/images/other.jpg");
        let (again, created) = repo.find_or_create(&changed).unwrap();
        assert!(!created);
        assert_eq!(again, first);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn find_or_create_ignores_invalid_fields_for_existing_title() {
        let repo = repo();
        let (first, _) = repo.find_or_create(&breed("Borzoi")).unwrap();

        let mut stale = breed("Borzoi").with_image("");
        stale.year = Some(1500);
        let (again, created) = repo.find_or_create(&stale).unwrap();
        assert!(!created);
        assert_eq!(again, first);

        let mut fresh = breed("Saluki");
        fresh.year = Some(1500);
        assert!(matches!(
            repo.find_or_create(&fresh),
            Err(StoreError::Validation(ValidationError::YearOutOfRange { .. }))
        ));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn list_all_fails_with_query_error_without_table() {
        let db = Database::open_in_memory().unwrap();
        let err = db.breed_repo().list_all().unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
        assert!(!err.is_fatal());
    }
}
