//! SQLite persistence for the breed catalog.

pub mod database;
pub mod repository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Connection shared between the handle and its repositories.
pub type DbConn = Arc<Mutex<Connection>>;

pub use database::Database;
pub use repository::{BreedStore, SqliteBreedRepository};
