//! Backend of the dog breed catalog: SQLite persistence, seeding and the
//! read-only `/api/breeds` HTTP surface.

pub mod config;
pub mod db;
pub mod error;
pub mod seed;
pub mod server;
pub mod services;
