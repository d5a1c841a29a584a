//! Fills the breed store with the reference dataset.
//!
//! Safe to run repeatedly: only titles missing from the store are inserted.
//! Exits with status 1 when the store cannot be opened, synced or written.

use backend::config::Settings;
use backend::seed;
use env_logger::Env;
use log::{error, info};

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = Settings::from_env();

    match seed::run_at(&settings.database_path, &seed::reference_breeds()) {
        Ok(report) => {
            info!(
                "Seeding complete. New breeds added: {}. Total in store: {}.",
                report.inserted, report.total
            );
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            std::process::exit(1);
        }
    }
}
