use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use backend::config::Settings;
use backend::db::Database;
use backend::server;
use env_logger::Env;
use log::{error, info};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = Settings::from_env();
    let url = settings.url();

    // Store must be reachable and synced before the first request is accepted.
    let db = Database::open_at(&settings.database_path)
        .and_then(|db| {
            db.connect()?;
            db.sync()?;
            Ok(db)
        })
        .map_err(|e| {
            error!("Critical error during startup: {}", e);
            std::io::Error::from(e)
        })?;
    info!("Using breed store at {}", settings.database_path.display());

    let store = web::Data::new(db.breed_repo());
    let public_dir = settings.public_dir.clone();

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Dog breeds server running at {}", url);

    let result = HttpServer::new(move || {
        let store = store.clone();
        let public_dir = public_dir.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(server::cors_headers())
            .configure(move |cfg| server::configure(cfg, store, &public_dir))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await;

    db.close()?;
    result
}
