use crate::app::App;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::routes::Routes;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod handlers;
mod responses;
mod router;
mod routes;
mod search;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "could not load site settings");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let app = App::new(db, settings, Routes::default()).with_static_dir(config.static_dir.clone());

    info!(addr = %config.addr, workers = config.workers, "starting server");
    let server = Server::bind(&config.addr).max_workers(config.workers);
    let result = server.serve(move |req, _info| router::serve(req, &app));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
