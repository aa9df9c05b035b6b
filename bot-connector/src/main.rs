use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod error;
mod models;
mod routes;
mod validators;

#[cfg(test)]
mod test_utils;

use config::Config;
use controllers::{BotController, ChannelController};
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
    pub bots: Arc<dyn BotController>,
    pub channels: Arc<dyn ChannelController>,
}

impl AppState {
    /// Wire both controllers to the same database
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            bots: db.clone(),
            channels: db.clone(),
            db,
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!("Loaded config: {:?}", config);

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).map_err(|e| {
        log::error!("Failed to initialize database: {}", e);
        std::io::Error::other(e)
    })?;
    let db = Arc::new(db);

    for route in routes::all_routes() {
        log::info!("Route {:<6} {:<40} -> {}", route.method.as_str(), route.path, route.name);
    }
    log::info!("Starting bot connector on {}:{}", config.host, config.port);

    let cors_max_age = config.cors_max_age;

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(cors_max_age);

        App::new()
            .app_data(web::Data::new(AppState::new(Arc::clone(&db))))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
