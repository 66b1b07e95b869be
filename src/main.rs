mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod stores;
mod structs;
mod utils;

use std::sync::Arc;

use crate::config::service_config::ServiceConfig;
use crate::state::app_state::AppState;
use crate::stores::{MongoProfileStore, MySqlVisitStore, VisitStore};
use actix_web::{App, HttpServer, middleware::Logger, web};
use db::mongodb::get_database;
use db::mysql::{connect_options, describe, get_pool};
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // A missing or unusable SQL URL leaves the visit log uninitialized
    let visits: Option<Arc<dyn VisitStore>> = match config.sql_url.as_deref().map(connect_options) {
        Some(Ok(options)) => {
            log::info!("connecting to: {}", describe(&options));
            let pool = get_pool(options, config.sql_max_connections);
            Some(Arc::new(MySqlVisitStore::new(pool)))
        }
        Some(Err(e)) => {
            log::error!("Unusable SQL URL, visit logging disabled: {:#}", e);
            None
        }
        None => None,
    };

    let handler = config.handler();
    let db = match get_database(&config.mongodb_uri, &config.mongodb_database).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("Error connecting to the document store: {}", e);
            std::process::exit(1);
        }
    };
    let profiles = Arc::new(MongoProfileStore::new(db, handler.docstore_timeout));

    let app_state = web::Data::new(AppState {
        visits,
        profiles,
        config: handler,
    });

    log::info!("Listening on {}:{}", config.bind_addr, config.port);
    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        App::new()
            .wrap(logger)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
