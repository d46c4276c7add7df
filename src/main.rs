mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod utils;
mod validators;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::CONFIG;
use crate::repositories::{InMemoryUserRepository, UserRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(&CONFIG.log_level));
    CONFIG.log_fallbacks();

    // One store shared by every worker
    let store: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let repository = web::Data::from(store);
    info!("Using in-memory user store");

    // Start HTTP server
    let server_addr = CONFIG.bind_address();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let repository = repository.clone();
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes::configure_routes(cfg, repository))
    })
    .bind(&server_addr)?
    .run()
    .await
}
