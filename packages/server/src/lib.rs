#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web mock API server for synthetic bloom data.
//!
//! Serves `GET /api/bloom-data`, which answers every valid query with a
//! freshly generated `GeoJSON` feature collection of bloom observations.
//! Intended as a stand-in backend during frontend development: nothing is
//! stored and repeated requests return different data.

mod config;
mod handlers;
pub mod query;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

/// Registers the `/api` routes.
///
/// Query strings that cannot be decoded are answered with a JSON error body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(handlers::query_error))
            .route("/health", web::get().to(handlers::health))
            .route("/bloom-data", web::get().to(handlers::bloom_data)),
    );
}

/// Starts the bloom data API server.
///
/// Initializes logging, reads [`ServerConfig`] from the environment, and
/// runs the Actix-Web HTTP server until shutdown. The caller provides the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env();

    log::info!(
        "Starting bloom data server on {}:{}",
        config.bind_addr,
        config.port
    );

    HttpServer::new(|| {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}
