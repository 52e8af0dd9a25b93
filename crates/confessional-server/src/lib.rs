//! HTTP API for confessional.
//!
//! Glues the chat client to theme extraction and the matcher:
//!
//! - `POST /api/analyze-feelings` takes `{ message }`, extracts themes, and
//!   returns `{ song, themes, score }`.
//! - `POST /api/analyze` takes `{ message, themes }` with themes already
//!   extracted and returns `{ score, song, themes }`.
//! - `GET /api/health` reports liveness.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use confessional_agent::Config;

pub use error::{ApiError, ErrorEnvelope};
pub use models::{AnalyzeFeelingsRequest, AnalyzeFeelingsResponse, AnalyzeRequest, AnalyzeResponse};
pub use state::AppState;

/// Register routes and JSON handling on an app.
///
/// Shared by [`serve`] and the route tests so both exercise the same app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/analyze-feelings", web::post().to(handlers::analyze_feelings))
            .route("/analyze", web::post().to(handlers::analyze)),
    );
}

/// Run the HTTP server until it is stopped.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config).context("Failed to initialise application state")?;
    log::info!(
        "Serving {} songs with {} scoring on http://{}",
        state.catalog.len(),
        state.matcher.policy(),
        config.bind_address
    );

    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(&config.bind_address)
    .with_context(|| format!("Failed to bind {}", config.bind_address))?
    .run()
    .await
    .context("HTTP server failed")?;

    log::info!("Server stopped");
    Ok(())
}
