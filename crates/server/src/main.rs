mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::{get, post};
use grflex::prelude::*;
use std::{process, sync::Arc};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = Config::from_env();

    let mut locator = Locator::new();
    if let Some(path) = &config.suppliers_path {
        match locator::load_csv_file(path) {
            Ok(suppliers) => locator = locator.with_suppliers(suppliers),
            Err(err) => {
                error!("Failed to load suppliers from {}: {err}", path.display());
                process::exit(1);
            }
        }
    }
    info!("Serving {} suppliers", locator.suppliers().len());

    let geocoder = match NominatimGeocoder::new(config.geocoder) {
        Ok(geocoder) => geocoder,
        Err(err) => {
            error!("Failed to build geocoder: {err}");
            process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        estimator: Estimator::default(),
        locator,
        geocoder,
        submitter: StubSubmitter::new(),
        position_timeout: position::DEFAULT_TIMEOUT,
    });

    let app = axum::Router::new()
        .route("/estimate", get(api::estimate))
        .route("/suppliers/search", get(api::search))
        .route("/suppliers/near", get(api::near))
        .route("/suppliers/page", get(api::page))
        .route("/suppliers/apply", post(api::apply))
        .route("/contact", post(api::contact))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
