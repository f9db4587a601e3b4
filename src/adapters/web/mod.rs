//! Web server adapter.
//!
//! JSON API over the instrument registry and the series generators. Every
//! series endpoint windows a fixed-horizon series with the same pagination
//! policy.

mod error;
mod handlers;

pub use error::WebError;
pub use handlers::*;

use axum::{routing::get, Router};
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::series::{today, MarketDataEngine};
use crate::ports::instrument_port::InstrumentPort;

pub struct AppState {
    pub registry: Arc<dyn InstrumentPort + Send + Sync>,
    pub engine: MarketDataEngine,
    /// Fixed anchor date; `None` anchors every request at the current UTC date.
    pub anchor: Option<NaiveDate>,
    pub cors: bool,
}

impl AppState {
    pub fn new(registry: Arc<dyn InstrumentPort + Send + Sync>, engine: MarketDataEngine) -> Self {
        Self {
            registry,
            engine,
            anchor: None,
            cors: true,
        }
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(today)
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = state.cors;
    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/api/stocks", get(handlers::list_stocks))
        .route("/api/stocks/{id}", get(handlers::get_stock))
        .route("/api/stocks/{id}/predictions", get(handlers::predictions))
        .route("/api/stocks/{id}/daily-basics", get(handlers::daily_basics))
        .route(
            "/api/stocks/{id}/daily-technical-factors",
            get(handlers::daily_technical_factors),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
