//! HTTP request handlers for the web adapter.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::instrument::Instrument;
use crate::domain::ohlcv::DailyBasic;
use crate::domain::prediction::PredictionPoint;
use crate::domain::series::InstrumentQuote;
use crate::domain::technical::TechnicalFactor;
use crate::domain::window::{PageRequest, Window};

use super::{AppState, WebError};

/// Raw pagination parameters; parsing is left to [`PageRequest::from_query`].
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageQuery {
    pub fn request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.size.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct StockDetail {
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_date: Option<String>,
}

impl From<Instrument> for StockDetail {
    fn from(i: Instrument) -> Self {
        Self {
            symbol: i.symbol,
            name: i.name,
            area: i.area,
            industry: i.industry,
            exchange: i.exchange,
            list_date: i.list_date,
        }
    }
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "API Server is running!",
        "endpoints": {
            "stocks": "/api/stocks",
            "stock": "/api/stocks/{id}",
            "predictions": "/api/stocks/{id}/predictions",
            "daily_basics": "/api/stocks/{id}/daily-basics",
            "daily_technical_factors": "/api/stocks/{id}/daily-technical-factors",
        }
    }))
}

pub async fn list_stocks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Window<InstrumentQuote>>, WebError> {
    let instruments = state.registry.list_instruments()?;
    let window = state
        .engine
        .quotes(instruments, state.anchor_date(), query.request());
    Ok(Json(window))
}

pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StockDetail>, WebError> {
    let instrument = state.registry.find_instrument(&id)?;
    Ok(Json(instrument.into()))
}

pub async fn predictions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Window<PredictionPoint>>, WebError> {
    let instrument = state.registry.find_instrument(&id)?;
    let window = state
        .engine
        .predictions(&instrument.symbol, state.anchor_date(), query.request());
    Ok(Json(window))
}

pub async fn daily_basics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Window<DailyBasic>>, WebError> {
    let instrument = state.registry.find_instrument(&id)?;
    let window = state
        .engine
        .daily_basics(&instrument.symbol, state.anchor_date(), query.request());
    Ok(Json(window))
}

pub async fn daily_technical_factors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Window<TechnicalFactor>>, WebError> {
    let instrument = state.registry.find_instrument(&id)?;
    let window = state
        .engine
        .technical_factors(&instrument.symbol, state.anchor_date(), query.request());
    Ok(Json(window))
}

pub async fn not_found() -> WebError {
    WebError::endpoint_not_found()
}
