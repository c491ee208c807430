use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

use crate::client::Scraped;
use crate::output::config::parse_flag;
use crate::telemetry::{self};
use crate::telemetry::ops::serve::Phase as ServePhase;

use super::{ApiError, AppState};

/// Raw query string. Empty values count as absent.
#[derive(Debug, Default)]
pub struct ScrapeQuery {
    pub url: Option<String>,
    pub page: Option<String>,
    pub genre: Option<String>,
    pub kind: Option<String>,
    pub strict: Option<String>,
}

impl ScrapeQuery {
    /// First value wins for a repeated key; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = ScrapeQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut q.url,
                "page" => &mut q.page,
                "genre" => &mut q.genre,
                "type" => &mut q.kind,
                "strict" => &mut q.strict,
                _ => continue,
            };
            if slot.is_none() { *slot = Some(value); }
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Home { page: u32 },
    Genre { slug: String, page: u32 },
    Detail { url: String },
}

/// Home when there is no url and type is home; then genre; then url; else invalid.
/// A query carrying none of url/page/genre/type names no operation at all.
pub fn dispatch(q: &ScrapeQuery) -> Result<Operation, ApiError> {
    if [&q.url, &q.page, &q.genre, &q.kind].into_iter().all(|v| present(v).is_none()) {
        return Err(ApiError::InvalidRequest);
    }
    let url = present(&q.url);
    let genre = present(&q.genre);
    let kind = present(&q.kind).unwrap_or("home");

    if url.is_none() && kind == "home" {
        return Ok(Operation::Home { page: page_number(q)? });
    }
    if let Some(slug) = genre {
        return Ok(Operation::Genre { slug: slug.to_string(), page: page_number(q)? });
    }
    if let Some(url) = url {
        return Ok(Operation::Detail { url: url.to_string() });
    }
    Err(ApiError::InvalidRequest)
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn page_number(q: &ScrapeQuery) -> Result<u32, ApiError> {
    present(&q.page).unwrap_or("1").trim().parse().map_err(|_| ApiError::InvalidRequest)
}

#[derive(Serialize)]
pub struct Success {
    success: bool,
    data: Value,
}

pub async fn scrape_handler(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Success>, ApiError> {
    let Query(pairs) = pairs.map_err(|_| ApiError::InvalidRequest)?;
    let query = ScrapeQuery::from_pairs(pairs);
    let op = dispatch(&query)?;
    let strict = parse_flag(present(&query.strict));
    let log = telemetry::serve();
    let span = log.span_kv(&ServePhase::Dispatch, [("operation", format!("{:?}", op)), ("strict", strict.to_string())]);

    let service = state.service.clone();
    async move {
        match op {
            Operation::Home { page } => success(service.home(page).await?, strict),
            Operation::Genre { slug, page } => success(service.genre(&slug, page).await?, strict),
            Operation::Detail { url } => success(service.detail(&url).await?, strict),
        }
    }
    .instrument(span)
    .await
}

fn success<T: Serialize>(scraped: Scraped<T>, strict: bool) -> Result<Json<Success>, ApiError> {
    let data = scraped.to_value(strict).map_err(|e| ApiError::Upstream(e.into()))?;
    Ok(Json(Success { success: true, data }))
}
