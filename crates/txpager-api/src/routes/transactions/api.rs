//! Transactions API endpoints
//!
//! Endpoints:
//! - api_transactions: all records in canonical order (JSON)
//! - api_transaction_detail: single record (JSON)
//! - api_create_transaction: store a new record and jump to its page

use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode, Json};
use serde::Serialize;
use txpager_core::{direction_or_default, sort_by_timestamp, CoreError, Identified, Matcher, RecordDraft};

use crate::error::ApiResult;
use crate::routes::view::{PageView, RecordView};
use crate::AppState;

/// List every record (JSON API)
///
/// `?direction=asc|desc` overrides the session's ordering for this response
/// only; unknown values fall back to newest first.
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Json<Vec<RecordView>> {
    let coordinator = state.coordinator.read().await;
    let currency = &state.config.currency;

    let records = match params.get("direction") {
        Some(raw) => sort_by_timestamp(coordinator.ordered_items(), direction_or_default(Some(raw))),
        None => coordinator.ordered_items().to_vec(),
    };

    Json(records.iter().map(|r| RecordView::new(r, currency)).collect())
}

/// Get single record detail (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> ApiResult<Json<RecordView>> {
    let id = path.0;
    let coordinator = state.coordinator.read().await;

    let view = coordinator
        .ordered_items()
        .iter()
        .find(|r| r.id() == id)
        .map(|r| RecordView::new(r, &state.config.currency));

    match view {
        Some(view) => Ok(Json(view)),
        None => Err(CoreError::RecordNotFound { id }.into()),
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub record: RecordView,
    /// The page now showing the new record
    pub page: PageView,
}

/// Store a new record, refresh the session and move to the record's page
pub async fn api_create_transaction(
    state: axum::extract::State<AppState>,
    Json(draft): Json<RecordDraft>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let record = state.source.create(draft).await?;
    let records = state.source.fetch_all().await?;

    let mut coordinator = state.coordinator.write().await;
    coordinator.refresh(&records);
    let page = coordinator.go_to_item(Matcher::Id(record.id()));
    log::info!("Created record {}, now on page {}", record.id(), page);

    let currency = &state.config.currency;
    let response = CreatedResponse {
        record: RecordView::new(&record, currency),
        page: PageView::new(&coordinator.view(), currency),
    };
    Ok((StatusCode::CREATED, Json(response)))
}
