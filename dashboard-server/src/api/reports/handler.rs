//! Financial Report API Handlers
//!
//! Reports are derived on demand from an event and one of its entries;
//! nothing here is persisted.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::reports::calculate_report;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Event, EventReport};

// =============================================================================
// Query / Response Types
// =============================================================================

/// Optional entry selector for a single-event report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// Report a specific entry instead of the latest one
    pub entry_id: Option<String>,
}

/// One row of the report listing
///
/// `report` is `null` for events without any entries yet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub event: Event,
    pub report: Option<EventReport>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/reports - 每个活动的最新报告 (日期倒序)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<ReportRow>>>> {
    let events = state.repo.list_events().await?;

    let mut rows = Vec::with_capacity(events.len());
    for event in events {
        let report = calculate_report(state.repo.as_ref(), &event.id, None).await?;
        rows.push(ReportRow { event, report });
    }

    Ok(ok(rows))
}

/// GET /api/reports/:event_id - 单个活动的报告
///
/// 默认使用最新场次记录, `?entryId=` 可指定某一场
pub async fn get_for_event(
    State(state): State<ServerState>,
    Path(event_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<AppResponse<EventReport>>> {
    let report = calculate_report(state.repo.as_ref(), &event_id, query.entry_id.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found(format!("No report available for event {}", event_id)))?;

    Ok(ok(report))
}
