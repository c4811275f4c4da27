//! Dashboard API Handlers
//!
//! Aggregates store-wide stats for the landing view. Totals are summed
//! over per-entry reports so every recorded night counts, not just the
//! latest one per event.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::ServerState;
use crate::reports::calculate_report;
use crate::reports::money::{to_decimal, to_f64};
use crate::utils::{AppResponse, AppResult, ok};
use shared::models::{Event, EventEntry};

/// Upcoming events shown on the dashboard
const UPCOMING_LIMIT: usize = 3;

/// Recent entries shown on the dashboard
const RECENT_LIMIT: usize = 5;

// =============================================================================
// Response Types
// =============================================================================

/// Store-wide aggregate numbers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    /// Mean attendance across all entries (0 when there are none)
    pub avg_attendance: f64,
}

/// Dashboard summary payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    /// Events dated today or later, soonest first
    pub upcoming_events: Vec<Event>,
    /// Newest entries across all events
    pub recent_entries: Vec<EventEntry>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/dashboard - 仪表盘汇总
pub async fn summary(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<DashboardResponse>>> {
    let events = state.repo.list_events().await?;
    let entries = state.repo.list_entries(None).await?;

    let mut total_revenue = Decimal::ZERO;
    let mut total_profit = Decimal::ZERO;
    let mut total_attendance: u64 = 0;

    for entry in &entries {
        // Entries whose event vanished contribute nothing
        let Some(report) =
            calculate_report(state.repo.as_ref(), &entry.event_id, Some(&entry.id)).await?
        else {
            continue;
        };

        total_revenue += to_decimal(report.total_revenue);
        total_profit += to_decimal(report.profit);
        total_attendance += u64::from(entry.attendance);
    }

    // Attendance averages over every entry, reported or not
    let avg_attendance = if entries.is_empty() {
        0.0
    } else {
        total_attendance as f64 / entries.len() as f64
    };

    let today = shared::util::today();
    let mut upcoming_events: Vec<Event> =
        events.iter().filter(|e| e.date >= today).cloned().collect();
    upcoming_events.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming_events.truncate(UPCOMING_LIMIT);

    let stats = DashboardStats {
        total_events: events.len(),
        total_revenue: to_f64(total_revenue),
        total_profit: to_f64(total_profit),
        avg_attendance,
    };

    let mut recent_entries = entries;
    recent_entries.truncate(RECENT_LIMIT);

    Ok(ok(DashboardResponse {
        stats,
        upcoming_events,
        recent_entries,
    }))
}
