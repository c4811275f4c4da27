//! Event Entry API Handlers
//!
//! Entries are validated against their parent event: the revenue field
//! an entry carries must match the event's deal type (`doorRevenue` for
//! Entrance Deal, `totalNightRevenue` for Revenue Share).

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::reports::money::validate_amount;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_date, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{
    DealType, Event, EventEntry, EventEntryCreate, EventEntryUpdate, PromoterDraft, StaffDraft,
};

// =============================================================================
// Query Types
// =============================================================================

/// Optional filters for the entry listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesQuery {
    /// Restrict to entries of one event
    pub event_id: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/entries - 获取场次记录 (最新在前, 可按活动过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EntriesQuery>,
) -> AppResult<Json<AppResponse<Vec<EventEntry>>>> {
    let entries = state.repo.list_entries(query.event_id.as_deref()).await?;
    Ok(ok(entries))
}

/// GET /api/entries/:id - 获取单条场次记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<EventEntry>>> {
    let entry = state
        .repo
        .get_entry(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Entry {} not found", id)))?;

    Ok(ok(entry))
}

/// POST /api/entries - 创建场次记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EventEntryCreate>,
) -> AppResult<Json<AppResponse<EventEntry>>> {
    let event = state
        .repo
        .get_event(&payload.event_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {} not found", payload.event_id)))?;

    validate_entry_create(&event, &payload)?;

    let entry = state.repo.create_entry(payload).await?;

    tracing::info!(entry_id = %entry.id, event_id = %entry.event_id, "Entry created");

    Ok(ok(entry))
}

/// PUT /api/entries/:id - 更新场次记录 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EventEntryUpdate>,
) -> AppResult<Json<AppResponse<EventEntry>>> {
    let current = state
        .repo
        .get_entry(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Entry {} not found", id)))?;

    // Cascade delete keeps entries from outliving their event, so the
    // parent lookup only fails for data written outside the API
    let event = state.repo.get_event(&current.event_id).await?;
    validate_entry_update(event.as_ref(), &payload)?;

    let entry = state
        .repo
        .update_entry(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Entry {} not found", id)))?;

    tracing::info!(entry_id = %entry.id, "Entry updated");

    Ok(ok(entry))
}

/// DELETE /api/entries/:id - 删除场次记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let removed = state.repo.delete_entry(&id).await?;

    if !removed {
        return Err(AppError::not_found(format!("Entry {} not found", id)));
    }

    tracing::info!(entry_id = %id, "Entry deleted");

    Ok(ok(true))
}

// =============================================================================
// Validation
// =============================================================================

fn validate_promoters(promoters: &[PromoterDraft]) -> AppResult<()> {
    for p in promoters {
        validate_required_text(&p.name, "promoter name", MAX_NAME_LEN)?;
        validate_amount(p.commission, "promoter commission")?;
    }
    Ok(())
}

fn validate_staff(staff: &[StaffDraft]) -> AppResult<()> {
    for s in staff {
        validate_required_text(&s.name, "staff name", MAX_NAME_LEN)?;
        validate_required_text(&s.role, "staff role", MAX_NAME_LEN)?;
        validate_amount(s.payment, "staff payment")?;
    }
    Ok(())
}

/// The revenue field is exclusive: exactly one of the two is populated,
/// chosen by the parent event's deal type.
fn validate_revenue_fields(
    deal_type: DealType,
    door_revenue: Option<f64>,
    total_night_revenue: Option<f64>,
) -> AppResult<()> {
    match deal_type {
        DealType::EntranceDeal => {
            if total_night_revenue.is_some() {
                return Err(AppError::validation(
                    "Entrance Deal entries record doorRevenue, not totalNightRevenue",
                ));
            }
            if door_revenue.is_none() {
                return Err(AppError::validation(
                    "Entrance Deal entries must record doorRevenue",
                ));
            }
        }
        DealType::RevenueShare => {
            if door_revenue.is_some() {
                return Err(AppError::validation(
                    "Revenue Share entries record totalNightRevenue, not doorRevenue",
                ));
            }
            if total_night_revenue.is_none() {
                return Err(AppError::validation(
                    "Revenue Share entries must record totalNightRevenue",
                ));
            }
        }
    }
    Ok(())
}

fn validate_entry_create(event: &Event, payload: &EventEntryCreate) -> AppResult<()> {
    validate_date(&payload.date, "date")?;
    validate_promoters(&payload.promoters)?;
    validate_staff(&payload.staff)?;

    validate_amount(payload.table_commissions, "tableCommissions")?;
    validate_amount(payload.vip_girls_commissions, "vipGirlsCommissions")?;
    validate_amount(payload.ad_spend, "adSpend")?;

    if let Some(v) = payload.door_revenue {
        validate_amount(v, "doorRevenue")?;
    }
    if let Some(v) = payload.total_night_revenue {
        validate_amount(v, "totalNightRevenue")?;
    }

    validate_revenue_fields(
        event.deal_type,
        payload.door_revenue,
        payload.total_night_revenue,
    )?;

    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    Ok(())
}

/// Updates only check what they touch; a payload that leaves the
/// revenue fields alone cannot trip the deal-type rule.
fn validate_entry_update(event: Option<&Event>, payload: &EventEntryUpdate) -> AppResult<()> {
    if let Some(date) = &payload.date {
        validate_date(date, "date")?;
    }
    if let Some(promoters) = &payload.promoters {
        validate_promoters(promoters)?;
    }
    if let Some(staff) = &payload.staff {
        validate_staff(staff)?;
    }

    if let Some(v) = payload.table_commissions {
        validate_amount(v, "tableCommissions")?;
    }
    if let Some(v) = payload.vip_girls_commissions {
        validate_amount(v, "vipGirlsCommissions")?;
    }
    if let Some(v) = payload.ad_spend {
        validate_amount(v, "adSpend")?;
    }
    if let Some(v) = payload.door_revenue {
        validate_amount(v, "doorRevenue")?;
    }
    if let Some(v) = payload.total_night_revenue {
        validate_amount(v, "totalNightRevenue")?;
    }

    if let Some(event) = event {
        if payload.door_revenue.is_some() && event.deal_type == DealType::RevenueShare {
            return Err(AppError::validation(
                "Revenue Share entries record totalNightRevenue, not doorRevenue",
            ));
        }
        if payload.total_night_revenue.is_some() && event.deal_type == DealType::EntranceDeal {
            return Err(AppError::validation(
                "Entrance Deal entries record doorRevenue, not totalNightRevenue",
            ));
        }
    }

    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    Ok(())
}
