//! Event API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::splits::validate_splits;
use crate::utils::validation::{
    MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, validate_date, validate_required_text,
    validate_time,
};
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Event, EventCreate, EventEntry, EventUpdate};

// =============================================================================
// Query Types
// =============================================================================

/// Optional filters for the event listing
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Case-insensitive substring match over name, venue and location
    pub search: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/events - 获取所有活动 (日期倒序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EventsQuery>,
) -> AppResult<Json<AppResponse<Vec<Event>>>> {
    let events = state.repo.list_events().await?;

    let events = match query.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => {
            let needle = term.to_lowercase();
            events
                .into_iter()
                .filter(|e| {
                    e.name.to_lowercase().contains(&needle)
                        || e.venue_name.to_lowercase().contains(&needle)
                        || e.location.to_lowercase().contains(&needle)
                })
                .collect()
        }
        _ => events,
    };

    Ok(ok(events))
}

/// GET /api/events/:id - 获取单个活动
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Event>>> {
    let event = state
        .repo
        .get_event(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {} not found", id)))?;

    Ok(ok(event))
}

/// GET /api/events/:id/entries - 获取活动的所有场次记录
pub async fn list_entries(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<EventEntry>>>> {
    // 404 for an unknown event; an empty list means the event has no entries yet
    if state.repo.get_event(&id).await?.is_none() {
        return Err(AppError::not_found(format!("Event {} not found", id)));
    }

    let entries = state.repo.list_entries(Some(&id)).await?;
    Ok(ok(entries))
}

/// POST /api/events - 创建活动
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EventCreate>,
) -> AppResult<Json<AppResponse<Event>>> {
    validate_event_create(&payload)?;

    let event = state.repo.create_event(payload).await?;

    tracing::info!(event_id = %event.id, name = %event.name, "Event created");

    Ok(ok(event))
}

/// PUT /api/events/:id - 更新活动 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EventUpdate>,
) -> AppResult<Json<AppResponse<Event>>> {
    let current = state
        .repo
        .get_event(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {} not found", id)))?;

    validate_event_update(&current, &payload)?;

    let event = state
        .repo
        .update_event(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {} not found", id)))?;

    tracing::info!(event_id = %event.id, "Event updated");

    Ok(ok(event))
}

/// DELETE /api/events/:id - 删除活动 (级联删除其场次记录)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let removed = state.repo.delete_event(&id).await?;

    if !removed {
        return Err(AppError::not_found(format!("Event {} not found", id)));
    }

    tracing::info!(event_id = %id, "Event deleted");

    Ok(ok(true))
}

// =============================================================================
// Validation
// =============================================================================

fn validate_event_create(payload: &EventCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.venue_name, "venueName", MAX_NAME_LEN)?;
    validate_required_text(&payload.location, "location", MAX_LOCATION_LEN)?;
    validate_date(&payload.date, "date")?;
    validate_time(&payload.time, "time")?;

    if payload.payment_terms.len() > MAX_NOTE_LEN {
        return Err(AppError::validation(format!(
            "paymentTerms is too long ({} chars, max {})",
            payload.payment_terms.len(),
            MAX_NOTE_LEN
        )));
    }

    for partner in &payload.partners {
        validate_required_text(&partner.name, "partner name", MAX_NAME_LEN)?;
    }

    validate_splits(&payload.partners, payload.rumba_percentage)?;

    Ok(())
}

/// Update payloads are partial; the split sheet is validated against
/// the merged state so a lone `rumbaPercentage` change cannot break
/// the house-mirror invariant.
fn validate_event_update(current: &Event, payload: &EventUpdate) -> AppResult<()> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(venue_name) = &payload.venue_name {
        validate_required_text(venue_name, "venueName", MAX_NAME_LEN)?;
    }
    if let Some(location) = &payload.location {
        validate_required_text(location, "location", MAX_LOCATION_LEN)?;
    }
    if let Some(date) = &payload.date {
        validate_date(date, "date")?;
    }
    if let Some(time) = &payload.time {
        validate_time(time, "time")?;
    }
    if let Some(payment_terms) = &payload.payment_terms
        && payment_terms.len() > MAX_NOTE_LEN
    {
        return Err(AppError::validation(format!(
            "paymentTerms is too long ({} chars, max {})",
            payment_terms.len(),
            MAX_NOTE_LEN
        )));
    }

    if let Some(partners) = &payload.partners {
        for partner in partners {
            validate_required_text(&partner.name, "partner name", MAX_NAME_LEN)?;
        }
    }

    if payload.partners.is_some() || payload.rumba_percentage.is_some() {
        let partners = payload.partners.as_ref().unwrap_or(&current.partners);
        let rumba_percentage = payload
            .rumba_percentage
            .unwrap_or(current.rumba_percentage);
        validate_splits(partners, rumba_percentage)?;
    }

    Ok(())
}
