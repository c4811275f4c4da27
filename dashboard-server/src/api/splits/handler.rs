//! Split Sheet API Handlers
//!
//! Server-side twin of the split editor: the client sends its draft
//! sheet plus the desired house share and gets back the rebalanced
//! sheet to render. Persisting still goes through the event endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::splits::rebalance_house;
use crate::utils::{AppResponse, AppResult, ok};
use shared::models::Partner;

// =============================================================================
// Request / Response Types
// =============================================================================

/// A draft split sheet and the desired house share
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRequest {
    pub partners: Vec<Partner>,
    pub house_percentage: f64,
}

/// The rebalanced sheet
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceResponse {
    pub partners: Vec<Partner>,
    /// Applied house share (input clamped to 0-100)
    pub rumba_percentage: f64,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/splits/rebalance - 按新的 house 占比重排分成表
pub async fn rebalance(
    Json(req): Json<RebalanceRequest>,
) -> AppResult<Json<AppResponse<RebalanceResponse>>> {
    let mut partners = req.partners;
    rebalance_house(&mut partners, req.house_percentage);

    // rebalance_house inserts the house row when missing
    let rumba_percentage = partners
        .iter()
        .find(|p| p.is_house())
        .map(|p| p.percentage)
        .unwrap_or_default();

    Ok(ok(RebalanceResponse {
        partners,
        rumba_percentage,
    }))
}
