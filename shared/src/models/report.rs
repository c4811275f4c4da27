//! Event Report Model
//!
//! Derived profit/loss summary for one event + one entry. Never stored;
//! recomputed on every request.

use serde::{Deserialize, Serialize};

/// Financial summary of a single recorded session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReport {
    /// Night revenue for the active deal type (0 when the field is absent)
    pub total_revenue: f64,
    /// House cut: total_revenue x rumba_percentage / 100
    pub rumba_share: f64,
    pub total_attendance: u32,
    pub tables_from_rumba: u32,
    /// Promoter commissions + staff payments + table + VIP commissions
    pub total_commissions: f64,
    /// Ad spend + total commissions
    pub total_expenses: f64,
    /// rumba_share - total_expenses; expenses land entirely on the house
    pub profit: f64,
    pub days_until_paid: u32,
}
