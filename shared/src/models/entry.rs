//! Event Entry Model (场次记录)
//!
//! One recorded performance session for an event: the night's revenue
//! figure, commissions, ad spend and attendance counters. An entry
//! references its parent event by id only; deleting the event cascades
//! to its entries.

use serde::{Deserialize, Serialize};

/// Promoter line on an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promoter {
    pub id: String,
    pub name: String,
    /// Commission owed for the night
    pub commission: f64,
}

/// Staff line on an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub role: String,
    pub name: String,
    /// Payment owed for the night
    pub payment: f64,
}

/// Event entry entity
///
/// Exactly one of `door_revenue` / `total_night_revenue` is populated,
/// determined by the parent event's deal type at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntry {
    pub id: String,
    pub event_id: String,
    /// Session date (YYYY-MM-DD)
    pub date: String,
    pub promoters: Vec<Promoter>,
    pub staff: Vec<StaffMember>,
    pub table_commissions: f64,
    pub vip_girls_commissions: f64,
    pub ad_spend: f64,
    pub ad_reach: u32,
    pub ad_clicks: u32,
    pub ad_leads: u32,
    pub leads_collected: u32,
    /// Door take (Entrance Deal events only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_revenue: Option<f64>,
    /// Venue's full night revenue (Revenue Share events only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_night_revenue: Option<f64>,
    pub attendance: u32,
    pub tables_from_rumba: u32,
    pub days_until_paid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Promoter line in a create/update payload (id assigned server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoterDraft {
    pub name: String,
    pub commission: f64,
}

/// Staff line in a create/update payload (id assigned server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffDraft {
    pub role: String,
    pub name: String,
    pub payment: f64,
}

/// Create entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntryCreate {
    pub event_id: String,
    pub date: String,
    #[serde(default)]
    pub promoters: Vec<PromoterDraft>,
    #[serde(default)]
    pub staff: Vec<StaffDraft>,
    #[serde(default)]
    pub table_commissions: f64,
    #[serde(default)]
    pub vip_girls_commissions: f64,
    #[serde(default)]
    pub ad_spend: f64,
    #[serde(default)]
    pub ad_reach: u32,
    #[serde(default)]
    pub ad_clicks: u32,
    #[serde(default)]
    pub ad_leads: u32,
    #[serde(default)]
    pub leads_collected: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_night_revenue: Option<f64>,
    #[serde(default)]
    pub attendance: u32,
    #[serde(default)]
    pub tables_from_rumba: u32,
    #[serde(default)]
    pub days_until_paid: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update entry payload (partial; list fields replace wholesale)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoters: Option<Vec<PromoterDraft>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<StaffDraft>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_commissions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_girls_commissions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_spend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_reach: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_clicks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_leads: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leads_collected: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_night_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables_from_rumba: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_paid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
