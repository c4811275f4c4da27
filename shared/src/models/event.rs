//! Event Model (活动)
//!
//! An event is one nightlife engagement: a recurring club night or a
//! one-off booking. Its split sheet is an embedded list of [`Partner`]
//! rows; exactly one row is the house partner (the reserved name
//! [`HOUSE_PARTNER`]) whose percentage mirrors `rumba_percentage`.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Reserved name of the house partner row. It cannot be renamed or
/// removed from an event's split sheet.
pub const HOUSE_PARTNER: &str = "Rumba";

/// Day of week (full English names on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Day of week for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

/// Deal type agreed with the venue
///
/// Determines which revenue field an entry carries: `Entrance Deal`
/// entries record `door_revenue`, `Revenue Share` entries record
/// `total_night_revenue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealType {
    #[serde(rename = "Revenue Share")]
    RevenueShare,
    #[serde(rename = "Entrance Deal")]
    EntranceDeal,
}

/// One row of an event's split sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    /// Share of revenue (whole percent, 0-100)
    pub percentage: f64,
}

impl Partner {
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }

    /// Whether this row is the reserved house partner
    pub fn is_house(&self) -> bool {
        self.name == HOUSE_PARTNER
    }
}

/// Event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub day_of_week: DayOfWeek,
    /// Event date (YYYY-MM-DD)
    pub date: String,
    /// Doors-open time (HH:MM, local)
    pub time: String,
    pub venue_name: String,
    pub location: String,
    pub deal_type: DealType,
    /// House share of revenue (0-100), mirrors the house partner row
    pub rumba_percentage: f64,
    /// Free-text payment terms agreed with the venue
    pub payment_terms: String,
    pub partners: Vec<Partner>,
    pub created_at: i64,
}

impl Event {
    /// The house partner row, if present
    pub fn house_partner(&self) -> Option<&Partner> {
        self.partners.iter().find(|p| p.is_house())
    }
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    pub name: String,
    pub day_of_week: DayOfWeek,
    pub date: String,
    pub time: String,
    pub venue_name: String,
    pub location: String,
    pub deal_type: DealType,
    pub rumba_percentage: f64,
    #[serde(default)]
    pub payment_terms: String,
    pub partners: Vec<Partner>,
}

/// Update event payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rumba_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partners: Option<Vec<Partner>>,
}
