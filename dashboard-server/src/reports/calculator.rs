//! Event report calculator
//!
//! Turns one event's deal configuration plus one recorded session into
//! a profit/loss summary. Pure function of repository state; nothing is
//! cached and nothing is persisted.

use rust_decimal::Decimal;

use shared::models::{DealType, EventEntry, EventReport};

use crate::db::{EventRepository, RepoResult};
use crate::reports::money::{to_decimal, to_f64};

/// Compute the report for an event
///
/// `entry_id` selects one of the event's entries; when omitted the most
/// recent entry is used. The calculator never aggregates across
/// entries. Returns `None` when the event does not exist, when it has
/// no entries, or when `entry_id` does not match one of its entries -
/// absence is an outcome here, not an error.
pub async fn calculate_report(
    repo: &dyn EventRepository,
    event_id: &str,
    entry_id: Option<&str>,
) -> RepoResult<Option<EventReport>> {
    let Some(event) = repo.get_event(event_id).await? else {
        return Ok(None);
    };

    let entry = match entry_id {
        // The entry must belong to this event
        Some(entry_id) => repo
            .get_entry(entry_id)
            .await?
            .filter(|e| e.event_id == event_id),
        None => repo.list_entries(Some(event_id)).await?.into_iter().next(),
    };
    let Some(entry) = entry else {
        return Ok(None);
    };

    let promoter_commissions: Decimal = entry
        .promoters
        .iter()
        .map(|p| to_decimal(p.commission))
        .sum();
    let staff_payments: Decimal = entry.staff.iter().map(|s| to_decimal(s.payment)).sum();

    let total_commissions = promoter_commissions
        + staff_payments
        + to_decimal(entry.table_commissions)
        + to_decimal(entry.vip_girls_commissions);
    let total_expenses = to_decimal(entry.ad_spend) + total_commissions;

    // Revenue field is determined by the deal type; 0 when it is absent
    let total_revenue = match event.deal_type {
        DealType::EntranceDeal => revenue_or_zero(entry.door_revenue),
        DealType::RevenueShare => revenue_or_zero(entry.total_night_revenue),
    };

    let rumba_share = total_revenue * to_decimal(event.rumba_percentage) / Decimal::ONE_HUNDRED;
    // Expenses are attributed entirely against the house share
    let profit = rumba_share - total_expenses;

    Ok(Some(build_report(
        &entry,
        total_revenue,
        rumba_share,
        total_commissions,
        total_expenses,
        profit,
    )))
}

fn revenue_or_zero(field: Option<f64>) -> Decimal {
    field.map(to_decimal).unwrap_or(Decimal::ZERO)
}

fn build_report(
    entry: &EventEntry,
    total_revenue: Decimal,
    rumba_share: Decimal,
    total_commissions: Decimal,
    total_expenses: Decimal,
    profit: Decimal,
) -> EventReport {
    EventReport {
        total_revenue: to_f64(total_revenue),
        rumba_share: to_f64(rumba_share),
        total_attendance: entry.attendance,
        tables_from_rumba: entry.tables_from_rumba,
        total_commissions: to_f64(total_commissions),
        total_expenses: to_f64(total_expenses),
        profit: to_f64(profit),
        days_until_paid: entry.days_until_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryRepository;
    use shared::models::{
        DayOfWeek, Event, EventCreate, EventEntryCreate, Partner, PromoterDraft, StaffDraft,
        HOUSE_PARTNER,
    };

    fn event_create(deal_type: DealType, rumba_percentage: f64) -> EventCreate {
        EventCreate {
            name: "Night Fever".to_string(),
            day_of_week: DayOfWeek::Saturday,
            date: "2025-06-07".to_string(),
            time: "22:00".to_string(),
            venue_name: "Pulse Nightclub".to_string(),
            location: "Westside".to_string(),
            deal_type,
            rumba_percentage,
            payment_terms: String::new(),
            partners: vec![
                Partner::new(HOUSE_PARTNER, rumba_percentage),
                Partner::new("Local Partner", 100.0 - rumba_percentage),
            ],
        }
    }

    fn bare_entry(event_id: &str, date: &str) -> EventEntryCreate {
        EventEntryCreate {
            event_id: event_id.to_string(),
            date: date.to_string(),
            promoters: vec![],
            staff: vec![],
            table_commissions: 0.0,
            vip_girls_commissions: 0.0,
            ad_spend: 0.0,
            ad_reach: 0,
            ad_clicks: 0,
            ad_leads: 0,
            leads_collected: 0,
            door_revenue: None,
            total_night_revenue: None,
            attendance: 0,
            tables_from_rumba: 0,
            days_until_paid: 0,
            notes: None,
        }
    }

    async fn seed_event(repo: &MemoryRepository, deal_type: DealType, pct: f64) -> Event {
        repo.create_event(event_create(deal_type, pct)).await.unwrap()
    }

    // ==========================================================================
    // Core arithmetic
    // ==========================================================================

    #[tokio::test]
    async fn test_entrance_deal_full_breakdown() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::EntranceDeal, 50.0).await;

        repo.create_entry(EventEntryCreate {
            promoters: vec![
                PromoterDraft { name: "John Promoter".to_string(), commission: 500.0 },
                PromoterDraft { name: "Sarah Promoter".to_string(), commission: 350.0 },
            ],
            staff: vec![
                StaffDraft { role: "Hostess".to_string(), name: "Alice".to_string(), payment: 200.0 },
                StaffDraft { role: "Photographer".to_string(), name: "Bob".to_string(), payment: 150.0 },
            ],
            table_commissions: 800.0,
            vip_girls_commissions: 300.0,
            ad_spend: 400.0,
            door_revenue: Some(4000.0),
            attendance: 250,
            tables_from_rumba: 4,
            days_until_paid: 7,
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        let report = calculate_report(&repo, &event.id, None)
            .await
            .unwrap()
            .expect("event has an entry");

        assert_eq!(report.total_commissions, 1950.0); // 500+350+800+300
        assert_eq!(report.total_expenses, 2350.0); // 400+1950
        assert_eq!(report.total_revenue, 4000.0);
        assert_eq!(report.rumba_share, 2000.0); // 50% of the door
        assert_eq!(report.profit, -350.0); // 2000-2350: a losing night
        assert_eq!(report.total_attendance, 250);
        assert_eq!(report.tables_from_rumba, 4);
        assert_eq!(report.days_until_paid, 7);
    }

    #[tokio::test]
    async fn test_entrance_deal_ignores_night_revenue() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::EntranceDeal, 50.0).await;

        // Both fields present on the record; only the deal type's field counts
        repo.create_entry(EventEntryCreate {
            door_revenue: Some(4000.0),
            total_night_revenue: Some(9999.0),
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        let report = calculate_report(&repo, &event.id, None).await.unwrap().unwrap();
        assert_eq!(report.total_revenue, 4000.0);
    }

    #[tokio::test]
    async fn test_revenue_share_house_cut() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::RevenueShare, 55.0).await;

        repo.create_entry(EventEntryCreate {
            total_night_revenue: Some(10000.0),
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        let report = calculate_report(&repo, &event.id, None).await.unwrap().unwrap();
        assert_eq!(report.total_revenue, 10000.0);
        assert_eq!(report.rumba_share, 5500.0); // 10000 * 55 / 100
        assert_eq!(report.profit, 5500.0); // no expenses recorded
    }

    #[tokio::test]
    async fn test_missing_revenue_field_defaults_to_zero() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::RevenueShare, 60.0).await;

        repo.create_entry(EventEntryCreate {
            ad_spend: 400.0,
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        let report = calculate_report(&repo, &event.id, None).await.unwrap().unwrap();
        assert_eq!(report.total_revenue, 0.0);
        assert_eq!(report.rumba_share, 0.0);
        assert_eq!(report.profit, -400.0);
    }

    #[tokio::test]
    async fn test_fractional_percentage_is_exact() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::RevenueShare, 33.0).await;

        repo.create_entry(EventEntryCreate {
            total_night_revenue: Some(1000.10),
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        let report = calculate_report(&repo, &event.id, None).await.unwrap().unwrap();
        // 1000.10 * 0.33 = 330.033, rounded to cents
        assert_eq!(report.rumba_share, 330.03);
    }

    // ==========================================================================
    // Entry selection
    // ==========================================================================

    #[tokio::test]
    async fn test_uses_most_recent_entry_by_default() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::EntranceDeal, 50.0).await;

        repo.create_entry(EventEntryCreate {
            door_revenue: Some(1000.0),
            ..bare_entry(&event.id, "2025-05-31")
        })
        .await
        .unwrap();
        repo.create_entry(EventEntryCreate {
            door_revenue: Some(2000.0),
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        // Only the newest session counts; entries are never aggregated
        let report = calculate_report(&repo, &event.id, None).await.unwrap().unwrap();
        assert_eq!(report.total_revenue, 2000.0);
    }

    #[tokio::test]
    async fn test_entry_id_selects_specific_session() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::EntranceDeal, 50.0).await;

        let older = repo
            .create_entry(EventEntryCreate {
                door_revenue: Some(1000.0),
                ..bare_entry(&event.id, "2025-05-31")
            })
            .await
            .unwrap();
        repo.create_entry(EventEntryCreate {
            door_revenue: Some(2000.0),
            ..bare_entry(&event.id, "2025-06-07")
        })
        .await
        .unwrap();

        let report = calculate_report(&repo, &event.id, Some(&older.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.total_revenue, 1000.0);
    }

    #[tokio::test]
    async fn test_foreign_entry_id_yields_none() {
        let repo = MemoryRepository::new();
        let event_a = seed_event(&repo, DealType::EntranceDeal, 50.0).await;
        let event_b = seed_event(&repo, DealType::EntranceDeal, 50.0).await;

        let entry_b = repo
            .create_entry(EventEntryCreate {
                door_revenue: Some(2000.0),
                ..bare_entry(&event_b.id, "2025-06-07")
            })
            .await
            .unwrap();

        // entry_b belongs to event_b, not event_a
        let report = calculate_report(&repo, &event_a.id, Some(&entry_b.id)).await.unwrap();
        assert!(report.is_none());
    }

    // ==========================================================================
    // Absence outcomes
    // ==========================================================================

    #[tokio::test]
    async fn test_missing_event_yields_none() {
        let repo = MemoryRepository::new();
        let report = calculate_report(&repo, "no-such-event", None).await.unwrap();
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_event_without_entries_yields_none() {
        let repo = MemoryRepository::new();
        let event = seed_event(&repo, DealType::EntranceDeal, 50.0).await;

        let report = calculate_report(&repo, &event.id, None).await.unwrap();
        assert!(report.is_none());
    }
}
