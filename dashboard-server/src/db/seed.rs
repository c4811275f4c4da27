//! Demo seed data (演示数据)
//!
//! Five weekly "Night Fever" events with one recorded session each,
//! loaded at startup when `DASHBOARD_SEED_DEMO=true`. Gives a fresh
//! install something to show on the dashboard.

use chrono::{Duration, Local};

use shared::models::{
    DayOfWeek, DealType, EventCreate, EventEntryCreate, Partner, PromoterDraft, StaffDraft,
    HOUSE_PARTNER,
};

use super::{EventRepository, RepoResult};

const VENUES: [&str; 5] = [
    "Skyline Lounge",
    "Pulse Nightclub",
    "Echo Bar",
    "Mirage Club",
    "Velvet Room",
];

const LOCATIONS: [&str; 5] = [
    "Downtown",
    "Westside",
    "Marina District",
    "Old Town",
    "Uptown",
];

/// Populate the repository with demo events and entries
///
/// Events run one week apart, most recent first, alternating deal
/// types; the house share climbs 5 points per event.
pub async fn load_demo_data(repo: &dyn EventRepository) -> RepoResult<()> {
    let today = Local::now().date_naive();

    for i in 0..5u32 {
        let date = today - Duration::weeks(i as i64);
        let rumba_percentage = (50 + i * 5) as f64;
        let deal_type = if i % 2 == 0 {
            DealType::RevenueShare
        } else {
            DealType::EntranceDeal
        };

        let event = repo
            .create_event(EventCreate {
                name: format!("Night Fever {}", i + 1),
                day_of_week: DayOfWeek::from_date(date),
                date: date.format("%Y-%m-%d").to_string(),
                time: "22:00".to_string(),
                venue_name: VENUES[i as usize].to_string(),
                location: LOCATIONS[i as usize].to_string(),
                deal_type,
                rumba_percentage,
                payment_terms: "50% upfront, weekly payments".to_string(),
                partners: vec![
                    Partner::new(HOUSE_PARTNER, rumba_percentage),
                    Partner::new("Local Partner", 100.0 - rumba_percentage),
                ],
            })
            .await?;

        let (door_revenue, total_night_revenue) = match deal_type {
            DealType::EntranceDeal => (Some((4000 + i * 500) as f64), None),
            DealType::RevenueShare => (None, Some((10000 + i * 1000) as f64)),
        };

        repo.create_entry(EventEntryCreate {
            event_id: event.id,
            date: event.date,
            promoters: vec![
                PromoterDraft {
                    name: "John Promoter".to_string(),
                    commission: 500.0,
                },
                PromoterDraft {
                    name: "Sarah Promoter".to_string(),
                    commission: 350.0,
                },
            ],
            staff: vec![
                StaffDraft {
                    role: "Hostess".to_string(),
                    name: "Alice".to_string(),
                    payment: 200.0,
                },
                StaffDraft {
                    role: "Photographer".to_string(),
                    name: "Bob".to_string(),
                    payment: 150.0,
                },
            ],
            table_commissions: 800.0,
            vip_girls_commissions: 300.0,
            ad_spend: 400.0,
            ad_reach: 5000 + i * 1000,
            ad_clicks: 300 + i * 50,
            ad_leads: 50 + i * 10,
            leads_collected: 30 + i * 5,
            door_revenue,
            total_night_revenue,
            attendance: 200 + i * 25,
            tables_from_rumba: 3 + (i % 3),
            days_until_paid: 7 + i * 2,
            notes: None,
        })
        .await?;
    }

    Ok(())
}
