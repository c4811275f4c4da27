//! In-memory repository
//!
//! HashMap-backed implementation of [`EventRepository`] guarded by
//! `parking_lot` read-write locks. Data lives for the process lifetime
//! only. Ids are UUID v4 strings assigned here.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use shared::models::{
    Event, EventCreate, EventEntry, EventEntryCreate, EventEntryUpdate, EventUpdate, Promoter,
    PromoterDraft, StaffDraft, StaffMember,
};
use shared::util::now_millis;

use super::{EventRepository, RepoResult};

/// Newest first: date descending, then created_at descending
fn newest_first(a_date: &str, a_created: i64, b_date: &str, b_created: i64) -> std::cmp::Ordering {
    b_date.cmp(a_date).then(b_created.cmp(&a_created))
}

fn realize_promoters(drafts: Vec<PromoterDraft>) -> Vec<Promoter> {
    drafts
        .into_iter()
        .map(|d| Promoter {
            id: Uuid::new_v4().to_string(),
            name: d.name,
            commission: d.commission,
        })
        .collect()
}

fn realize_staff(drafts: Vec<StaffDraft>) -> Vec<StaffMember> {
    drafts
        .into_iter()
        .map(|d| StaffMember {
            id: Uuid::new_v4().to_string(),
            role: d.role,
            name: d.name,
            payment: d.payment,
        })
        .collect()
}

#[derive(Default)]
pub struct MemoryRepository {
    events: RwLock<HashMap<String, Event>>,
    entries: RwLock<HashMap<String, EventEntry>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryRepository {
    async fn list_events(&self) -> RepoResult<Vec<Event>> {
        let mut events: Vec<Event> = self.events.read().values().cloned().collect();
        events.sort_by(|a, b| newest_first(&a.date, a.created_at, &b.date, b.created_at));
        Ok(events)
    }

    async fn get_event(&self, id: &str) -> RepoResult<Option<Event>> {
        Ok(self.events.read().get(id).cloned())
    }

    async fn create_event(&self, data: EventCreate) -> RepoResult<Event> {
        let event = Event {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            day_of_week: data.day_of_week,
            date: data.date,
            time: data.time,
            venue_name: data.venue_name,
            location: data.location,
            deal_type: data.deal_type,
            rumba_percentage: data.rumba_percentage,
            payment_terms: data.payment_terms,
            partners: data.partners,
            created_at: now_millis(),
        };
        self.events.write().insert(event.id.clone(), event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &str, data: EventUpdate) -> RepoResult<Option<Event>> {
        let mut events = self.events.write();
        let Some(event) = events.get_mut(id) else {
            return Ok(None);
        };

        if let Some(name) = data.name {
            event.name = name;
        }
        if let Some(day_of_week) = data.day_of_week {
            event.day_of_week = day_of_week;
        }
        if let Some(date) = data.date {
            event.date = date;
        }
        if let Some(time) = data.time {
            event.time = time;
        }
        if let Some(venue_name) = data.venue_name {
            event.venue_name = venue_name;
        }
        if let Some(location) = data.location {
            event.location = location;
        }
        if let Some(deal_type) = data.deal_type {
            event.deal_type = deal_type;
        }
        if let Some(rumba_percentage) = data.rumba_percentage {
            event.rumba_percentage = rumba_percentage;
        }
        if let Some(payment_terms) = data.payment_terms {
            event.payment_terms = payment_terms;
        }
        if let Some(partners) = data.partners {
            event.partners = partners;
        }

        Ok(Some(event.clone()))
    }

    async fn delete_event(&self, id: &str) -> RepoResult<bool> {
        let removed = self.events.write().remove(id).is_some();
        if removed {
            // Cascade: entries reference the event by id only
            self.entries.write().retain(|_, e| e.event_id != id);
        }
        Ok(removed)
    }

    async fn list_entries(&self, event_id: Option<&str>) -> RepoResult<Vec<EventEntry>> {
        let entries = self.entries.read();
        let mut entries: Vec<EventEntry> = match event_id {
            Some(event_id) => entries
                .values()
                .filter(|e| e.event_id == event_id)
                .cloned()
                .collect(),
            None => entries.values().cloned().collect(),
        };
        entries.sort_by(|a, b| newest_first(&a.date, a.created_at, &b.date, b.created_at));
        Ok(entries)
    }

    async fn get_entry(&self, id: &str) -> RepoResult<Option<EventEntry>> {
        Ok(self.entries.read().get(id).cloned())
    }

    async fn create_entry(&self, data: EventEntryCreate) -> RepoResult<EventEntry> {
        let entry = EventEntry {
            id: Uuid::new_v4().to_string(),
            event_id: data.event_id,
            date: data.date,
            promoters: realize_promoters(data.promoters),
            staff: realize_staff(data.staff),
            table_commissions: data.table_commissions,
            vip_girls_commissions: data.vip_girls_commissions,
            ad_spend: data.ad_spend,
            ad_reach: data.ad_reach,
            ad_clicks: data.ad_clicks,
            ad_leads: data.ad_leads,
            leads_collected: data.leads_collected,
            door_revenue: data.door_revenue,
            total_night_revenue: data.total_night_revenue,
            attendance: data.attendance,
            tables_from_rumba: data.tables_from_rumba,
            days_until_paid: data.days_until_paid,
            notes: data.notes,
            created_at: now_millis(),
        };
        self.entries.write().insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn update_entry(
        &self,
        id: &str,
        data: EventEntryUpdate,
    ) -> RepoResult<Option<EventEntry>> {
        let mut entries = self.entries.write();
        let Some(entry) = entries.get_mut(id) else {
            return Ok(None);
        };

        if let Some(date) = data.date {
            entry.date = date;
        }
        if let Some(promoters) = data.promoters {
            entry.promoters = realize_promoters(promoters);
        }
        if let Some(staff) = data.staff {
            entry.staff = realize_staff(staff);
        }
        if let Some(table_commissions) = data.table_commissions {
            entry.table_commissions = table_commissions;
        }
        if let Some(vip_girls_commissions) = data.vip_girls_commissions {
            entry.vip_girls_commissions = vip_girls_commissions;
        }
        if let Some(ad_spend) = data.ad_spend {
            entry.ad_spend = ad_spend;
        }
        if let Some(ad_reach) = data.ad_reach {
            entry.ad_reach = ad_reach;
        }
        if let Some(ad_clicks) = data.ad_clicks {
            entry.ad_clicks = ad_clicks;
        }
        if let Some(ad_leads) = data.ad_leads {
            entry.ad_leads = ad_leads;
        }
        if let Some(leads_collected) = data.leads_collected {
            entry.leads_collected = leads_collected;
        }
        if let Some(door_revenue) = data.door_revenue {
            entry.door_revenue = Some(door_revenue);
        }
        if let Some(total_night_revenue) = data.total_night_revenue {
            entry.total_night_revenue = Some(total_night_revenue);
        }
        if let Some(attendance) = data.attendance {
            entry.attendance = attendance;
        }
        if let Some(tables_from_rumba) = data.tables_from_rumba {
            entry.tables_from_rumba = tables_from_rumba;
        }
        if let Some(days_until_paid) = data.days_until_paid {
            entry.days_until_paid = days_until_paid;
        }
        if let Some(notes) = data.notes {
            entry.notes = Some(notes);
        }

        Ok(Some(entry.clone()))
    }

    async fn delete_entry(&self, id: &str) -> RepoResult<bool> {
        Ok(self.entries.write().remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DayOfWeek, DealType, Partner, HOUSE_PARTNER};

    fn event_create(name: &str, date: &str) -> EventCreate {
        EventCreate {
            name: name.to_string(),
            day_of_week: DayOfWeek::Friday,
            date: date.to_string(),
            time: "22:00".to_string(),
            venue_name: "Skyline Lounge".to_string(),
            location: "Downtown".to_string(),
            deal_type: DealType::EntranceDeal,
            rumba_percentage: 50.0,
            payment_terms: String::new(),
            partners: vec![
                Partner::new(HOUSE_PARTNER, 50.0),
                Partner::new("Local Partner", 50.0),
            ],
        }
    }

    fn entry_create(event_id: &str, date: &str) -> EventEntryCreate {
        EventEntryCreate {
            event_id: event_id.to_string(),
            date: date.to_string(),
            promoters: vec![PromoterDraft {
                name: "John Promoter".to_string(),
                commission: 500.0,
            }],
            staff: vec![],
            table_commissions: 0.0,
            vip_girls_commissions: 0.0,
            ad_spend: 0.0,
            ad_reach: 0,
            ad_clicks: 0,
            ad_leads: 0,
            leads_collected: 0,
            door_revenue: Some(4000.0),
            total_night_revenue: None,
            attendance: 200,
            tables_from_rumba: 3,
            days_until_paid: 7,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let repo = MemoryRepository::new();
        let event = repo
            .create_event(event_create("Night Fever", "2025-06-06"))
            .await
            .unwrap();

        assert!(!event.id.is_empty());
        assert!(event.created_at > 0);

        let entry = repo.create_entry(entry_create(&event.id, "2025-06-06")).await.unwrap();
        assert!(!entry.id.is_empty());
        assert!(!entry.promoters[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_events_listed_newest_first() {
        let repo = MemoryRepository::new();
        repo.create_event(event_create("older", "2025-05-30")).await.unwrap();
        repo.create_event(event_create("newer", "2025-06-06")).await.unwrap();

        let events = repo.list_events().await.unwrap();
        assert_eq!(events[0].name, "newer");
        assert_eq!(events[1].name, "older");
    }

    #[tokio::test]
    async fn test_entries_filtered_and_newest_first() {
        let repo = MemoryRepository::new();
        let a = repo.create_event(event_create("a", "2025-06-06")).await.unwrap();
        let b = repo.create_event(event_create("b", "2025-06-07")).await.unwrap();

        repo.create_entry(entry_create(&a.id, "2025-05-30")).await.unwrap();
        repo.create_entry(entry_create(&a.id, "2025-06-06")).await.unwrap();
        repo.create_entry(entry_create(&b.id, "2025-06-07")).await.unwrap();

        let all = repo.list_entries(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].date, "2025-06-07");

        let for_a = repo.list_entries(Some(&a.id)).await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert_eq!(for_a[0].date, "2025-06-06");
        assert_eq!(for_a[1].date, "2025-05-30");
    }

    #[tokio::test]
    async fn test_delete_event_cascades_entries() {
        let repo = MemoryRepository::new();
        let a = repo.create_event(event_create("a", "2025-06-06")).await.unwrap();
        let b = repo.create_event(event_create("b", "2025-06-07")).await.unwrap();
        repo.create_entry(entry_create(&a.id, "2025-06-06")).await.unwrap();
        repo.create_entry(entry_create(&a.id, "2025-06-07")).await.unwrap();
        let kept = repo.create_entry(entry_create(&b.id, "2025-06-07")).await.unwrap();

        assert!(repo.delete_event(&a.id).await.unwrap());

        // Entries of the deleted event are gone, the other event's survive
        assert!(repo.list_entries(Some(&a.id)).await.unwrap().is_empty());
        let remaining = repo.list_entries(None).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);

        // Second delete reports absence
        assert!(!repo.delete_event(&a.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_event_merges_partial_fields() {
        let repo = MemoryRepository::new();
        let event = repo.create_event(event_create("old name", "2025-06-06")).await.unwrap();

        let updated = repo
            .update_event(
                &event.id,
                EventUpdate {
                    name: Some("new name".to_string()),
                    rumba_percentage: Some(70.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("event exists");

        assert_eq!(updated.name, "new name");
        assert_eq!(updated.rumba_percentage, 70.0);
        // Untouched fields survive
        assert_eq!(updated.venue_name, "Skyline Lounge");
        assert_eq!(updated.date, "2025-06-06");

        let missing = repo
            .update_event("no-such-id", EventUpdate::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_entry_replaces_lists_wholesale() {
        let repo = MemoryRepository::new();
        let event = repo.create_event(event_create("a", "2025-06-06")).await.unwrap();
        let entry = repo.create_entry(entry_create(&event.id, "2025-06-06")).await.unwrap();

        let updated = repo
            .update_entry(
                &entry.id,
                EventEntryUpdate {
                    promoters: Some(vec![
                        PromoterDraft {
                            name: "Sarah Promoter".to_string(),
                            commission: 350.0,
                        },
                        PromoterDraft {
                            name: "John Promoter".to_string(),
                            commission: 500.0,
                        },
                    ]),
                    ad_spend: Some(400.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("entry exists");

        assert_eq!(updated.promoters.len(), 2);
        assert_eq!(updated.ad_spend, 400.0);
        assert_eq!(updated.door_revenue, Some(4000.0));
    }
}
