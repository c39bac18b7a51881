//! Deterministic in-memory demo dataset.
//!
//! The product demos against generated data instead of a live backend;
//! ids are fixed (`Uuid::from_u128`) so cross-references stay stable
//! across reloads and sessions. The `api.rs` modules wrap slices of this
//! dataset behind async fetch functions.

use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::{
    Company, CompanyId, Event, EventId, Lead, LeadId, Organiser, OrganiserId, TargetUser,
    TargetUserId,
};
use once_cell::sync::Lazy;

pub struct EventRecord {
    pub organiser_id: OrganiserId,
    pub event: Event,
}

pub struct CompanyRecord {
    pub event_id: EventId,
    pub company: Company,
}

pub struct StaffRecord {
    pub company_id: CompanyId,
    pub user: TargetUser,
}

pub struct LeadRecord {
    pub company_id: CompanyId,
    pub user_id: TargetUserId,
    pub lead: Lead,
}

pub struct DemoData {
    pub organisers: Vec<Organiser>,
    pub events: Vec<EventRecord>,
    pub companies: Vec<CompanyRecord>,
    pub staff: Vec<StaffRecord>,
    pub leads: Vec<LeadRecord>,
}

impl DemoData {
    pub fn events_for(&self, organiser: Option<OrganiserId>) -> Vec<Event> {
        self.events
            .iter()
            .filter(|r| organiser.map(|id| r.organiser_id == id).unwrap_or(true))
            .map(|r| r.event.clone())
            .collect()
    }

    pub fn companies_for(&self, event: Option<EventId>) -> Vec<Company> {
        self.companies
            .iter()
            .filter(|r| event.map(|id| r.event_id == id).unwrap_or(true))
            .map(|r| r.company.clone())
            .collect()
    }

    pub fn staff_for(&self, company: Option<CompanyId>) -> Vec<TargetUser> {
        self.staff
            .iter()
            .filter(|r| company.map(|id| r.company_id == id).unwrap_or(true))
            .map(|r| r.user.clone())
            .collect()
    }

    pub fn leads_for(
        &self,
        company: Option<CompanyId>,
        user: Option<TargetUserId>,
    ) -> Vec<Lead> {
        self.leads
            .iter()
            .filter(|r| company.map(|id| r.company_id == id).unwrap_or(true))
            .filter(|r| user.map(|id| r.user_id == id).unwrap_or(true))
            .map(|r| r.lead.clone())
            .collect()
    }

    pub fn staff_count(&self, company: CompanyId) -> usize {
        self.staff.iter().filter(|r| r.company_id == company).count()
    }

    pub fn lead_count_for_company(&self, company: CompanyId) -> usize {
        self.leads.iter().filter(|r| r.company_id == company).count()
    }

    pub fn lead_count_for_user(&self, user: TargetUserId) -> usize {
        self.leads.iter().filter(|r| r.user_id == user).count()
    }

    pub fn lead_count_for_event(&self, event: EventId) -> usize {
        self.companies
            .iter()
            .filter(|r| r.event_id == event)
            .map(|r| self.lead_count_for_company(r.company.id))
            .sum()
    }

    pub fn lead_count_for_organiser(&self, organiser: OrganiserId) -> usize {
        self.events
            .iter()
            .filter(|r| r.organiser_id == organiser)
            .map(|r| self.lead_count_for_event(r.event.id))
            .sum()
    }
}

pub static DEMO: Lazy<DemoData> = Lazy::new(build);

fn organiser(id: u128, name: &str) -> Organiser {
    Organiser {
        id: OrganiserId::new(uuid::Uuid::from_u128(id)),
        name: name.to_string(),
    }
}

fn event(
    id: u128,
    organiser_id: u128,
    name: &str,
    starts: (i32, u32, u32),
    ends: (i32, u32, u32),
    venue: &str,
) -> EventRecord {
    EventRecord {
        organiser_id: OrganiserId::new(uuid::Uuid::from_u128(organiser_id)),
        event: Event {
            id: EventId::new(uuid::Uuid::from_u128(id)),
            name: name.to_string(),
            starts_on: date(starts),
            ends_on: date(ends),
            venue: venue.to_string(),
        },
    }
}

fn company(id: u128, event_id: u128, name: &str, stand_no: &str) -> CompanyRecord {
    CompanyRecord {
        event_id: EventId::new(uuid::Uuid::from_u128(event_id)),
        company: Company {
            id: CompanyId::new(uuid::Uuid::from_u128(id)),
            name: name.to_string(),
            stand_no: stand_no.to_string(),
        },
    }
}

fn staff(id: u128, company_id: u128, username: &str, first: &str, last: &str) -> StaffRecord {
    StaffRecord {
        company_id: CompanyId::new(uuid::Uuid::from_u128(company_id)),
        user: TargetUser {
            id: TargetUserId::new(uuid::Uuid::from_u128(id)),
            name: username.to_string(),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
        },
    }
}

fn lead(
    id: u128,
    company_id: u128,
    user_id: u128,
    full_name: &str,
    email: &str,
    visitor_company: &str,
    captured: NaiveDateTime,
    rating: u8,
) -> LeadRecord {
    LeadRecord {
        company_id: CompanyId::new(uuid::Uuid::from_u128(company_id)),
        user_id: TargetUserId::new(uuid::Uuid::from_u128(user_id)),
        lead: Lead {
            id: LeadId::new(uuid::Uuid::from_u128(id)),
            full_name: full_name.to_string(),
            email: email.to_string(),
            company_name: visitor_company.to_string(),
            captured_at: captured,
            rating,
        },
    }
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date((y, m, d)).and_hms_opt(h, min, 0).unwrap_or_default()
}

// Id blocks: organisers 0xA0xx, events 0xE0xx, companies 0xC0xx,
// staff 0x01xx, leads 0x1Fxx.
fn build() -> DemoData {
    DemoData {
        organisers: vec![
            organiser(0xA001, "Expo Group Ltd"),
            organiser(0xA002, "FairWorks Events"),
        ],
        events: vec![
            event(
                0xE001,
                0xA001,
                "Tech Expo 2025",
                (2025, 3, 1),
                (2025, 3, 3),
                "Riverside Halls",
            ),
            event(
                0xE002,
                0xA001,
                "Green Build Fair",
                (2025, 5, 12),
                (2025, 5, 14),
                "North Arena",
            ),
            event(
                0xE003,
                0xA002,
                "Food & Hospitality Show",
                (2025, 6, 2),
                (2025, 6, 5),
                "Dockside Pavilion",
            ),
        ],
        companies: vec![
            company(0xC001, 0xE001, "Acme Robotics", "B-12"),
            company(0xC002, 0xE001, "Nimbus Analytics", "B-14"),
            company(0xC003, 0xE001, "Quantum Print", "C-02"),
            company(0xC004, 0xE002, "EverGreen Panels", "A-01"),
            company(0xC005, 0xE002, "SolarCraft", "A-09"),
            company(0xC006, 0xE003, "Baker & Sons", "D-03"),
            company(0xC007, 0xE003, "Cold Chain Logistics", "D-11"),
        ],
        staff: vec![
            staff(0x0101, 0xC001, "jdoe", "Jane", "Doe"),
            staff(0x0102, 0xC001, "msmith", "Mark", "Smith"),
            staff(0x0103, 0xC002, "achen", "Amy", "Chen"),
            staff(0x0104, 0xC002, "rpatel", "Ravi", "Patel"),
            staff(0x0105, 0xC003, "lbrown", "Lucy", "Brown"),
            staff(0x0106, 0xC004, "tmora", "Teresa", "Mora"),
            staff(0x0107, 0xC005, "kwolf", "Karl", "Wolf"),
            staff(0x0108, 0xC006, "pbaker", "Paul", "Baker"),
            staff(0x0109, 0xC007, "efox", "Emma", "Fox"),
        ],
        leads: vec![
            lead(
                0x1F01,
                0xC001,
                0x0101,
                "Oliver Grant",
                "oliver.grant@northwind.example",
                "Northwind Manufacturing",
                timestamp(2025, 3, 1, 10, 24),
                5,
            ),
            lead(
                0x1F02,
                0xC001,
                0x0101,
                "Priya Nair",
                "p.nair@bluefield.example",
                "Bluefield Automation",
                timestamp(2025, 3, 1, 11, 5),
                3,
            ),
            lead(
                0x1F03,
                0xC001,
                0x0102,
                "Jonas Weber",
                "jweber@hanse.example",
                "Hanse Maschinenbau",
                timestamp(2025, 3, 2, 9, 41),
                4,
            ),
            lead(
                0x1F04,
                0xC001,
                0x0102,
                "Sofia Marino",
                "s.marino@adriatic.example",
                "Adriatic Foods",
                timestamp(2025, 3, 2, 14, 17),
                0,
            ),
            lead(
                0x1F05,
                0xC002,
                0x0103,
                "Ethan Cole",
                "ecole@summitbi.example",
                "Summit BI",
                timestamp(2025, 3, 1, 13, 2),
                4,
            ),
            lead(
                0x1F06,
                0xC002,
                0x0104,
                "Hana Sato",
                "hana.sato@kiri.example",
                "Kiri Retail",
                timestamp(2025, 3, 3, 10, 55),
                2,
            ),
            lead(
                0x1F07,
                0xC003,
                0x0105,
                "Liam O'Brien",
                "liam@shamrockpress.example",
                "Shamrock Press",
                timestamp(2025, 3, 2, 16, 30),
                5,
            ),
            lead(
                0x1F08,
                0xC004,
                0x0106,
                "Nina Keller",
                "nkeller@urbanbuild.example",
                "UrbanBuild AG",
                timestamp(2025, 5, 12, 11, 12),
                3,
            ),
            lead(
                0x1F09,
                0xC004,
                0x0106,
                "Tomás Silva",
                "tsilva@atlantico.example",
                "Atlantico Construções",
                timestamp(2025, 5, 13, 15, 48),
                4,
            ),
            lead(
                0x1F0A,
                0xC005,
                0x0107,
                "Grace Lin",
                "grace.lin@meridian.example",
                "Meridian Estates",
                timestamp(2025, 5, 14, 9, 20),
                0,
            ),
            lead(
                0x1F0B,
                0xC006,
                0x0108,
                "Arthur Dale",
                "adale@grandhotels.example",
                "Grand Hotels Group",
                timestamp(2025, 6, 2, 12, 3),
                5,
            ),
            lead(
                0x1F0C,
                0xC006,
                0x0108,
                "Yusuf Demir",
                "ydemir@bosphorus.example",
                "Bosphorus Catering",
                timestamp(2025, 6, 4, 10, 44),
                1,
            ),
            lead(
                0x1F0D,
                0xC007,
                0x0109,
                "Clara Novak",
                "cnovak@polarfresh.example",
                "PolarFresh Distribution",
                timestamp(2025, 6, 3, 14, 26),
                3,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_linked() {
        // Every event belongs to a known organiser, every company to a
        // known event, and so on down the chain.
        for record in &DEMO.events {
            assert!(DEMO.organisers.iter().any(|o| o.id == record.organiser_id));
        }
        for record in &DEMO.companies {
            assert!(DEMO.events.iter().any(|e| e.event.id == record.event_id));
        }
        for record in &DEMO.staff {
            assert!(DEMO
                .companies
                .iter()
                .any(|c| c.company.id == record.company_id));
        }
        for record in &DEMO.leads {
            assert!(DEMO
                .staff
                .iter()
                .any(|s| s.user.id == record.user_id && s.company_id == record.company_id));
        }
    }

    #[test]
    fn test_counts_are_consistent() {
        let total: usize = DEMO
            .organisers
            .iter()
            .map(|o| DEMO.lead_count_for_organiser(o.id))
            .sum();
        assert_eq!(total, DEMO.leads.len());
    }

    #[test]
    fn test_filters() {
        let first_event = DEMO.events[0].event.id;
        assert_eq!(DEMO.companies_for(Some(first_event)).len(), 3);
        assert_eq!(DEMO.companies_for(None).len(), DEMO.companies.len());

        let acme = DEMO.companies[0].company.id;
        assert_eq!(DEMO.staff_count(acme), 2);
        assert_eq!(DEMO.lead_count_for_company(acme), 4);
    }
}
