use contracts::dashboards::d403_event_organiser::{EventRow, OrganiserSummaryResponse};
use contracts::domain::OrganiserId;
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

/// Получить сводку организатора. Без организатора в scope (собственный
/// кабинет организатора) — портфель целиком.
pub async fn fetch_organiser_summary(
    organiser: Option<OrganiserId>,
) -> Result<OrganiserSummaryResponse, String> {
    TimeoutFuture::new(200).await;

    let events: Vec<EventRow> = DEMO
        .events_for(organiser)
        .into_iter()
        .map(|event| EventRow {
            exhibitor_count: DEMO.companies_for(Some(event.id)).len(),
            lead_count: DEMO.lead_count_for_event(event.id),
            event,
        })
        .collect();

    Ok(OrganiserSummaryResponse {
        event_count: events.len(),
        exhibitor_count: events.iter().map(|r| r.exhibitor_count).sum(),
        lead_count: events.iter().map(|r| r.lead_count).sum(),
        events,
    })
}
