use contracts::dashboards::d404_super_admin::{OrganiserRow, SystemSummaryResponse};
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

/// Получить сводку по всей системе
pub async fn fetch_system_summary() -> Result<SystemSummaryResponse, String> {
    TimeoutFuture::new(200).await;

    let organisers = DEMO
        .organisers
        .iter()
        .map(|organiser| OrganiserRow {
            organiser: organiser.clone(),
            event_count: DEMO.events_for(Some(organiser.id)).len(),
            lead_count: DEMO.lead_count_for_organiser(organiser.id),
        })
        .collect();

    Ok(SystemSummaryResponse {
        organiser_count: DEMO.organisers.len(),
        event_count: DEMO.events.len(),
        company_count: DEMO.companies.len(),
        lead_count: DEMO.leads.len(),
        organisers,
    })
}
