use contracts::dashboards::d402_event_admin::{EventSummaryResponse, ExhibitorRow};
use contracts::domain::EventId;
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

/// Получить сводку мероприятия: экспоненты с укомплектованностью и
/// количеством лидов.
pub async fn fetch_event_summary(event: Option<EventId>) -> Result<EventSummaryResponse, String> {
    TimeoutFuture::new(200).await;

    let exhibitors: Vec<ExhibitorRow> = DEMO
        .companies_for(event)
        .into_iter()
        .map(|company| ExhibitorRow {
            staff_count: DEMO.staff_count(company.id),
            lead_count: DEMO.lead_count_for_company(company.id),
            company,
        })
        .collect();

    Ok(EventSummaryResponse {
        exhibitor_count: exhibitors.len(),
        staff_count: exhibitors.iter().map(|r| r.staff_count).sum(),
        lead_count: exhibitors.iter().map(|r| r.lead_count).sum(),
        exhibitors,
    })
}
