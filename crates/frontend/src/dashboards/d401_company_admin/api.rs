use contracts::dashboards::d401_company_admin::{CompanySummaryResponse, StaffRow};
use contracts::domain::CompanyId;
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

/// Получить сводку компании: сотрудники стенда и их лиды.
pub async fn fetch_company_summary(
    company: Option<CompanyId>,
) -> Result<CompanySummaryResponse, String> {
    TimeoutFuture::new(200).await;

    let staff: Vec<StaffRow> = DEMO
        .staff_for(company)
        .into_iter()
        .map(|user| StaffRow {
            lead_count: DEMO.lead_count_for_user(user.id),
            user,
        })
        .collect();

    let leads = DEMO.leads_for(company, None);
    let rated = leads.iter().filter(|l| l.rating > 0).count();

    Ok(CompanySummaryResponse {
        staff_count: staff.len(),
        lead_count: leads.len(),
        rated_lead_count: rated,
        staff,
    })
}
