use contracts::dashboards::d400_lead_inbox::LeadInboxResponse;
use contracts::domain::{CompanyId, TargetUserId};
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

/// Получить лиды в текущем scope, с опциональным фильтром по рейтингу.
pub async fn fetch_lead_inbox(
    company: Option<CompanyId>,
    user: Option<TargetUserId>,
    min_rating: Option<u8>,
) -> Result<LeadInboxResponse, String> {
    TimeoutFuture::new(200).await;

    let mut leads = DEMO.leads_for(company, user);
    if let Some(min) = min_rating {
        leads.retain(|l| l.rating >= min);
    }
    leads.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));

    let rated = leads.iter().filter(|l| l.rating > 0).count();
    let avg_rating = if rated == 0 {
        0.0
    } else {
        leads.iter().map(|l| l.rating as f64).sum::<f64>() / rated as f64
    };

    Ok(LeadInboxResponse {
        total: leads.len(),
        rated,
        avg_rating,
        leads,
    })
}
