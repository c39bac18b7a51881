use contracts::dashboards::d400_lead_inbox::LeadInboxResponse;
use contracts::domain::Lead;
use contracts::navigation::{FilterState, NavigationPayload, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_lead_inbox::api;
use crate::navigation::use_nav;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_datetime;

const MIN_RATING_FILTER: &str = "minRating";

/// Lead-level view: the captured contacts for the selected staff member
/// (or the whole company when no member is selected). The rating filter
/// travels through the navigation payload, so it resets on every page
/// change unless re-supplied.
#[component]
pub fn LeadInboxDashboard() -> impl IntoView {
    let nav = use_nav();
    let data: RwSignal<Option<LeadInboxResponse>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let min_rating = Signal::derive(move || {
        nav.filters
            .get()
            .get(MIN_RATING_FILTER)
            .and_then(|v| v.as_u64())
            .map(|v| v as u8)
    });

    Effect::new(move |_| {
        let company = nav.scope.company.get();
        let user = nav.scope.user.get();
        let min = min_rating.get();
        spawn_local(async move {
            match api::fetch_lead_inbox(company.map(|c| c.id), user.map(|u| u.id), min).await {
                Ok(response) => data.set(Some(response)),
                Err(e) => set_error.set(Some(format!("Failed to load leads: {}", e))),
            }
        });
    });

    let subtitle = Signal::derive(move || {
        if let Some(user) = nav.scope.user.get() {
            user.display_name()
        } else {
            nav.scope
                .company
                .get()
                .map(|c| c.name)
                .unwrap_or_else(|| "{CompanyName}".to_string())
        }
    });

    let total = Signal::derive(move || data.get().map(|d| d.total.to_string()));
    let rated = Signal::derive(move || data.get().map(|d| d.rated.to_string()));
    let avg_rating =
        Signal::derive(move || data.get().map(|d| format!("{:.1}", d.avg_rating)));

    let on_filter_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<u8>().ok().filter(|v| *v > 0) {
            Some(min) => {
                let mut filters = FilterState::default();
                filters.insert(MIN_RATING_FILTER.to_string(), serde_json::json!(min));
                nav.navigate_with_filters(Page::Dashboard, NavigationPayload::new(), filters);
            }
            // "All ratings" simply re-enters the page without filters.
            None => nav.navigate(Page::Dashboard, NavigationPayload::new()),
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Lead Inbox" subtitle=subtitle>
                <select class="filter-select" on:change=on_filter_change>
                    <option value="0" selected=move || min_rating.get().is_none()>
                        "All ratings"
                    </option>
                    <option value="3" selected=move || min_rating.get() == Some(3)>
                        "3 stars and up"
                    </option>
                    <option value="4" selected=move || min_rating.get() == Some(4)>
                        "4 stars and up"
                    </option>
                    <option value="5" selected=move || min_rating.get() == Some(5)>
                        "5 stars only"
                    </option>
                </select>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-row">
                <StatCard label="Leads" icon_name="inbox" value=total />
                <StatCard label="Rated" icon_name="star" value=rated />
                <StatCard label="Avg rating" icon_name="bar-chart" value=avg_rating />
            </div>

            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Visitor"</th>
                            <th>"Email"</th>
                            <th>"Company"</th>
                            <th>"Captured"</th>
                            <th>"Rating"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || data.get().map(|d| d.leads).unwrap_or_default()
                            key=|lead| lead.id
                            children=move |lead: Lead| {
                                let rating = if lead.rating == 0 {
                                    "—".to_string()
                                } else {
                                    format!("{} / 5", lead.rating)
                                };
                                view! {
                                    <tr>
                                        <td>{lead.full_name.clone()}</td>
                                        <td>{lead.email.clone()}</td>
                                        <td>{lead.company_name.clone()}</td>
                                        <td>{format_datetime(lead.captured_at)}</td>
                                        <td>{rating}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
