use contracts::dashboards::d401_company_admin::{CompanySummaryResponse, StaffRow};
use contracts::navigation::{NavigationPayload, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d401_company_admin::api;
use crate::navigation::use_nav;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;

/// Company-level view: booth staff with their capture tallies. Opening
/// a staff member drops into the lead inbox scoped to them.
#[component]
pub fn CompanyDashboard() -> impl IntoView {
    let nav = use_nav();
    let data: RwSignal<Option<CompanySummaryResponse>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let company = nav.scope.company.get();
        spawn_local(async move {
            match api::fetch_company_summary(company.map(|c| c.id)).await {
                Ok(response) => data.set(Some(response)),
                Err(e) => set_error.set(Some(format!("Failed to load company summary: {}", e))),
            }
        });
    });

    let subtitle = Signal::derive(move || {
        nav.scope
            .company
            .get()
            .map(|c| c.name)
            .unwrap_or_else(|| "{CompanyName}".to_string())
    });

    let staff_count = Signal::derive(move || data.get().map(|d| d.staff_count.to_string()));
    let lead_count = Signal::derive(move || data.get().map(|d| d.lead_count.to_string()));
    let rated_count = Signal::derive(move || data.get().map(|d| d.rated_lead_count.to_string()));

    view! {
        <div class="page">
            <PageHeader title="Company Dashboard" subtitle=subtitle>
                <></>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-row">
                <StatCard label="Booth staff" icon_name="users" value=staff_count />
                <StatCard label="Leads" icon_name="inbox" value=lead_count />
                <StatCard label="Rated" icon_name="star" value=rated_count />
            </div>

            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Staff member"</th>
                            <th>"Username"</th>
                            <th>"Leads"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || data.get().map(|d| d.staff).unwrap_or_default()
                            key=|row| row.user.id
                            children=move |row: StaffRow| {
                                let user = row.user.clone();
                                view! {
                                    <tr>
                                        <td>{row.user.display_name()}</td>
                                        <td>{row.user.name.clone()}</td>
                                        <td>{row.lead_count}</td>
                                        <td>
                                            <button
                                                class="table-action"
                                                on:click=move |_| {
                                                    nav.navigate(
                                                        Page::Dashboard,
                                                        NavigationPayload::new()
                                                            .set_user(user.clone()),
                                                    )
                                                }
                                            >
                                                "Open" {icon("arrow-right")}
                                            </button>
                                        </td>
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
