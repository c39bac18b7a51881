use contracts::dashboards::d404_super_admin::{OrganiserRow, SystemSummaryResponse};
use contracts::navigation::{NavigationPayload, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d404_super_admin::api;
use crate::navigation::use_nav;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;

/// Super Admin landing view: the whole system, nothing selected yet.
/// Opening an organiser drops into the organiser dashboard with that
/// organiser in scope.
#[component]
pub fn SystemDashboard() -> impl IntoView {
    let nav = use_nav();
    let data: RwSignal<Option<SystemSummaryResponse>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_system_summary().await {
                Ok(response) => data.set(Some(response)),
                Err(e) => set_error.set(Some(format!("Failed to load system summary: {}", e))),
            }
        });
    });

    let organiser_count =
        Signal::derive(move || data.get().map(|d| d.organiser_count.to_string()));
    let event_count = Signal::derive(move || data.get().map(|d| d.event_count.to_string()));
    let company_count = Signal::derive(move || data.get().map(|d| d.company_count.to_string()));
    let lead_count = Signal::derive(move || data.get().map(|d| d.lead_count.to_string()));

    view! {
        <div class="page">
            <PageHeader title="System Dashboard" subtitle="All organisers">
                <></>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-row">
                <StatCard label="Organisers" icon_name="building" value=organiser_count />
                <StatCard label="Events" icon_name="calendar" value=event_count />
                <StatCard label="Exhibitors" icon_name="store" value=company_count />
                <StatCard label="Leads" icon_name="users" value=lead_count />
            </div>

            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Organiser"</th>
                            <th>"Events"</th>
                            <th>"Leads"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || data.get().map(|d| d.organisers).unwrap_or_default()
                            key=|row| row.organiser.id
                            children=move |row: OrganiserRow| {
                                let organiser = row.organiser.clone();
                                view! {
                                    <tr>
                                        <td>{row.organiser.name.clone()}</td>
                                        <td>{row.event_count}</td>
                                        <td>{row.lead_count}</td>
                                        <td>
                                            <button
                                                class="table-action"
                                                on:click=move |_| {
                                                    nav.navigate(
                                                        Page::EventOrganiserDashboard,
                                                        NavigationPayload::new()
                                                            .set_organiser(organiser.clone()),
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
