use contracts::dashboards::d402_event_admin::{EventSummaryResponse, ExhibitorRow};
use contracts::navigation::{NavigationPayload, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d402_event_admin::api;
use crate::navigation::use_nav;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;

/// Event-level view: the exhibitor list. Opening an exhibitor drops
/// into the company dashboard with that company in scope.
#[component]
pub fn EventDashboard() -> impl IntoView {
    let nav = use_nav();
    let data: RwSignal<Option<EventSummaryResponse>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let event = nav.scope.event.get();
        spawn_local(async move {
            match api::fetch_event_summary(event.map(|e| e.id)).await {
                Ok(response) => data.set(Some(response)),
                Err(e) => set_error.set(Some(format!("Failed to load event summary: {}", e))),
            }
        });
    });

    let subtitle = Signal::derive(move || {
        nav.scope
            .event
            .get()
            .map(|e| e.name)
            .unwrap_or_else(|| "{EventName}".to_string())
    });

    let exhibitor_count =
        Signal::derive(move || data.get().map(|d| d.exhibitor_count.to_string()));
    let staff_count = Signal::derive(move || data.get().map(|d| d.staff_count.to_string()));
    let lead_count = Signal::derive(move || data.get().map(|d| d.lead_count.to_string()));

    view! {
        <div class="page">
            <PageHeader title="Event Dashboard" subtitle=subtitle>
                <></>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-row">
                <StatCard label="Exhibitors" icon_name="store" value=exhibitor_count />
                <StatCard label="Booth staff" icon_name="users" value=staff_count />
                <StatCard label="Leads" icon_name="bar-chart" value=lead_count />
            </div>

            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Company"</th>
                            <th>"Stand"</th>
                            <th>"Staff"</th>
                            <th>"Leads"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || data.get().map(|d| d.exhibitors).unwrap_or_default()
                            key=|row| row.company.id
                            children=move |row: ExhibitorRow| {
                                let company = row.company.clone();
                                view! {
                                    <tr>
                                        <td>{row.company.name.clone()}</td>
                                        <td>{row.company.stand_no.clone()}</td>
                                        <td>{row.staff_count}</td>
                                        <td>{row.lead_count}</td>
                                        <td>
                                            <button
                                                class="table-action"
                                                on:click=move |_| {
                                                    nav.navigate(
                                                        Page::AdminDashboard,
                                                        NavigationPayload::new()
                                                            .set_company(company.clone()),
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
