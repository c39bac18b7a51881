use contracts::dashboards::d403_event_organiser::{EventRow, OrganiserSummaryResponse};
use contracts::navigation::{NavigationPayload, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d403_event_organiser::api;
use crate::navigation::use_nav;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_date_range;
use crate::shared::icons::icon;

/// Organiser-level view: the event portfolio. Opening an event drops
/// into the event dashboard with that event in scope.
#[component]
pub fn OrganiserDashboard() -> impl IntoView {
    let nav = use_nav();
    let data: RwSignal<Option<OrganiserSummaryResponse>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let organiser = nav.scope.organiser.get();
        spawn_local(async move {
            match api::fetch_organiser_summary(organiser.map(|o| o.id)).await {
                Ok(response) => data.set(Some(response)),
                Err(e) => set_error.set(Some(format!("Failed to load organiser summary: {}", e))),
            }
        });
    });

    // Missing scope never crashes a dashboard; it renders a placeholder.
    let subtitle = Signal::derive(move || {
        nav.scope
            .organiser
            .get()
            .map(|o| o.name)
            .unwrap_or_else(|| "{OrganiserName}".to_string())
    });

    let event_count = Signal::derive(move || data.get().map(|d| d.event_count.to_string()));
    let exhibitor_count =
        Signal::derive(move || data.get().map(|d| d.exhibitor_count.to_string()));
    let lead_count = Signal::derive(move || data.get().map(|d| d.lead_count.to_string()));

    view! {
        <div class="page">
            <PageHeader title="Organiser Dashboard" subtitle=subtitle>
                <></>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-row">
                <StatCard label="Events" icon_name="calendar" value=event_count />
                <StatCard label="Exhibitors" icon_name="store" value=exhibitor_count />
                <StatCard label="Leads" icon_name="users" value=lead_count />
            </div>

            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Event"</th>
                            <th>"Dates"</th>
                            <th>"Exhibitors"</th>
                            <th>"Leads"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || data.get().map(|d| d.events).unwrap_or_default()
                            key=|row| row.event.id
                            children=move |row: EventRow| {
                                let event = row.event.clone();
                                view! {
                                    <tr>
                                        <td>{row.event.name.clone()}</td>
                                        <td>
                                            {format_date_range(
                                                row.event.starts_on,
                                                row.event.ends_on,
                                            )}
                                        </td>
                                        <td>{row.exhibitor_count}</td>
                                        <td>{row.lead_count}</td>
                                        <td>
                                            <button
                                                class="table-action"
                                                on:click=move |_| {
                                                    nav.navigate(
                                                        Page::EventAdminDashboard,
                                                        NavigationPayload::new()
                                                            .set_event(event.clone()),
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
