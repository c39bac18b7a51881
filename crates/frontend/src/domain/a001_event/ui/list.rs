use contracts::domain::Event;
use contracts::navigation::{NavigationPayload, Page, ScopeEntity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_event::api;
use crate::navigation::use_nav;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date_range;
use crate::shared::icons::icon;

/// Event selection list. Opening an event drops the viewer into the
/// lead dashboard scoped to it.
#[component]
pub fn EventsPage() -> impl IntoView {
    let nav = use_nav();
    let events: RwSignal<Vec<Event>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let organiser = nav.scope.organiser.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_events(organiser.map(|o| o.id)).await {
                Ok(data) => {
                    events.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load events: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Events" subtitle="Pick an event to work in">
                <></>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading events…"</div>
            </Show>

            <div class="data-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Event"</th>
                            <th>"Dates"</th>
                            <th>"Venue"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || events.get()
                            key=|event| event.id
                            children=move |event: Event| {
                                let open_event = event.clone();
                                view! {
                                    <tr>
                                        <td>{event.name.clone()}</td>
                                        <td>{format_date_range(event.starts_on, event.ends_on)}</td>
                                        <td>{event.venue.clone()}</td>
                                        <td>
                                            <button
                                                class="table-action"
                                                on:click=move |_| {
                                                    nav.navigate(
                                                        Page::Dashboard,
                                                        NavigationPayload::entity(
                                                            ScopeEntity::Event(open_event.clone()),
                                                        ),
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
