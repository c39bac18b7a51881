//! Page registry - единственный источник правды для маппинга Page → View.
//!
//! The dispatcher already degraded unknown page keys to the login page,
//! so every reachable variant has an arm here. Role-restricted
//! dashboards are wrapped in `RequireRole`; the sidebar hides them, the
//! guard backs it up.

use contracts::navigation::{Page, Role};
use leptos::prelude::*;

use crate::dashboards::{
    CompanyDashboard, EventDashboard, LeadInboxDashboard, OrganiserDashboard, SystemDashboard,
};
use crate::domain::a001_event::ui::EventsPage;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::knowledge_base::KnowledgeBasePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::settings::SettingsPage;

const SYSTEM_LEVEL: &[Role] = &[Role::SuperAdmin];
const ORGANISER_LEVEL: &[Role] = &[Role::EventOrganiser, Role::SuperAdmin];
const EVENT_LEVEL: &[Role] = &[Role::EventAdmin, Role::EventOrganiser, Role::SuperAdmin];
const COMPANY_LEVEL: &[Role] = &[
    Role::Admin,
    Role::EventAdmin,
    Role::EventOrganiser,
    Role::SuperAdmin,
];

/// Рендерит контент активной страницы.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage /> }.into_any(),

        Page::Events => view! { <EventsPage /> }.into_any(),

        Page::Dashboard => view! { <LeadInboxDashboard /> }.into_any(),

        Page::AdminDashboard => view! {
            <RequireRole roles=COMPANY_LEVEL>
                <CompanyDashboard />
            </RequireRole>
        }
        .into_any(),

        Page::EventAdminDashboard => view! {
            <RequireRole roles=EVENT_LEVEL>
                <EventDashboard />
            </RequireRole>
        }
        .into_any(),

        Page::EventOrganiserDashboard => view! {
            <RequireRole roles=ORGANISER_LEVEL>
                <OrganiserDashboard />
            </RequireRole>
        }
        .into_any(),

        Page::SuperAdminDashboard => view! {
            <RequireRole roles=SYSTEM_LEVEL>
                <SystemDashboard />
            </RequireRole>
        }
        .into_any(),

        Page::KnowledgeBase => view! { <KnowledgeBasePage /> }.into_any(),

        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
