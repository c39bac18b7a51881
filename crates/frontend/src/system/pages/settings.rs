use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::system::auth::context::use_auth;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };
    let role_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.role.display_name())
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <PageHeader title="Settings">
                <></>
            </PageHeader>

            <div class="settings-section">
                <h3>"Account"</h3>
                <div class="settings-row">
                    <span class="settings-row__label">"Signed in as"</span>
                    <span class="settings-row__value">{username}</span>
                </div>
                <div class="settings-row">
                    <span class="settings-row__label">"Role"</span>
                    <span class="settings-row__value">{role_name}</span>
                </div>
            </div>
        </div>
    }
}
