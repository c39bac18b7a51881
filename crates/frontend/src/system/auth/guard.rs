use contracts::navigation::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires one of the given roles.
/// Shows a fallback message otherwise.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user
                    .map(|u| roles.contains(&u.role))
                    .unwrap_or(false)
            }
            fallback=|| view! { <div class="access-denied">"Access denied for this role."</div> }
        >
            {children()}
        </Show>
    }
}
