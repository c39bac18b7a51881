use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::navigation::NavContext;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation context to the whole app. It is created
    // here and reset on logout; nothing else owns navigation state.
    provide_context(NavContext::new());

    // Layout chrome state (sidebar visibility)
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
