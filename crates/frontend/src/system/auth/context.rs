use contracts::system::auth::{LoginRequest, UserInfo};
use leptos::prelude::*;

use crate::navigation::{use_nav, NavContext};

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    // Restore a persisted session on mount. The selection scope is not
    // persisted; init_session re-applies the role defaults.
    let nav = use_nav();
    Effect::new(move |_| {
        if auth_state.get_untracked().user.is_some() {
            return;
        }
        if let Some((username, role)) = storage::get_session() {
            let response = api::restore(&username, role);
            nav.init_session(&response.user, &response.seed);
            set_auth_state.set(AuthState {
                user: Some(response.user),
            });
        }
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    nav: NavContext,
    set_auth_state: WriteSignal<AuthState>,
    request: LoginRequest,
) -> Result<(), String> {
    let response = api::login(request).await?;

    storage::save_session(&response.user.username, response.user.role);
    nav.init_session(&response.user, &response.seed);
    set_auth_state.set(AuthState {
        user: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(nav: NavContext, set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    nav.logout();
    set_auth_state.set(AuthState::default());
}
