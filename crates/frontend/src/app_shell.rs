//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (показывает LoginPage или MainLayout)
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + Content)

use crate::layout::left::sidebar::Sidebar;
use crate::layout::registry::render_page;
use crate::layout::Shell;
use crate::navigation::use_nav;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main application layout with Sidebar and the active page content.
#[component]
fn MainLayout() -> impl IntoView {
    let nav = use_nav();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    // Re-renders whenever the dispatcher switches pages
                    {move || render_page(nav.active.get())}
                }
                    .into_any()
            }
        />
    }
}

/// Application shell - auth gate component.
///
/// Показывает:
/// - `LoginPage` если пользователь не авторизован
/// - `MainLayout` если авторизован
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
