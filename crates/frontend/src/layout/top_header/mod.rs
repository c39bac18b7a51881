//! TopHeader component - application top bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Application brand
//! - Breadcrumb trail for the current (role, page, scope)
//! - User info and sign-out

pub mod breadcrumb_bar;

use breadcrumb_bar::BreadcrumbBar;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::navigation::use_nav;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let nav = use_nav();
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout(nav, set_auth_state);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {move || {
                        if is_sidebar_visible() {
                            icon("panel-left-close")
                        } else {
                            icon("panel-left-open")
                        }
                    }}
                </button>
                <span class="top-header__title">"Expo Lead Capture"</span>
            </div>

            // Breadcrumb trail, the navigation core's visible face
            <BreadcrumbBar />

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || {
                            auth_state
                                .get()
                                .user
                                .map(|u| u.username)
                                .unwrap_or_else(|| "Guest".to_string())
                        }}
                    </span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
