use contracts::navigation::Crumb;
use leptos::prelude::*;

use crate::navigation::{breadcrumbs, use_nav};
use crate::shared::icons::icon;

/// Renders the projected breadcrumb trail. Clickable segments dispatch
/// the link computed by the projector; the terminal segment is plain
/// text.
#[component]
pub fn BreadcrumbBar() -> impl IntoView {
    let nav = use_nav();

    let crumbs = move || {
        let Some(role) = nav.role.get() else {
            return Vec::new();
        };
        breadcrumbs::project(role, nav.active.get(), &nav.scope.snapshot())
    };

    view! {
        <div class="breadcrumbs">
            <For
                each={move || crumbs().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, crumb)| (*index, crumb.label.clone())
                children=move |(index, crumb): (usize, Crumb)| {
                    let label = crumb.label.clone();
                    let body = match crumb.navigate {
                        Some(link) => view! {
                            <button
                                class="breadcrumbs__link"
                                on:click=move |_| nav.follow(&link)
                            >
                                {label}
                            </button>
                        }
                            .into_any(),
                        None => {
                            view! { <span class="breadcrumbs__current">{label}</span> }.into_any()
                        }
                    };
                    view! {
                        <span class="breadcrumbs__segment">
                            {(index > 0)
                                .then(|| {
                                    view! {
                                        <span class="breadcrumbs__sep">
                                            {icon("chevron-right")}
                                        </span>
                                    }
                                })}
                            {body}
                        </span>
                    }
                }
            />
        </div>
    }
}
