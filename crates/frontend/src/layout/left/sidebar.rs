//! Sidebar component with role-filtered menu groups.
//!
//! The menu is static; what a signed-in user sees is decided per item by
//! the roles it is listed for. Items dispatch string-keyed navigation.

use contracts::navigation::{NavigationPayload, Role};
use leptos::prelude::*;

use crate::navigation::use_nav;
use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    roles: &'static [Role],
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<MenuItem>,
}

const ALL_ROLES: &[Role] = &[
    Role::User,
    Role::Admin,
    Role::EventAdmin,
    Role::EventOrganiser,
    Role::SuperAdmin,
];

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            items: vec![
                MenuItem {
                    key: "super-admin-dashboard",
                    label: "System",
                    icon: "layout-dashboard",
                    roles: &[Role::SuperAdmin],
                },
                MenuItem {
                    key: "event-organiser-dashboard",
                    label: "Organiser",
                    icon: "building",
                    roles: &[Role::EventOrganiser, Role::SuperAdmin],
                },
                MenuItem {
                    key: "event-admin-dashboard",
                    label: "Event",
                    icon: "calendar",
                    roles: &[Role::EventAdmin, Role::EventOrganiser, Role::SuperAdmin],
                },
                MenuItem {
                    key: "admin-dashboard",
                    label: "Company",
                    icon: "store",
                    roles: &[
                        Role::Admin,
                        Role::EventAdmin,
                        Role::EventOrganiser,
                        Role::SuperAdmin,
                    ],
                },
                MenuItem {
                    key: "dashboard",
                    label: "Lead Inbox",
                    icon: "inbox",
                    roles: ALL_ROLES,
                },
            ],
        },
        MenuGroup {
            id: "browse",
            label: "Browse",
            items: vec![MenuItem {
                key: "events",
                label: "Events",
                icon: "calendar",
                roles: &[Role::User, Role::Admin],
            }],
        },
        MenuGroup {
            id: "help",
            label: "Help",
            items: vec![
                MenuItem {
                    key: "knowledge-base",
                    label: "Knowledge Base",
                    icon: "book-open",
                    roles: ALL_ROLES,
                },
                MenuItem {
                    key: "settings",
                    label: "Settings",
                    icon: "settings",
                    roles: ALL_ROLES,
                },
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    let visible_groups = move || {
        let Some(role) = nav.role.get() else {
            return Vec::new();
        };
        get_menu_groups()
            .into_iter()
            .filter_map(|group| {
                let items: Vec<MenuItem> = group
                    .items
                    .iter()
                    .copied()
                    .filter(|item| item.roles.contains(&role))
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(MenuGroup {
                        id: group.id,
                        label: group.label,
                        items,
                    })
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            <For
                each=visible_groups
                key=|group| group.id
                children=move |group: MenuGroup| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|item| {
                                    let is_active = move || nav.active.get().code() == item.key;
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=is_active
                                            on:click=move |_| {
                                                nav.navigate_key(item.key, NavigationPayload::new())
                                            }
                                        >
                                            {icon(item.icon)}
                                            <span>{item.label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </nav>
    }
}
