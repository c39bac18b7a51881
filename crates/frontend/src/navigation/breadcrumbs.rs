//! Breadcrumb projection: (role, current page, scope) → ordered trail.
//!
//! One pure builder per role, selected once per render. Labels for a
//! segment whose backing slot is missing fall back to a bracketed
//! placeholder when the segment must be shown anyway; omittable segments
//! are simply omitted. Each clickable segment carries the page it opens
//! plus a payload re-supplying every entity at or above its depth, so
//! the depth clearing in the policy never discards what the click meant
//! to keep.

use contracts::navigation::{Crumb, NavigationPayload, Page, Role, Scope};

const ORGANISER_PLACEHOLDER: &str = "{OrganiserName}";
const EVENT_PLACEHOLDER: &str = "{EventName}";
const COMPANY_PLACEHOLDER: &str = "{CompanyName}";

/// Project the breadcrumb trail for the current view.
///
/// The final segment is the current position and never carries a link.
pub fn project(role: Role, current_page: Page, scope: &Scope) -> Vec<Crumb> {
    let mut trail = match role {
        Role::SuperAdmin => super_admin_trail(scope),
        Role::EventOrganiser => event_organiser_trail(scope),
        Role::EventAdmin => event_admin_trail(scope),
        Role::User | Role::Admin => exhibitor_trail(scope),
    };

    // Pages outside the hierarchy get their own terminal segment.
    if matches!(current_page, Page::KnowledgeBase | Page::Settings) {
        trail.push(Crumb::terminal(current_page.title()));
    }

    if let Some(last) = trail.last_mut() {
        last.navigate = None;
    }
    trail
}

/// System root → organiser → event → company → user, each only when set.
fn super_admin_trail(scope: &Scope) -> Vec<Crumb> {
    let mut trail = vec![Crumb::link(
        "System Dashboard",
        Page::SuperAdminDashboard,
        NavigationPayload::new(),
    )];
    if let Some(organiser) = &scope.organiser {
        trail.push(Crumb::link(
            organiser.name.clone(),
            Page::EventOrganiserDashboard,
            resupply_organiser(scope),
        ));
    }
    if let Some(event) = &scope.event {
        trail.push(Crumb::link(
            event.name.clone(),
            Page::EventAdminDashboard,
            resupply_event(scope),
        ));
    }
    if let Some(company) = &scope.company {
        trail.push(Crumb::link(
            company.name.clone(),
            Page::AdminDashboard,
            resupply_company(scope),
        ));
    }
    if let Some(user) = &scope.user {
        trail.push(Crumb::link(
            user.display_name(),
            Page::Dashboard,
            resupply_user(scope),
        ));
    }
    trail
}

/// Root is "Organiser Dashboard" until something deeper is selected,
/// then the organiser name takes over.
fn event_organiser_trail(scope: &Scope) -> Vec<Crumb> {
    let deeper = scope.has_selection_below_organiser();
    let root_label = if deeper {
        organiser_label(scope)
    } else {
        "Organiser Dashboard".to_string()
    };
    let mut trail = vec![Crumb::link(
        root_label,
        Page::EventOrganiserDashboard,
        resupply_organiser(scope),
    )];
    if deeper {
        trail.push(Crumb::link(
            event_label(scope),
            Page::EventAdminDashboard,
            resupply_event(scope),
        ));
    }
    if scope.company.is_some() || scope.user.is_some() {
        trail.push(Crumb::link(
            company_label(scope),
            Page::AdminDashboard,
            resupply_company(scope),
        ));
    }
    if let Some(user) = &scope.user {
        trail.push(Crumb::link(
            user.display_name(),
            Page::Dashboard,
            resupply_user(scope),
        ));
    }
    trail
}

/// Organiser and event segments are always shown; the organiser one is
/// never clickable — this role has no access to the organiser level.
fn event_admin_trail(scope: &Scope) -> Vec<Crumb> {
    let mut trail = vec![
        Crumb::terminal(organiser_label(scope)),
        Crumb::link(
            event_label(scope),
            Page::EventAdminDashboard,
            resupply_event(scope),
        ),
    ];
    if let Some(company) = &scope.company {
        trail.push(Crumb::link(
            company.name.clone(),
            Page::AdminDashboard,
            resupply_company(scope),
        ));
    }
    if let Some(user) = &scope.user {
        trail.push(Crumb::link(
            user.display_name(),
            Page::Dashboard,
            resupply_user(scope),
        ));
    }
    trail
}

/// User/Admin trail: Events / event / company / user. These roles cannot
/// open company- or user-scoped pages, so only the first two segments
/// are clickable, and the event segment re-enters their own dashboard.
fn exhibitor_trail(scope: &Scope) -> Vec<Crumb> {
    let mut trail = vec![Crumb::link("Events", Page::Events, NavigationPayload::new())];
    if scope.has_selection_below_organiser() {
        trail.push(Crumb::link(
            event_label(scope),
            Page::Dashboard,
            resupply_event(scope),
        ));
    }
    if scope.company.is_some() || scope.user.is_some() {
        trail.push(Crumb::terminal(company_label(scope)));
    }
    if let Some(user) = &scope.user {
        trail.push(Crumb::terminal(user.display_name()));
    }
    trail
}

fn organiser_label(scope: &Scope) -> String {
    scope
        .organiser
        .as_ref()
        .map(|o| o.name.clone())
        .unwrap_or_else(|| ORGANISER_PLACEHOLDER.to_string())
}

fn event_label(scope: &Scope) -> String {
    scope
        .event
        .as_ref()
        .map(|e| e.name.clone())
        .unwrap_or_else(|| EVENT_PLACEHOLDER.to_string())
}

fn company_label(scope: &Scope) -> String {
    scope
        .company
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string())
}

fn resupply_organiser(scope: &Scope) -> NavigationPayload {
    let mut payload = NavigationPayload::new();
    if let Some(organiser) = &scope.organiser {
        payload = payload.set_organiser(organiser.clone());
    }
    payload
}

fn resupply_event(scope: &Scope) -> NavigationPayload {
    let mut payload = resupply_organiser(scope);
    if let Some(event) = &scope.event {
        payload = payload.set_event(event.clone());
    }
    payload
}

fn resupply_company(scope: &Scope) -> NavigationPayload {
    let mut payload = resupply_event(scope);
    if let Some(company) = &scope.company {
        payload = payload.set_company(company.clone());
    }
    payload
}

fn resupply_user(scope: &Scope) -> NavigationPayload {
    let mut payload = resupply_company(scope);
    if let Some(user) = &scope.user {
        payload = payload.set_user(user.clone());
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::{
        Company, CompanyId, Event, EventId, Organiser, OrganiserId, TargetUser, TargetUserId,
    };
    use contracts::navigation::SlotPatch;
    use uuid::Uuid;

    fn organiser() -> Organiser {
        Organiser {
            id: OrganiserId::new(Uuid::from_u128(1)),
            name: "Expo Group".to_string(),
        }
    }

    fn event() -> Event {
        Event {
            id: EventId::new(Uuid::from_u128(2)),
            name: "Tech Expo 2025".to_string(),
            starts_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            ends_on: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            venue: "Hall 4".to_string(),
        }
    }

    fn company() -> Company {
        Company {
            id: CompanyId::new(Uuid::from_u128(3)),
            name: "Acme Robotics".to_string(),
            stand_no: "B-12".to_string(),
        }
    }

    fn user() -> TargetUser {
        TargetUser {
            id: TargetUserId::new(Uuid::from_u128(4)),
            name: "jdoe".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
        }
    }

    fn full_scope() -> Scope {
        Scope {
            organiser: Some(organiser()),
            event: Some(event()),
            company: Some(company()),
            user: Some(user()),
        }
    }

    #[test]
    fn test_last_crumb_never_navigates() {
        let scopes = [Scope::empty(), full_scope()];
        for role in Role::all() {
            for scope in &scopes {
                let trail = project(role, role.home_page(), scope);
                assert!(!trail.is_empty());
                assert!(
                    trail.last().unwrap().navigate.is_none(),
                    "terminal crumb must not navigate for {:?}",
                    role
                );
            }
        }
    }

    #[test]
    fn test_super_admin_empty_scope() {
        let trail = project(Role::SuperAdmin, Page::SuperAdminDashboard, &Scope::empty());
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, "System Dashboard");
        assert!(trail[0].navigate.is_none());
    }

    #[test]
    fn test_super_admin_full_chain() {
        let trail = project(Role::SuperAdmin, Page::Dashboard, &full_scope());
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "System Dashboard",
                "Expo Group",
                "Tech Expo 2025",
                "Acme Robotics",
                "Jane Doe"
            ]
        );

        // Each intermediate segment opens the page viewing its level.
        let organiser_link = trail[1].navigate.as_ref().unwrap();
        assert_eq!(organiser_link.page, Page::EventOrganiserDashboard);
        assert_eq!(
            organiser_link.payload.organiser,
            SlotPatch::Set(organiser())
        );

        let event_link = trail[2].navigate.as_ref().unwrap();
        assert_eq!(event_link.page, Page::EventAdminDashboard);
        // The click re-supplies the whole chain above the event.
        assert_eq!(event_link.payload.organiser, SlotPatch::Set(organiser()));
        assert_eq!(event_link.payload.event, SlotPatch::Set(event()));
        assert!(event_link.payload.company.is_keep());

        let company_link = trail[3].navigate.as_ref().unwrap();
        assert_eq!(company_link.page, Page::AdminDashboard);
        assert_eq!(company_link.payload.company, SlotPatch::Set(company()));
    }

    #[test]
    fn test_super_admin_omits_unset_slots() {
        let scope = Scope {
            organiser: Some(organiser()),
            event: Some(event()),
            ..Scope::empty()
        };
        let trail = project(Role::SuperAdmin, Page::EventAdminDashboard, &scope);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].label, "Tech Expo 2025");
    }

    #[test]
    fn test_event_organiser_root_label_switches() {
        let idle = project(
            Role::EventOrganiser,
            Page::EventOrganiserDashboard,
            &Scope::empty(),
        );
        assert_eq!(idle[0].label, "Organiser Dashboard");

        let scope = Scope {
            organiser: Some(organiser()),
            event: Some(event()),
            ..Scope::empty()
        };
        let drilled = project(Role::EventOrganiser, Page::EventAdminDashboard, &scope);
        assert_eq!(drilled[0].label, "Expo Group");
        assert!(drilled[0].navigate.is_some());
    }

    #[test]
    fn test_event_organiser_placeholder_without_organiser() {
        // An organiser account's own scope never carries an organiser
        // entity; the root segment degrades to a placeholder.
        let scope = Scope {
            event: Some(event()),
            ..Scope::empty()
        };
        let trail = project(Role::EventOrganiser, Page::EventAdminDashboard, &scope);
        assert_eq!(trail[0].label, "{OrganiserName}");
    }

    #[test]
    fn test_event_organiser_company_shown_when_only_user_set() {
        let scope = Scope {
            event: Some(event()),
            user: Some(user()),
            ..Scope::empty()
        };
        let trail = project(Role::EventOrganiser, Page::Dashboard, &scope);
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "{OrganiserName}",
                "Tech Expo 2025",
                "{CompanyName}",
                "Jane Doe"
            ]
        );
    }

    #[test]
    fn test_event_admin_organiser_never_clickable() {
        let trail = project(Role::EventAdmin, Page::Dashboard, &full_scope());
        assert_eq!(trail[0].label, "Expo Group");
        assert!(trail[0].navigate.is_none());
        assert!(trail[1].navigate.is_some());
    }

    #[test]
    fn test_event_admin_placeholders_on_empty_scope() {
        let trail = project(Role::EventAdmin, Page::EventAdminDashboard, &Scope::empty());
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["{OrganiserName}", "{EventName}"]);
        assert!(trail[1].navigate.is_none());
    }

    #[test]
    fn test_exhibitor_trail_clickability() {
        let trail = project(Role::User, Page::Dashboard, &full_scope());
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Events", "Tech Expo 2025", "Acme Robotics", "Jane Doe"]
        );
        assert!(trail[0].navigate.is_some());
        assert!(trail[1].navigate.is_some());
        assert!(trail[2].navigate.is_none());
        assert!(trail[3].navigate.is_none());

        // The event segment re-enters the lead dashboard, not the
        // event-admin page these roles cannot open.
        assert_eq!(trail[1].navigate.as_ref().unwrap().page, Page::Dashboard);
    }

    #[test]
    fn test_exhibitor_trail_on_events_page() {
        // After the events page cleared the deeper slots, only the root
        // segment remains.
        let trail = project(Role::Admin, Page::Events, &Scope::empty());
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, "Events");
        assert!(trail[0].navigate.is_none());
    }

    #[test]
    fn test_settings_appends_terminal_segment() {
        let trail = project(Role::Admin, Page::Settings, &full_scope());
        assert_eq!(trail.last().unwrap().label, "Settings");
        assert!(trail.last().unwrap().navigate.is_none());
    }
}
