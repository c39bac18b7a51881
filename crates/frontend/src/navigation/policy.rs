//! Scope transition rules.
//!
//! Two moments feed the same machinery: every navigation request, and the
//! one-off default assignment right after login. The rules are
//! depth-driven and identical for every role; the role decides only which
//! defaults enter the scope at login and which home page they land on.

use contracts::navigation::{NavigationPayload, Page, Role, Scope};
use contracts::system::auth::SessionSeed;

/// Hierarchy depth a page views. Slot depths are organiser = 1,
/// event = 2, company = 3, user = 4; navigating to a page at depth D
/// clears every slot deeper than D unless the payload re-supplies it.
///
/// `knowledge-base` and `settings` sit outside the hierarchy and leave
/// the whole selection alone; `login` resets it in full.
fn page_depth(page: Page) -> u8 {
    match page {
        Page::Login | Page::SuperAdminDashboard => 0,
        Page::Events | Page::EventOrganiserDashboard => 1,
        Page::EventAdminDashboard => 2,
        Page::AdminDashboard => 3,
        Page::Dashboard | Page::KnowledgeBase | Page::Settings => 4,
    }
}

/// Compute the scope a navigation request lands in.
///
/// Supplied patches win first — a single call can clear deeper slots and
/// set a shallower one atomically — then the page-depth clearing runs
/// over every slot the payload left untouched.
pub fn apply_navigation(target: Page, payload: &NavigationPayload, current: &Scope) -> Scope {
    let mut next = Scope {
        organiser: payload.organiser.apply(current.organiser.clone()),
        event: payload.event.apply(current.event.clone()),
        company: payload.company.apply(current.company.clone()),
        user: payload.user.apply(current.user.clone()),
    };

    let depth = page_depth(target);
    if depth < 1 && payload.organiser.is_keep() {
        next.organiser = None;
    }
    if depth < 2 && payload.event.is_keep() {
        next.event = None;
    }
    if depth < 3 && payload.company.is_keep() {
        next.company = None;
    }
    if depth < 4 && payload.user.is_keep() {
        next.user = None;
    }
    next
}

/// Default scope right after login: the same policy, invoked once against
/// the role's home page with a payload built from the session seed.
pub fn initial_scope(role: Role, seed: &SessionSeed) -> Scope {
    apply_navigation(role.home_page(), &login_payload(role, seed), &Scope::empty())
}

/// Which seed entities become the role's starting selection.
///
/// User and Admin live at the bottom of the hierarchy and need an event
/// and a company to be useful; a User additionally views their own leads.
/// Event Admin and Event Organiser start at their event. Super Admin
/// starts with nothing selected.
fn login_payload(role: Role, seed: &SessionSeed) -> NavigationPayload {
    let mut payload = NavigationPayload::new();
    match role {
        Role::User | Role::Admin => {
            if let Some(event) = &seed.default_event {
                payload = payload.set_event(event.clone());
            }
            if let Some(company) = &seed.default_company {
                payload = payload.set_company(company.clone());
            }
            if role == Role::User {
                if let Some(user) = &seed.self_user {
                    payload = payload.set_user(user.clone());
                }
            }
        }
        Role::EventAdmin | Role::EventOrganiser => {
            if let Some(event) = &seed.default_event {
                payload = payload.set_event(event.clone());
            }
        }
        Role::SuperAdmin => {}
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

    fn full_seed() -> SessionSeed {
        SessionSeed {
            default_event: Some(event()),
            default_company: Some(company()),
            self_user: Some(user()),
        }
    }

    #[test]
    fn test_super_admin_dashboard_clears_everything() {
        let next = apply_navigation(
            Page::SuperAdminDashboard,
            &NavigationPayload::new(),
            &full_scope(),
        );
        assert_eq!(next, Scope::empty());
    }

    #[test]
    fn test_payload_precedence_over_clearing() {
        // An explicitly supplied organiser survives the depth-0 clearing.
        let payload = NavigationPayload::new().set_organiser(organiser());
        let next = apply_navigation(Page::SuperAdminDashboard, &payload, &full_scope());
        assert_eq!(next.organiser, Some(organiser()));
        assert_eq!(next.event, None);
        assert_eq!(next.company, None);
        assert_eq!(next.user, None);
    }

    #[test]
    fn test_event_admin_dashboard_retains_organiser_and_event() {
        let next = apply_navigation(
            Page::EventAdminDashboard,
            &NavigationPayload::new(),
            &full_scope(),
        );
        assert_eq!(next.organiser, Some(organiser()));
        assert_eq!(next.event, Some(event()));
        assert_eq!(next.company, None);
        assert_eq!(next.user, None);
    }

    #[test]
    fn test_admin_dashboard_clears_only_user() {
        let next = apply_navigation(
            Page::AdminDashboard,
            &NavigationPayload::new(),
            &full_scope(),
        );
        assert_eq!(next.organiser, Some(organiser()));
        assert_eq!(next.event, Some(event()));
        assert_eq!(next.company, Some(company()));
        assert_eq!(next.user, None);
    }

    #[test]
    fn test_lead_dashboard_retains_everything() {
        let next = apply_navigation(Page::Dashboard, &NavigationPayload::new(), &full_scope());
        assert_eq!(next, full_scope());
    }

    #[test]
    fn test_events_page_retains_organiser_only() {
        let next = apply_navigation(Page::Events, &NavigationPayload::new(), &full_scope());
        assert_eq!(next.organiser, Some(organiser()));
        assert_eq!(next.event, None);
        assert_eq!(next.company, None);
        assert_eq!(next.user, None);
    }

    #[test]
    fn test_pages_outside_hierarchy_leave_scope_alone() {
        for page in [Page::KnowledgeBase, Page::Settings] {
            let next = apply_navigation(page, &NavigationPayload::new(), &full_scope());
            assert_eq!(next, full_scope());
        }
    }

    #[test]
    fn test_login_resets_scope() {
        let next = apply_navigation(Page::Login, &NavigationPayload::new(), &full_scope());
        assert_eq!(next, Scope::empty());
    }

    #[test]
    fn test_explicit_clear_is_honored() {
        // Dashboard retains everything, but an explicit clear still wins.
        let payload = NavigationPayload::new().clear_company().clear_user();
        let next = apply_navigation(Page::Dashboard, &payload, &full_scope());
        assert_eq!(next.event, Some(event()));
        assert_eq!(next.company, None);
        assert_eq!(next.user, None);
    }

    #[test]
    fn test_set_shallow_and_clear_deep_is_atomic() {
        // One call can set the organiser while the depth rules drop the rest.
        let other = Organiser {
            id: OrganiserId::new(Uuid::from_u128(99)),
            name: "Fair Ltd".to_string(),
        };
        let payload = NavigationPayload::new().set_organiser(other.clone());
        let next = apply_navigation(Page::EventOrganiserDashboard, &payload, &full_scope());
        assert_eq!(next.organiser, Some(other));
        assert_eq!(next.event, None);
        assert_eq!(next.company, None);
        assert_eq!(next.user, None);
    }

    #[test]
    fn test_bare_entity_equals_keyed_payload() {
        use contracts::navigation::ScopeEntity;

        let bare = apply_navigation(
            Page::Events,
            &NavigationPayload::entity(ScopeEntity::Organiser(organiser())),
            &full_scope(),
        );
        let keyed = apply_navigation(
            Page::Events,
            &NavigationPayload::new().set_organiser(organiser()),
            &full_scope(),
        );
        assert_eq!(bare, keyed);
    }

    #[test]
    fn test_idempotent_for_identical_calls() {
        let payload = NavigationPayload::new().set_event(event());
        let first = apply_navigation(Page::EventAdminDashboard, &payload, &full_scope());
        let second = apply_navigation(Page::EventAdminDashboard, &payload, &first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_login_defaults_user() {
        let scope = initial_scope(Role::User, &full_seed());
        assert_eq!(scope.organiser, None);
        assert_eq!(scope.event, Some(event()));
        assert_eq!(scope.company, Some(company()));
        assert_eq!(scope.user, Some(user()));
    }

    #[test]
    fn test_login_defaults_admin() {
        // Admin has no organiser concept and does not default to a user.
        let scope = initial_scope(Role::Admin, &full_seed());
        assert_eq!(scope.organiser, None);
        assert_eq!(scope.event, Some(event()));
        assert_eq!(scope.company, Some(company()));
        assert_eq!(scope.user, None);
    }

    #[test]
    fn test_login_defaults_event_roles() {
        for role in [Role::EventAdmin, Role::EventOrganiser] {
            let scope = initial_scope(role, &full_seed());
            assert_eq!(scope.organiser, None);
            assert_eq!(scope.event, Some(event()));
            assert_eq!(scope.company, None);
            assert_eq!(scope.user, None);
        }
    }

    #[test]
    fn test_login_defaults_super_admin() {
        let scope = initial_scope(Role::SuperAdmin, &full_seed());
        assert_eq!(scope, Scope::empty());
    }
}
