//! The single entry point every UI control calls to change pages.
//!
//! `NavContext` is provided once at the app root and injected via
//! context everywhere else — no module-level global. It owns the active
//! page, the role for the session, the scope store and the filter state;
//! a navigation request runs the policy, commits the result and switches
//! the page, all synchronously.

use contracts::navigation::{CrumbLink, FilterState, NavigationPayload, Page, Role};
use contracts::system::auth::{SessionSeed, UserInfo};
use leptos::logging::log;
use leptos::prelude::*;

use super::policy;
use super::scope::ScopeStore;

#[derive(Clone, Copy)]
pub struct NavContext {
    pub role: RwSignal<Option<Role>>,
    pub active: RwSignal<Page>,
    pub scope: ScopeStore,
    pub filters: RwSignal<FilterState>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            role: RwSignal::new(None),
            active: RwSignal::new(Page::Login),
            scope: ScopeStore::new(),
            filters: RwSignal::new(FilterState::default()),
        }
    }

    /// Navigate to a page with a partial scope update.
    ///
    /// Total and idempotent: identical calls from the same state land in
    /// the same state, and nothing here can fail — without a session any
    /// request degrades to the login page.
    pub fn navigate(&self, page: Page, payload: NavigationPayload) {
        if self.role.get_untracked().is_none() && page != Page::Login {
            log!("navigate: no active session, redirecting to login");
            self.active.set(Page::Login);
            return;
        }

        log!("navigate: page='{}'", page.code());
        let current = self.scope.snapshot_untracked();
        let next = policy::apply_navigation(page, &payload, &current);
        self.scope.replace(next);
        // Filters never persist across navigations unless re-supplied.
        self.filters.set(payload.filters.unwrap_or_default());
        self.active.set(page);
    }

    /// String-keyed entry point for menu items. Unknown keys fall back
    /// to the login page instead of raising.
    pub fn navigate_key(&self, key: &str, payload: NavigationPayload) {
        match Page::from_code(key) {
            Some(page) => self.navigate(page, payload),
            None => {
                log!("navigate_key: unknown page key '{}'", key);
                self.navigate(Page::Login, NavigationPayload::new());
            }
        }
    }

    /// Legacy 3-argument call shape: a trailing filter argument merged
    /// into the payload before dispatch.
    pub fn navigate_with_filters(
        &self,
        page: Page,
        mut payload: NavigationPayload,
        filters: FilterState,
    ) {
        let merged = match payload.filters.take() {
            Some(mut existing) => {
                existing.extend(filters);
                existing
            }
            None => filters,
        };
        self.navigate(page, payload.with_filters(merged));
    }

    /// Follow a breadcrumb link.
    pub fn follow(&self, link: &CrumbLink) {
        self.navigate(link.page, link.payload.clone());
    }

    /// Start a session: role-specific default scope, role's home page.
    pub fn init_session(&self, user: &UserInfo, seed: &SessionSeed) {
        log!(
            "init_session: user='{}' role='{}'",
            user.username,
            user.role.code()
        );
        self.role.set(Some(user.role));
        self.scope.replace(policy::initial_scope(user.role, seed));
        self.filters.set(FilterState::default());
        self.active.set(user.role.home_page());
    }

    /// End the session: scope cleared in full, back to the login page.
    pub fn logout(&self) {
        log!("logout: clearing session scope");
        self.role.set(None);
        self.scope.reset();
        self.filters.set(FilterState::default());
        self.active.set(Page::Login);
    }
}

/// Hook to access the navigation context.
pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::{Company, CompanyId, Event, EventId, TargetUser, TargetUserId};
    use uuid::Uuid;

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
            first_name: None,
            last_name: None,
        }
    }

    fn admin_session() -> (UserInfo, SessionSeed) {
        (
            UserInfo {
                id: "u-1".to_string(),
                username: "admin".to_string(),
                full_name: None,
                role: Role::Admin,
            },
            SessionSeed {
                default_event: Some(event()),
                default_company: Some(company()),
                self_user: Some(user()),
            },
        )
    }

    #[test]
    fn test_init_session_applies_role_defaults() {
        let nav = NavContext::new();
        let (info, seed) = admin_session();
        nav.init_session(&info, &seed);

        assert_eq!(nav.active.get_untracked(), Page::AdminDashboard);
        let scope = nav.scope.snapshot_untracked();
        assert_eq!(scope.event, Some(event()));
        assert_eq!(scope.company, Some(company()));
        assert_eq!(scope.organiser, None);
        assert_eq!(scope.user, None);
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let nav = NavContext::new();
        let (info, seed) = admin_session();
        nav.init_session(&info, &seed);

        let payload = NavigationPayload::new().set_user(user());
        nav.navigate(Page::Dashboard, payload.clone());
        let first = nav.scope.snapshot_untracked();
        nav.navigate(Page::Dashboard, payload);
        assert_eq!(nav.scope.snapshot_untracked(), first);
    }

    #[test]
    fn test_unknown_key_falls_back_to_login() {
        let nav = NavContext::new();
        let (info, seed) = admin_session();
        nav.init_session(&info, &seed);

        nav.navigate_key("reports", NavigationPayload::new());
        assert_eq!(nav.active.get_untracked(), Page::Login);
        assert!(nav.scope.snapshot_untracked().is_empty());
    }

    #[test]
    fn test_filters_reset_unless_resupplied() {
        let nav = NavContext::new();
        let (info, seed) = admin_session();
        nav.init_session(&info, &seed);

        let mut filters = FilterState::default();
        filters.insert("rating".to_string(), serde_json::json!(4));
        nav.navigate_with_filters(Page::Dashboard, NavigationPayload::new(), filters);
        assert_eq!(nav.filters.get_untracked().len(), 1);

        nav.navigate(Page::Dashboard, NavigationPayload::new());
        assert!(nav.filters.get_untracked().is_empty());
    }

    #[test]
    fn test_navigation_without_session_degrades_to_login() {
        let nav = NavContext::new();
        nav.navigate(Page::AdminDashboard, NavigationPayload::new());
        assert_eq!(nav.active.get_untracked(), Page::Login);
    }

    #[test]
    fn test_logout_clears_everything() {
        let nav = NavContext::new();
        let (info, seed) = admin_session();
        nav.init_session(&info, &seed);
        nav.navigate(Page::Dashboard, NavigationPayload::new().set_user(user()));

        nav.logout();
        assert_eq!(nav.role.get_untracked(), None);
        assert_eq!(nav.active.get_untracked(), Page::Login);
        assert!(nav.scope.snapshot_untracked().is_empty());
        assert!(nav.filters.get_untracked().is_empty());
    }
}
