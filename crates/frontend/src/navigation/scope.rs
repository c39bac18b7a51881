use contracts::domain::{Company, Event, Organiser, TargetUser};
use contracts::navigation::Scope;
use leptos::prelude::*;

/// The four current selections as independent reactive cells, so the
/// breadcrumb bar and dashboards re-render on any slot change.
///
/// Storage only: every mutation goes through the dispatcher, dashboards
/// never write here directly.
#[derive(Clone, Copy)]
pub struct ScopeStore {
    pub organiser: RwSignal<Option<Organiser>>,
    pub event: RwSignal<Option<Event>>,
    pub company: RwSignal<Option<Company>>,
    pub user: RwSignal<Option<TargetUser>>,
}

impl ScopeStore {
    pub fn new() -> Self {
        Self {
            organiser: RwSignal::new(None),
            event: RwSignal::new(None),
            company: RwSignal::new(None),
            user: RwSignal::new(None),
        }
    }

    /// Tracked snapshot: callers re-run when any slot changes.
    pub fn snapshot(&self) -> Scope {
        Scope {
            organiser: self.organiser.get(),
            event: self.event.get(),
            company: self.company.get(),
            user: self.user.get(),
        }
    }

    /// Snapshot without creating reactive dependencies, for use inside
    /// the dispatcher.
    pub fn snapshot_untracked(&self) -> Scope {
        Scope {
            organiser: self.organiser.get_untracked(),
            event: self.event.get_untracked(),
            company: self.company.get_untracked(),
            user: self.user.get_untracked(),
        }
    }

    /// Commit a computed scope into the cells.
    pub fn replace(&self, scope: Scope) {
        self.organiser.set(scope.organiser);
        self.event.set(scope.event);
        self.company.set(scope.company);
        self.user.set(scope.user);
    }

    /// Back to all-null, the logout state.
    pub fn reset(&self) {
        self.replace(Scope::empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::OrganiserId;
    use uuid::Uuid;

    fn organiser() -> Organiser {
        Organiser {
            id: OrganiserId::new(Uuid::from_u128(1)),
            name: "Expo Group".to_string(),
        }
    }

    #[test]
    fn test_snapshot_replace_reset() {
        let store = ScopeStore::new();
        assert!(store.snapshot_untracked().is_empty());

        store.organiser.set(Some(organiser()));
        let snap = store.snapshot_untracked();
        assert_eq!(snap.organiser, Some(organiser()));

        store.replace(Scope::empty());
        assert!(store.snapshot_untracked().is_empty());

        store.organiser.set(Some(organiser()));
        store.reset();
        assert!(store.snapshot_untracked().is_empty());
    }
}
