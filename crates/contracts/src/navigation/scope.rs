use serde::{Deserialize, Serialize};

use crate::domain::{Company, Event, Organiser, TargetUser};

/// The current four-level selection: what is being viewed.
///
/// The slots form a chain (organiser → event → company → user), not four
/// independent filters: a non-null slot at depth N is only meaningful
/// together with (or as a stand-in default for) the slots above it.
/// Referential integrity between slots is deliberately not enforced —
/// nothing checks that `event` actually belongs to `organiser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub organiser: Option<Organiser>,
    pub event: Option<Event>,
    pub company: Option<Company>,
    pub user: Option<TargetUser>,
}

impl Scope {
    /// Fully empty scope, the state before login and after logout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no slot is selected.
    pub fn is_empty(&self) -> bool {
        self.organiser.is_none()
            && self.event.is_none()
            && self.company.is_none()
            && self.user.is_none()
    }

    /// True when anything below the organiser level is selected.
    pub fn has_selection_below_organiser(&self) -> bool {
        self.event.is_some() || self.company.is_some() || self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Event, EventId};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_empty() {
        let scope = Scope::empty();
        assert!(scope.is_empty());
        assert!(!scope.has_selection_below_organiser());
    }

    #[test]
    fn test_below_organiser() {
        let scope = Scope {
            event: Some(Event {
                id: EventId::new(Uuid::from_u128(1)),
                name: "Expo".to_string(),
                starts_on: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                ends_on: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                venue: "Hall 1".to_string(),
            }),
            ..Scope::empty()
        };
        assert!(!scope.is_empty());
        assert!(scope.has_selection_below_organiser());
    }
}
