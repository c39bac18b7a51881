use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Company, Event, Organiser, TargetUser};

/// Opaque UI filter state carried alongside a navigation request.
/// Filters never persist across navigations unless re-supplied.
pub type FilterState = HashMap<String, serde_json::Value>;

/// What a navigation request does to one scope slot.
///
/// Replaces the legacy "key absent / key: null / key: value" object shape
/// with an explicit tagged type, so call sites say what they mean instead
/// of the dispatcher sniffing payload shapes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotPatch<T> {
    /// Leave the slot to the page-depth rules (the "key absent" case).
    Keep,
    /// Explicitly empty the slot (the "key: null" case).
    Clear,
    /// Overwrite the slot (the "key: value" case).
    Set(T),
}

// Not derived: the derive would demand `T: Default` although `Keep`
// needs nothing from `T`.
impl<T> Default for SlotPatch<T> {
    fn default() -> Self {
        SlotPatch::Keep
    }
}

impl<T: Clone> SlotPatch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, SlotPatch::Keep)
    }

    /// Resolve the patch against the current slot value.
    pub fn apply(&self, current: Option<T>) -> Option<T> {
        match self {
            SlotPatch::Keep => current,
            SlotPatch::Clear => None,
            SlotPatch::Set(value) => Some(value.clone()),
        }
    }
}

/// A single entity handed to `NavigationPayload::entity`.
///
/// Covers the call sites that used to pass a bare entity instead of a
/// keyed payload; the slot is chosen by the entity's own kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScopeEntity {
    Organiser(Organiser),
    Event(Event),
    Company(Company),
    User(TargetUser),
}

/// A partial scope update plus optional filter state, supplied by the
/// caller when requesting a page change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationPayload {
    pub organiser: SlotPatch<Organiser>,
    pub event: SlotPatch<Event>,
    pub company: SlotPatch<Company>,
    pub user: SlotPatch<TargetUser>,
    pub filters: Option<FilterState>,
}

impl NavigationPayload {
    /// Payload that touches nothing: page-depth rules decide everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from a single entity, slot inferred from its kind.
    pub fn entity(entity: ScopeEntity) -> Self {
        match entity {
            ScopeEntity::Organiser(o) => Self::new().set_organiser(o),
            ScopeEntity::Event(e) => Self::new().set_event(e),
            ScopeEntity::Company(c) => Self::new().set_company(c),
            ScopeEntity::User(u) => Self::new().set_user(u),
        }
    }

    pub fn set_organiser(mut self, organiser: Organiser) -> Self {
        self.organiser = SlotPatch::Set(organiser);
        self
    }

    pub fn set_event(mut self, event: Event) -> Self {
        self.event = SlotPatch::Set(event);
        self
    }

    pub fn set_company(mut self, company: Company) -> Self {
        self.company = SlotPatch::Set(company);
        self
    }

    pub fn set_user(mut self, user: TargetUser) -> Self {
        self.user = SlotPatch::Set(user);
        self
    }

    pub fn clear_organiser(mut self) -> Self {
        self.organiser = SlotPatch::Clear;
        self
    }

    pub fn clear_event(mut self) -> Self {
        self.event = SlotPatch::Clear;
        self
    }

    pub fn clear_company(mut self) -> Self {
        self.company = SlotPatch::Clear;
        self
    }

    pub fn clear_user(mut self) -> Self {
        self.user = SlotPatch::Clear;
        self
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = Some(filters);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrganiserId;
    use uuid::Uuid;

    fn organiser() -> Organiser {
        Organiser {
            id: OrganiserId::new(Uuid::from_u128(7)),
            name: "Expo Group".to_string(),
        }
    }

    #[test]
    fn test_patch_apply() {
        let keep: SlotPatch<Organiser> = SlotPatch::Keep;
        let clear: SlotPatch<Organiser> = SlotPatch::Clear;
        let set = SlotPatch::Set(organiser());

        assert_eq!(keep.apply(Some(organiser())), Some(organiser()));
        assert_eq!(keep.apply(None), None);
        assert_eq!(clear.apply(Some(organiser())), None);
        assert_eq!(set.apply(None), Some(organiser()));
    }

    #[test]
    fn test_entity_matches_keyed_form() {
        // A bare organiser entity must behave exactly like the keyed payload.
        let bare = NavigationPayload::entity(ScopeEntity::Organiser(organiser()));
        let keyed = NavigationPayload::new().set_organiser(organiser());
        assert_eq!(bare, keyed);
    }

    #[test]
    fn test_default_is_all_keep() {
        let payload = NavigationPayload::new();
        assert!(payload.organiser.is_keep());
        assert!(payload.event.is_keep());
        assert!(payload.company.is_keep());
        assert!(payload.user.is_keep());
        assert!(payload.filters.is_none());
    }
}
