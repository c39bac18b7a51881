use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор организатора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganiserId(pub Uuid);

impl OrganiserId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// An event organiser — the top of the viewing hierarchy.
///
/// Opaque to the navigation core: only `id` and `name` are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organiser {
    pub id: OrganiserId,
    pub name: String,
}
