use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор мероприятия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// A trade show / exhibition. Belongs to exactly one organiser
/// (ownership is the data layer's concern, the navigation core never
/// checks it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(rename = "startsOn")]
    pub starts_on: NaiveDate,
    #[serde(rename = "endsOn")]
    pub ends_on: NaiveDate,
    pub venue: String,
}
