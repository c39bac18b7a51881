use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор лида
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub Uuid);

impl LeadId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// A captured visitor contact. Presentation-only record: the navigation
/// core never inspects leads, dashboards render them in tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "capturedAt")]
    pub captured_at: NaiveDateTime,
    /// 1..=5 star rating given at capture time, 0 = unrated.
    pub rating: u8,
}
