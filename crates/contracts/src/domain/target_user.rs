use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор сотрудника стенда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetUserId(pub Uuid);

impl TargetUserId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// An individual booth staff member, scoped to one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetUser {
    pub id: TargetUserId,
    pub name: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

impl TargetUser {
    /// Display name: "First Last" when both parts are known, otherwise `name`.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.name.clone(),
        }
    }
}
