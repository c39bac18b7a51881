use serde::{Deserialize, Serialize};

use crate::domain::{Company, Event, TargetUser};
use crate::navigation::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Login yields a role and an initial entity set; the navigation core
/// turns the seed into role-specific default scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub seed: SessionSeed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Role,
}

/// The entities a fresh session may default to. Which of them actually
/// enter the scope is the policy's decision, not the login layer's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSeed {
    pub default_event: Option<Event>,
    pub default_company: Option<Company>,
    pub self_user: Option<TargetUser>,
}
