use serde::{Deserialize, Serialize};

use super::page::Page;

/// Роли пользователей системы
///
/// Fixed for the session after login; drives default-scope assignment,
/// sidebar filtering and breadcrumb projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
    EventAdmin,
    EventOrganiser,
    SuperAdmin,
}

impl Role {
    /// Получить код роли
    pub fn code(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::EventAdmin => "event-admin",
            Role::EventOrganiser => "event-organiser",
            Role::SuperAdmin => "super-admin",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::EventAdmin => "Event Admin",
            Role::EventOrganiser => "Event Organiser",
            Role::SuperAdmin => "Super Admin",
        }
    }

    /// The dashboard this role lands on right after login.
    pub fn home_page(&self) -> Page {
        match self {
            Role::User => Page::Dashboard,
            Role::Admin => Page::AdminDashboard,
            Role::EventAdmin => Page::EventAdminDashboard,
            Role::EventOrganiser => Page::EventOrganiserDashboard,
            Role::SuperAdmin => Page::SuperAdminDashboard,
        }
    }

    /// Получить все роли
    pub fn all() -> Vec<Role> {
        vec![
            Role::User,
            Role::Admin,
            Role::EventAdmin,
            Role::EventOrganiser,
            Role::SuperAdmin,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "event-admin" => Some(Role::EventAdmin),
            "event-organiser" => Some(Role::EventOrganiser),
            "super-admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Role::from_code("owner"), None);
        assert_eq!(Role::from_code(""), None);
    }

    #[test]
    fn test_home_pages() {
        assert_eq!(Role::User.home_page(), Page::Dashboard);
        assert_eq!(Role::Admin.home_page(), Page::AdminDashboard);
        assert_eq!(Role::SuperAdmin.home_page(), Page::SuperAdminDashboard);
    }
}
