use serde::{Deserialize, Serialize};

/// Страницы приложения
///
/// One page is active at a time; the dispatcher is the only place that
/// switches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Login,
    Events,
    Dashboard,
    AdminDashboard,
    EventAdminDashboard,
    EventOrganiserDashboard,
    SuperAdminDashboard,
    KnowledgeBase,
    Settings,
}

impl Page {
    /// Получить код страницы
    pub fn code(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Events => "events",
            Page::Dashboard => "dashboard",
            Page::AdminDashboard => "admin-dashboard",
            Page::EventAdminDashboard => "event-admin-dashboard",
            Page::EventOrganiserDashboard => "event-organiser-dashboard",
            Page::SuperAdminDashboard => "super-admin-dashboard",
            Page::KnowledgeBase => "knowledge-base",
            Page::Settings => "settings",
        }
    }

    /// Заголовок страницы
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Events => "Events",
            Page::Dashboard => "Lead Inbox",
            Page::AdminDashboard => "Company Dashboard",
            Page::EventAdminDashboard => "Event Dashboard",
            Page::EventOrganiserDashboard => "Organiser Dashboard",
            Page::SuperAdminDashboard => "System Dashboard",
            Page::KnowledgeBase => "Knowledge Base",
            Page::Settings => "Settings",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "login" => Some(Page::Login),
            "events" => Some(Page::Events),
            "dashboard" => Some(Page::Dashboard),
            "admin-dashboard" => Some(Page::AdminDashboard),
            "event-admin-dashboard" => Some(Page::EventAdminDashboard),
            "event-organiser-dashboard" => Some(Page::EventOrganiserDashboard),
            "super-admin-dashboard" => Some(Page::SuperAdminDashboard),
            "knowledge-base" => Some(Page::KnowledgeBase),
            "settings" => Some(Page::Settings),
            _ => None,
        }
    }

    /// Получить все страницы
    pub fn all() -> Vec<Page> {
        vec![
            Page::Login,
            Page::Events,
            Page::Dashboard,
            Page::AdminDashboard,
            Page::EventAdminDashboard,
            Page::EventOrganiserDashboard,
            Page::SuperAdminDashboard,
            Page::KnowledgeBase,
            Page::Settings,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for page in Page::all() {
            assert_eq!(Page::from_code(page.code()), Some(page));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Page::from_code("reports"), None);
    }
}
