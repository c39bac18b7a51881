//! Mock authentication API.
//!
//! Login is an external collaborator for this product: it validates no
//! credentials and simply yields a role plus the entity seed the
//! navigation policy turns into role-specific default scope.

use contracts::navigation::Role;
use contracts::system::auth::{LoginRequest, LoginResponse, SessionSeed, UserInfo};
use gloo_timers::future::TimeoutFuture;

use crate::shared::demo::DEMO;

pub async fn login(request: LoginRequest) -> Result<LoginResponse, String> {
    TimeoutFuture::new(350).await;

    let username = request.username.trim();
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    Ok(session_for(username, request.role))
}

/// Rebuild a session from persisted credentials on page reload. Scope is
/// not persisted; the role defaults are simply re-applied.
pub fn restore(username: &str, role: Role) -> LoginResponse {
    session_for(username, role)
}

fn session_for(username: &str, role: Role) -> LoginResponse {
    LoginResponse {
        user: UserInfo {
            id: format!("usr-{}", username),
            username: username.to_string(),
            full_name: None,
            role,
        },
        seed: default_seed(),
    }
}

/// First event, its first company, that company's first staff member.
fn default_seed() -> SessionSeed {
    let event = DEMO.events.first().map(|r| r.event.clone());
    let company = event
        .as_ref()
        .and_then(|e| DEMO.companies_for(Some(e.id)).into_iter().next());
    let user = company
        .as_ref()
        .and_then(|c| DEMO.staff_for(Some(c.id)).into_iter().next());
    SessionSeed {
        default_event: event,
        default_company: company,
        self_user: user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_builds_full_seed() {
        let response = restore("jdoe", Role::User);
        assert_eq!(response.user.role, Role::User);
        assert!(response.seed.default_event.is_some());
        assert!(response.seed.default_company.is_some());
        assert!(response.seed.self_user.is_some());
    }

    #[test]
    fn test_seed_chain_is_consistent() {
        // The default company belongs to the default event, and the
        // default user to that company.
        let seed = default_seed();
        let event = seed.default_event.unwrap();
        let company = seed.default_company.unwrap();
        assert!(DEMO
            .companies_for(Some(event.id))
            .iter()
            .any(|c| c.id == company.id));
        let user = seed.self_user.unwrap();
        assert!(DEMO
            .staff_for(Some(company.id))
            .iter()
            .any(|u| u.id == user.id));
    }
}
