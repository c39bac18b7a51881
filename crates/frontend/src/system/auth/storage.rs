use contracts::navigation::Role;
use web_sys::window;

const SESSION_USERNAME_KEY: &str = "session_username";
const SESSION_ROLE_KEY: &str = "session_role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the signed-in session to localStorage
pub fn save_session(username: &str, role: Role) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_USERNAME_KEY, username);
        let _ = storage.set_item(SESSION_ROLE_KEY, role.code());
    }
}

/// Get the persisted session, if any
pub fn get_session() -> Option<(String, Role)> {
    let storage = get_local_storage()?;
    let username = storage.get_item(SESSION_USERNAME_KEY).ok()??;
    let role = Role::from_code(&storage.get_item(SESSION_ROLE_KEY).ok()??)?;
    Some((username, role))
}

/// Clear the persisted session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_USERNAME_KEY);
        let _ = storage.remove_item(SESSION_ROLE_KEY);
    }
}
