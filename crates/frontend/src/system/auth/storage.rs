use contracts::system::auth::TOKEN_STORAGE_KEY;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

/// Get bearer token from localStorage; blank values count as absent
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Forget the stored token (server answered 401)
pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
