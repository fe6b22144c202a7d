use leptos::prelude::*;

use super::storage;

/// Session state shared by the login modal and everything that needs a token.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
    pub login_open: RwSignal<bool>,
    /// Runs once after the next successful login.
    pending: StoredValue<Option<Callback<()>>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(storage::get_token()),
            login_open: RwSignal::new(false),
            pending: StoredValue::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with_untracked(Option::is_some)
    }

    /// Runs `then` right away when a token is stored, otherwise opens the
    /// login modal and runs it after login.
    pub fn require_login(&self, then: Callback<()>) {
        if self.is_authenticated() {
            then.run(());
        } else {
            self.pending.set_value(Some(then));
            self.login_open.set(true);
        }
    }

    pub fn logged_in(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
        self.login_open.set(false);

        let pending = self.pending.try_update_value(Option::take).flatten();
        if let Some(then) = pending {
            then.run(());
        }
    }

    /// The server rejected the stored token: drop it and ask for a new login.
    pub fn expired(&self, then: Option<Callback<()>>) {
        storage::clear_token();
        self.token.set(None);
        self.pending.set_value(then);
        self.login_open.set(true);
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
        self.login_open.set(false);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
