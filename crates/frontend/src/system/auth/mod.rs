pub mod api;
pub mod context;
pub mod login_modal;
pub mod storage;

pub use context::{use_auth, AuthContext};
pub use login_modal::LoginModal;
