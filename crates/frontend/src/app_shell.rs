//! Application shell: app-wide contexts, page chrome and the login modal.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::system::auth::{AuthContext, LoginModal};
use leptos::prelude::*;

/// Must sit inside `<Router>`: the locale comes from the current path.
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_document_integration();
    ctx.init_categories();

    provide_context(AuthContext::new());

    view! {
        <Shell>
            <AppRoutes />
        </Shell>
        <LoginModal locale=ctx.locale />
    }
}
