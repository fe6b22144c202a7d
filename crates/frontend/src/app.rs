use crate::app_shell::AppShell;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppShell />
        </Router>
    }
}
