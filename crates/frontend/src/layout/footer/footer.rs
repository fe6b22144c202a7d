use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::Msg;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let locale = ctx.locale;
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <a href=move || format!("/{}/directories", locale.get())>
                {move || Msg::Directories.text(locale.get())}
            </a>
            <span class="footer__copyright">{format!("© {}", year)}</span>
        </footer>
    }
}
