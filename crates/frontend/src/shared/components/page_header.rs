use leptos::prelude::*;

/// Title row of a listing page; `children` go into the actions slot
/// (dropdowns, sort).
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Category icon shown before the title
    #[prop(optional, into)]
    icon_url: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="page-header__content">
                {move || icon_url.get().map(|src| view! { <img class="page-header__icon" src=src alt="" /> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|text| view! { <p class="page-header__subtitle">{text}</p> })}
                </div>
            </div>
            <div class="page-header__actions">{children()}</div>
        </section>
    }
}
