use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

/// Horizontal category navigation under the header.
#[component]
pub fn CategoryMenu() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let locale = ctx.locale;

    view! {
        <nav class="category-menu">
            <For
                each=move || ctx.categories.get()
                key=|c| (c.id, c.slug.clone())
                children=move |category: Category| {
                    let label = category.clone();
                    view! {
                        <a class="category-menu__item" href=move || category.href(locale.get())>
                            {move || label.display_name(locale.get()).to_string()}
                        </a>
                    }
                }
            />
        </nav>
    }
}
