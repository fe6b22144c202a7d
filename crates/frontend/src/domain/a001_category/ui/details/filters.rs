use contracts::domain::a004_tag::aggregate::Tag;
use contracts::shared::locale::Locale;
use leptos::prelude::*;

/// "All" chip followed by one chip per tag.
#[component]
pub fn TagChips(
    tags: Vec<Tag>,
    selected: Option<String>,
    locale: Locale,
    all_label: &'static str,
    /// Listing URL for a chip (`None` = all).
    href: Callback<Option<String>, String>,
) -> impl IntoView {
    let all_active = selected.is_none();

    view! {
        <nav class="tag-chips">
            <a
                class="tag-chip"
                class:tag-chip--active=all_active
                href=href.run(None)
            >
                {all_label}
            </a>
            {tags
                .into_iter()
                .map(|tag| {
                    let active = selected.as_deref() == Some(tag.slug.as_str());
                    let name = tag.display_name(locale).to_string();
                    view! {
                        <a
                            class="tag-chip"
                            class:tag-chip--active=active
                            href=href.run(Some(tag.slug.clone()))
                            title=tag.display_description(locale).map(str::to_string)
                        >
                            {tag.icon.clone().filter(|i| !i.is_empty()).map(|src| view! {
                                <img class="tag-chip__icon" src=src alt="" />
                            })}
                            {name}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
