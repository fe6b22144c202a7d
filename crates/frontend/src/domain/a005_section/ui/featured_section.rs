use crate::shared::components::business_card::BusinessCard;
use contracts::domain::a005_section::aggregate::Section;
use contracts::shared::locale::Locale;
use leptos::prelude::*;

/// Featured row on the directories page with a link to the CTA listing.
#[component]
pub fn FeaturedSection(section: Section, locale: Locale) -> impl IntoView {
    let style = section
        .background_color
        .clone()
        .filter(|c| !c.is_empty())
        .map(|c| format!("background-color: {};", c))
        .unwrap_or_default();
    let heading = section.heading(locale).to_string();
    let description = section.display_description.clone();
    let cta = section
        .cta
        .listing_href(locale)
        .map(|href| (href, section.cta_label(locale).to_string()));

    view! {
        <section class="featured-section" style=style>
            <div class="featured-section__header">
                <div>
                    <h2 class="featured-section__title">{heading}</h2>
                    {(!description.is_empty()).then(|| view! {
                        <p class="featured-section__description">{description}</p>
                    })}
                </div>
                {cta.map(|(href, label)| view! {
                    <a class="featured-section__cta" href=href>{label}</a>
                })}
            </div>
            <div class="featured-section__businesses">
                {section
                    .businesses
                    .into_iter()
                    .map(|business| view! { <BusinessCard business=business locale=locale /> })
                    .collect_view()}
            </div>
        </section>
    }
}
