//! About tab - description, branches, working hours and FAQs

use super::super::view_model::BusinessDetailsVm;
use crate::shared::i18n::Msg;
use crate::shared::icons::icon;
use contracts::domain::a002_business::details::{today_index, Branch, Faq, WorkingHours};
use contracts::shared::locale::Locale;
use leptos::prelude::*;

#[component]
pub fn AboutTab(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    let Some(page) = vm.profile.get_untracked() else {
        return ().into_any();
    };
    let description = page.business.description(locale).map(str::to_string);
    let about = page.about;

    view! {
        <div class="about-tab">
            {description.map(|d| view! { <p class="about-tab__description">{d}</p> })}
            {(!about.branches.is_empty()).then(|| view! { <Branches branches=about.branches locale=locale /> })}
            {(!about.working_hours.is_empty()).then(|| view! { <Hours hours=about.working_hours locale=locale /> })}
            {(!about.faqs.is_empty()).then(|| view! { <Faqs faqs=about.faqs locale=locale /> })}
        </div>
    }
    .into_any()
}

#[component]
fn Branches(branches: Vec<Branch>, locale: Locale) -> impl IntoView {
    view! {
        <section class="about-tab__section">
            <h3>{Msg::Branches.text(locale)}</h3>
            <ul class="branch-list">
                {branches
                    .into_iter()
                    .map(|b| {
                        let name = b.localized_name(locale).to_string();
                        let address = b.localized_address(locale).to_string();
                        view! {
                            <li class="branch-list__item">
                                <strong>{name}</strong>
                                <span>{address}</span>
                                {b.contact_number.clone().map(|n| view! {
                                    <a href=format!("tel:{}", n)>{icon("phone")}{n.clone()}</a>
                                })}
                                {b.maps_url().map(|href| view! {
                                    <a href=href target="_blank" rel="noopener noreferrer">{icon("map-pin")}</a>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn Hours(hours: Vec<WorkingHours>, locale: Locale) -> impl IntoView {
    let today = today_index(&chrono::Local::now().date_naive());

    view! {
        <section class="about-tab__section">
            <h3>{icon("clock")}{Msg::WorkingHours.text(locale)}</h3>
            <table class="hours-table">
                <tbody>
                    {hours
                        .into_iter()
                        .map(|h| {
                            let range = if h.is_closed {
                                Msg::Closed.text(locale).to_string()
                            } else {
                                h.display_range(locale)
                            };
                            view! {
                                <tr class:hours-table__row--today=h.day == today>
                                    <td>{h.day_name(locale)}</td>
                                    <td>{range}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// Accordion; every item opens on its own.
#[component]
fn Faqs(faqs: Vec<Faq>, locale: Locale) -> impl IntoView {
    view! {
        <section class="about-tab__section">
            <h3>{Msg::Faqs.text(locale)}</h3>
            <div class="faq-list">
                {faqs
                    .into_iter()
                    .map(|faq| {
                        let open = RwSignal::new(false);
                        let question = bilingual(locale, &faq.question, &faq.question_ar);
                        let answer = bilingual(locale, &faq.answer, &faq.answer_ar);
                        view! {
                            <div class="faq-list__item" class:faq-list__item--open=move || open.get()>
                                <button
                                    type="button"
                                    class="faq-list__question"
                                    aria-expanded=move || open.get().to_string()
                                    on:click=move |_| open.update(|o| *o = !*o)
                                >
                                    <span>{question}</span>
                                    {icon("chevron-down")}
                                </button>
                                <Show when=move || open.get()>
                                    <p class="faq-list__answer">{answer.clone()}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Arabic fields are often left empty; the English text fills in.
fn bilingual(locale: Locale, en: &str, ar: &str) -> String {
    locale
        .pick_opt(Some(en), Some(ar))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilingual_falls_back_to_english() {
        assert_eq!(bilingual(Locale::Ar, "Parking?", ""), "Parking?");
        assert_eq!(bilingual(Locale::Ar, "Parking?", "مواقف؟"), "مواقف؟");
        assert_eq!(bilingual(Locale::En, "", ""), "");
    }
}
