//! Services tab - priced services and for-sale listings

use super::super::view_model::BusinessDetailsVm;
use crate::shared::components::page_state::{ErrorMessage, Loading};
use crate::shared::i18n::Msg;
use contracts::domain::a006_for_sale::aggregate::{format_price, ForSaleListing, ForSaleService};
use contracts::shared::locale::Locale;
use leptos::prelude::*;

#[component]
pub fn ServicesTab(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    view! {
        <div class="services-tab">
            {move || {
                if vm.services_loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if let Some(err) = vm.services_error.get() {
                    return view! { <ErrorMessage message=err.text(locale) /> }.into_any();
                }
                let services = vm.services.get();
                if services.is_empty() {
                    return view! { <p class="empty-state">{Msg::NoServices.text(locale)}</p> }.into_any();
                }
                view! { <ServiceList services=services locale=locale /> }.into_any()
            }}
            {move || {
                let listings = vm.listings.get();
                (!listings.is_empty()).then(|| view! { <ListingGrid listings=listings locale=locale /> })
            }}
        </div>
    }
}

#[component]
fn ServiceList(services: Vec<ForSaleService>, locale: Locale) -> impl IntoView {
    view! {
        <section>
            <h3>{Msg::ServicesTitle.text(locale)}</h3>
            <ul class="service-list">
                {services
                    .into_iter()
                    .map(|s| {
                        let prefix = s.price_prefix(locale);
                        let price = s.price_display(locale);
                        view! {
                            <li class="service-list__item">
                                {(!s.icon.is_empty()).then(|| view! {
                                    <img class="service-list__icon" src=s.icon.clone() alt="" />
                                })}
                                <span class="service-list__name">{s.name}</span>
                                {price.map(|p| view! {
                                    <span class="service-list__price">
                                        {prefix.map(|pre| format!("{} ", pre))}
                                        {p}
                                    </span>
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
fn ListingGrid(listings: Vec<ForSaleListing>, locale: Locale) -> impl IntoView {
    view! {
        <section class="for-sale">
            <h3>{Msg::ForSaleTitle.text(locale)}</h3>
            <div class="card-grid">
                {listings
                    .into_iter()
                    .map(|l| {
                        let price = if l.currency.is_empty() {
                            format_price(l.price, locale)
                        } else {
                            format!("{:.1} {}", l.price, l.currency)
                        };
                        let body = view! {
                            {l.images.first().cloned().map(|src| view! {
                                <img class="for-sale__image" src=src alt=l.title.clone() loading="lazy" />
                            })}
                            <div class="for-sale__body">
                                <strong>{l.title.clone()}</strong>
                                <span class="for-sale__price">{price}</span>
                                {l.location.clone().map(|loc| view! { <span class="for-sale__location">{loc}</span> })}
                            </div>
                        };
                        match l.url.clone() {
                            Some(href) => view! {
                                <a class="for-sale__card" href=href target="_blank" rel="noopener noreferrer">{body}</a>
                            }
                            .into_any(),
                            None => view! { <div class="for-sale__card">{body}</div> }.into_any(),
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
