//! Profile sidebar: identity, rating and contact actions

use super::view_model::BusinessDetailsVm;
use crate::shared::components::rating_stars::RatingStars;
use crate::shared::i18n::Msg;
use crate::shared::icons::icon;
use contracts::domain::a002_business::aggregate::PLACEHOLDER_BANNER;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Sidebar(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    let Some(page) = vm.profile.get_untracked() else {
        return ().into_any();
    };
    let is_open = page.is_open();
    let status_text = page.about.status_text.clone().filter(|s| !s.is_empty());
    let business = page.business;

    let cover = business
        .cover_image
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_BANNER.to_string());
    let logo = business.logo.clone().filter(|s| !s.is_empty());
    let title = business.title(locale).to_string();
    let description = business.description(locale).map(str::to_string);
    let phone = business.primary_phone().map(str::to_string);
    let whatsapp = business.whatsapp_url();
    let contact = business.contact_info.clone().unwrap_or_default();
    let website = contact.website.filter(|s| !s.is_empty());
    let email = contact.email.filter(|s| !s.is_empty());
    let social: Vec<(&'static str, String)> = business
        .social_media
        .as_ref()
        .map(|s| s.links().into_iter().map(|(n, u)| (n, u.to_string())).collect())
        .unwrap_or_default();
    let maps = business.location.and_then(|l| l.maps_url());
    let address = business.address.clone().filter(|s| !s.is_empty());
    let views_count = business.views_count;
    let rating = business.rating.clone();

    view! {
        <aside class="business-sidebar">
            <div class="business-sidebar__cover">
                <img src=cover alt=title.clone() />
            </div>

            <div class="business-sidebar__identity">
                {logo.map(|src| view! { <img class="business-sidebar__logo" src=src alt="" /> })}
                <h1 class="business-sidebar__title">{title}</h1>
                <Flex gap=FlexGap::Small class="business-sidebar__badges">
                    {business.is_verified().then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {icon("verified")}
                            {Msg::Verified.text(locale)}
                        </Badge>
                    })}
                    {business.is_featured().then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {Msg::Featured.text(locale)}
                        </Badge>
                    })}
                    {business.is_premium().then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            {Msg::Premium.text(locale)}
                        </Badge>
                    })}
                </Flex>
                {description.map(|d| view! { <p class="business-sidebar__description">{d}</p> })}
            </div>

            <div class="business-sidebar__stats">
                <RatingStars rating=rating.average count=rating.count />
                <span class="business-sidebar__views">
                    {icon("eye")}
                    {format!("{} {}", views_count, Msg::Views.text(locale))}
                </span>
                <span class=if is_open {
                    "business-sidebar__status business-sidebar__status--open"
                } else {
                    "business-sidebar__status business-sidebar__status--closed"
                }>
                    {icon("clock")}
                    {status_text.unwrap_or_else(|| {
                        let msg = if is_open { Msg::OpenNow } else { Msg::ClosedNow };
                        msg.text(locale).to_string()
                    })}
                </span>
            </div>

            <div class="business-sidebar__actions">
                {phone.map(|p| view! {
                    <a class="business-sidebar__action" href=format!("tel:{}", p)>
                        {icon("phone")}
                        <span>{Msg::Call.text(locale)}</span>
                    </a>
                })}
                {whatsapp.map(|href| view! {
                    <a class="business-sidebar__action" href=href target="_blank" rel="noopener noreferrer">
                        {icon("whatsapp")}
                        <span>{Msg::WhatsApp.text(locale)}</span>
                    </a>
                })}
                {website.map(|href| view! {
                    <a class="business-sidebar__action" href=href target="_blank" rel="noopener noreferrer">
                        {icon("globe")}
                        <span>{Msg::Website.text(locale)}</span>
                    </a>
                })}
                {email.map(|e| view! {
                    <a class="business-sidebar__action" href=format!("mailto:{}", e)>
                        {icon("mail")}
                        <span>{Msg::Email.text(locale)}</span>
                    </a>
                })}
            </div>

            {address.map(|a| view! {
                <p class="business-sidebar__address">
                    {icon("map-pin")}
                    {match maps {
                        Some(href) => view! {
                            <a href=href target="_blank" rel="noopener noreferrer">{a}</a>
                        }
                        .into_any(),
                        None => view! { <span>{a}</span> }.into_any(),
                    }}
                </p>
            })}

            {(!social.is_empty()).then(|| view! {
                <Flex gap=FlexGap::Small class="business-sidebar__social">
                    {social
                        .into_iter()
                        .map(|(network, url)| view! {
                            <a
                                class=format!("business-sidebar__social-link business-sidebar__social-link--{}", network)
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=network
                            >
                                {icon("link")}
                                <span>{network}</span>
                            </a>
                        })
                        .collect_view()}
                </Flex>
            })}

            <Flex gap=FlexGap::Small class="business-sidebar__buttons">
                <Button
                    appearance=Signal::derive(move || {
                        if vm.following.get() {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                    })
                    on_click=move |_| vm.toggle_follow()
                >
                    {icon("heart")}
                    {move || (if vm.following.get() { Msg::Following } else { Msg::Follow }).text(locale)}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.share()>
                    {icon("share")}
                    {Msg::Share.text(locale)}
                </Button>
            </Flex>
            <Show when=move || vm.share_notice.get()>
                <div class="toast" role="status">{Msg::LinkCopied.text(locale)}</div>
            </Show>
        </aside>
    }
    .into_any()
}
