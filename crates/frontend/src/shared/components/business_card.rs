use crate::shared::components::rating_stars::RatingStars;
use crate::shared::i18n::Msg;
use contracts::domain::a002_business::aggregate::Business;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BusinessCard(business: Business, locale: Locale) -> impl IntoView {
    let href = business.href(locale);
    let image = business
        .card_images()
        .into_iter()
        .next()
        .unwrap_or_default();
    let name = business.localized_name(locale).to_string();
    let about = business
        .localized_about(locale)
        .map(str::to_string)
        .unwrap_or_default();
    let verified = business.is_verified();
    let featured = business.is_featured();

    view! {
        <a class="business-card" href=href>
            <div class="business-card__image">
                <img src=image alt=name.clone() loading="lazy" />
                {business.logo.clone().filter(|l| !l.is_empty()).map(|logo| view! {
                    <img class="business-card__logo" src=logo alt="" />
                })}
            </div>
            <div class="business-card__body">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <h3 class="business-card__name">{name}</h3>
                    {verified.then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {Msg::Verified.text(locale)}
                        </Badge>
                    })}
                    {featured.then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {Msg::Featured.text(locale)}
                        </Badge>
                    })}
                </Flex>
                <RatingStars rating=business.rating.average count=business.rating.count />
                <p class="business-card__about">{about}</p>
            </div>
        </a>
    }
}
