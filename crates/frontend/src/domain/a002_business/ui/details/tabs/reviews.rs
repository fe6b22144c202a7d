//! Reviews tab - summary, list and the write-review entry point

use super::super::view_model::BusinessDetailsVm;
use crate::domain::a003_review::ui::{ReviewCard, ReviewSummaryPanel};
use crate::shared::components::page_state::{ErrorMessage, Loading};
use crate::shared::i18n::Msg;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ReviewsTab(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    let auth = use_auth();
    let open_modal = Callback::new(move |_| vm.review_modal_open.set(true));

    view! {
        <div class="reviews-tab">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3>{Msg::Comments.text(locale)}</h3>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| auth.require_login(open_modal)
                >
                    {icon("edit")}
                    {Msg::WriteReview.text(locale)}
                </Button>
            </Flex>

            {move || vm.summary.get().map(|summary| view! { <ReviewSummaryPanel summary=summary locale=locale /> })}

            {move || {
                if vm.reviews_loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if let Some(err) = vm.reviews_error.get() {
                    return view! { <ErrorMessage message=err.text(locale) /> }.into_any();
                }
                let reviews = vm.reviews.get();
                if reviews.is_empty() {
                    return view! { <p class="empty-state">{Msg::NoReviews.text(locale)}</p> }.into_any();
                }
                view! {
                    <div class="review-list">
                        {reviews
                            .into_iter()
                            .map(|review| view! { <ReviewCard review=review /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
