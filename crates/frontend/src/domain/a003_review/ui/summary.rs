use crate::shared::components::rating_stars::RatingStars;
use crate::shared::i18n::Msg;
use contracts::domain::a003_review::summary::ReviewSummary;
use contracts::shared::locale::Locale;
use leptos::prelude::*;

/// Average rating and the 5..1 star breakdown bars.
#[component]
pub fn ReviewSummaryPanel(summary: ReviewSummary, locale: Locale) -> impl IntoView {
    let rows = summary.breakdown();

    view! {
        <div class="review-summary">
            <div class="review-summary__average">
                <span class="review-summary__score">{format!("{:.1}", summary.average_rating)}</span>
                <RatingStars rating=summary.average_rating />
                <span class="review-summary__total">
                    {format!("{} {}", summary.total_reviews, Msg::ReviewsCount.text(locale))}
                </span>
            </div>
            <div class="review-summary__bars">
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <div class="review-summary__row">
                            <span class="review-summary__stars">{row.stars}</span>
                            <div class="review-summary__bar">
                                <div
                                    class="review-summary__fill"
                                    style=format!("width: {}%;", row.percentage)
                                ></div>
                            </div>
                            <span class="review-summary__count">{row.count}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
