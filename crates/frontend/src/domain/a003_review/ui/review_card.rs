use crate::shared::components::rating_stars::RatingStars;
use contracts::domain::a003_review::aggregate::Review;
use leptos::prelude::*;

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let initial = review.initial();
    let date = review.created_date().to_string();

    view! {
        <article class="review-card">
            <header class="review-card__header">
                {match review.user_avatar.clone().filter(|s| !s.is_empty()) {
                    Some(src) => view! { <img class="review-card__avatar" src=src alt="" /> }.into_any(),
                    None => view! { <span class="review-card__avatar review-card__avatar--initial">{initial}</span> }.into_any(),
                }}
                <div>
                    <strong class="review-card__author">{review.user_name.clone()}</strong>
                    <time class="review-card__date" datetime=review.created_at.clone()>{date}</time>
                </div>
                <RatingStars rating=review.rating as f64 />
            </header>
            {(!review.comment.is_empty()).then(|| view! { <p class="review-card__comment">{review.comment.clone()}</p> })}
        </article>
    }
}
