use crate::shared::icons::icon;
use contracts::domain::a003_review::aggregate::MAX_RATING;
use leptos::prelude::*;

/// Star `index` (1-based) is drawn filled when the rating reaches it after
/// rounding to the nearest whole star.
fn is_filled(rating: f64, index: u8) -> bool {
    rating.round() >= index as f64
}

#[component]
pub fn RatingStars(
    #[prop(into)] rating: f64,
    /// Rating count shown in parentheses next to the stars
    #[prop(optional)]
    count: Option<u64>,
) -> impl IntoView {
    view! {
        <span class="rating-stars" title=format!("{:.1}", rating)>
            {(1..=MAX_RATING)
                .map(|i| {
                    let filled = is_filled(rating, i);
                    view! {
                        <span class=if filled { "rating-stars__star rating-stars__star--filled" } else { "rating-stars__star" }>
                            {icon(if filled { "star" } else { "star-outline" })}
                        </span>
                    }
                })
                .collect_view()}
            <span class="rating-stars__value">{format!("{:.1}", rating)}</span>
            {count.map(|c| view! { <span class="rating-stars__count">{format!("({})", c)}</span> })}
        </span>
    }
}

/// Clickable 1..=5 star input.
#[component]
pub fn StarPicker(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-picker" role="radiogroup">
            {(1..=MAX_RATING)
                .map(|i| {
                    view! {
                        <button
                            type="button"
                            class="star-picker__star"
                            class:star-picker__star--active=move || (value.get() >= i)
                            aria-label=format!("{} / {}", i, MAX_RATING)
                            on:click=move |_| value.set(i)
                        >
                            {move || icon(if value.get() >= i { "star" } else { "star-outline" })}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_filled_rounds() {
        assert!(is_filled(3.5, 4));
        assert!(!is_filled(3.4, 4));
        assert!(is_filled(5.0, 5));
        assert!(!is_filled(0.0, 1));
    }
}
