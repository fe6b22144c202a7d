use leptos::prelude::*;
use thaw::*;

/// `(value, text)` of one `<option>`.
pub type SelectOption = (String, String);

/// Labeled `<Select>`; `on_change` fires only for user picks, not when the
/// selection follows the URL.
#[component]
pub fn FilterDropdown(
    #[prop(into)] label: String,
    options: Vec<SelectOption>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let select_value = RwSignal::new(selected.get_untracked());

    // Sync selected -> select_value
    Effect::new(move |_| {
        select_value.set(selected.get());
    });

    // Sync select_value -> on_change
    Effect::new(move |prev: Option<String>| {
        let current = select_value.get();
        if prev.is_some() && prev.as_ref() != Some(&current) && current != selected.get_untracked() {
            on_change.run(current.clone());
        }
        current
    });

    view! {
        <label class="filter-dropdown">
            <span class="filter-dropdown__label">{label}</span>
            <Select value=select_value>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </Select>
        </label>
    }
}
