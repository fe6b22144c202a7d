//! Media tab - image/video grid with a lightbox

use super::super::view_model::BusinessDetailsVm;
use crate::shared::components::page_state::{ErrorMessage, Loading};
use crate::shared::i18n::Msg;
use crate::shared::icons::icon;
use contracts::domain::a002_business::details::BusinessMedia;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MediaTab(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    view! {
        <div class="media-tab">
            {move || {
                if vm.media_loading.get() {
                    return view! { <Loading locale=locale /> }.into_any();
                }
                if let Some(err) = vm.media_error.get() {
                    return view! { <ErrorMessage message=err.text(locale) /> }.into_any();
                }
                let media = vm.media.get();
                if media.is_empty() {
                    return view! { <p class="empty-state">{Msg::NoMedia.text(locale)}</p> }.into_any();
                }
                view! {
                    <div class="media-grid">
                        {media
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| view! { <MediaThumb item=item on_open=move || vm.open_lightbox(index) /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
            <Lightbox vm=vm locale=locale />
        </div>
    }
}

#[component]
fn MediaThumb(item: BusinessMedia, on_open: impl Fn() + 'static) -> impl IntoView {
    let alt = item.caption.clone().unwrap_or_default();
    view! {
        <button type="button" class="media-grid__item" on:click=move |_| on_open()>
            <img src=item.preview_url().to_string() alt=alt loading="lazy" />
            {item.is_video().then(|| view! { <span class="media-grid__play">{icon("play")}</span> })}
        </button>
    }
}

#[component]
fn Lightbox(vm: BusinessDetailsVm, locale: Locale) -> impl IntoView {
    let current = move || {
        let index = vm.lightbox.get()?;
        vm.media.with(|m| m.get(index).cloned().map(|item| (index, m.len(), item)))
    };

    view! {
        {move || current().map(|(index, len, item)| view! {
            <div class="lightbox" role="dialog" aria-modal="true">
                <button
                    type="button"
                    class="lightbox__close"
                    aria-label=Msg::Close.text(locale)
                    on:click=move |_| vm.close_lightbox()
                >
                    {icon("x")}
                </button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=index == 0
                    on_click=move |_| vm.lightbox_previous()
                    attr:aria-label=Msg::Previous.text(locale)
                >
                    {icon(if locale.is_rtl() { "chevron-right" } else { "chevron-left" })}
                </Button>
                <figure class="lightbox__figure">
                    {if item.is_video() {
                        view! { <video src=item.url.clone() controls=true autoplay=true></video> }.into_any()
                    } else {
                        view! { <img src=item.url.clone() alt=item.caption.clone().unwrap_or_default() /> }.into_any()
                    }}
                    {item.caption.clone().map(|c| view! { <figcaption>{c}</figcaption> })}
                    <span class="lightbox__counter">{format!("{} / {}", index + 1, len)}</span>
                </figure>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=(index + 1 >= len)
                    on_click=move |_| vm.lightbox_next()
                    attr:aria-label=Msg::Next.text(locale)
                >
                    {icon(if locale.is_rtl() { "chevron-left" } else { "chevron-right" })}
                </Button>
            </div>
        })}
    }
}
