//! Review modal: star rating, comment and the image picker notice

mod model;

use crate::shared::components::rating_stars::StarPicker;
use crate::shared::i18n::Msg;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a003_review::aggregate::CreateReviewRequest;
use contracts::shared::locale::Locale;
use leptos::prelude::*;
use leptos::task::spawn_local;
use model::{needs_login, submit_error_text, submit_review};
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn AddReviewModal(
    open: RwSignal<bool>,
    #[prop(into)] slug: Signal<String>,
    #[prop(into)] locale: Signal<Locale>,
    /// Runs after the server accepted the review
    on_submitted: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let rating = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let image_notice = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let reset = move || {
        rating.set(0);
        comment.set(String::new());
        error.set(None);
        image_notice.set(false);
    };

    let on_submit = move || {
        let locale = locale.get_untracked();
        let request = match CreateReviewRequest::validated(rating.get_untracked(), &comment.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(Msg::from(e).text(locale).to_string()));
                return;
            }
        };

        let slug = slug.get_untracked();
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match submit_review(&slug, &request, locale).await {
                Ok(_) => {
                    reset();
                    open.set(false);
                    on_submitted.run(());
                }
                Err(e) if needs_login(&e) => {
                    log::warn!("Review rejected, session expired");
                    open.set(false);
                    auth.expired(Some(Callback::new(move |_| open.set(true))));
                }
                Err(e) => {
                    log::error!("Failed to submit review: {}", e);
                    error.set(Some(submit_error_text(&e, locale)));
                }
            }
            submitting.set(false);
        });
    };

    let on_images = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .is_some_and(|files| files.length() > 0);
        image_notice.set(picked);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || Msg::WriteReview.text(locale.get())}</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <Show when=move || error.get().is_some()>
                                <div class="error-message" role="alert">{move || error.get()}</div>
                            </Show>
                            <div class="form-group">
                                <span>{move || Msg::YourRating.text(locale.get())}</span>
                                <StarPicker value=rating />
                            </div>
                            <label class="form-group">
                                <span>{move || Msg::YourReview.text(locale.get())}</span>
                                <Textarea value=comment attr:rows=4 />
                            </label>
                            <label class="form-group review-images">
                                {icon("image")}
                                <span>{move || Msg::AddImages.text(locale.get())}</span>
                                <input type="file" accept="image/*" multiple=true on:change=on_images />
                            </label>
                            <Show when=move || image_notice.get()>
                                <div class="notice">{move || Msg::ImageUploadUnsupported.text(locale.get())}</div>
                            </Show>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=Signal::derive(move || submitting.get())
                        >
                            {move || {
                                let msg = if submitting.get() { Msg::Submitting } else { Msg::Submit };
                                msg.text(locale.get())
                            }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                reset();
                                open.set(false);
                            }
                        >
                            {move || Msg::Cancel.text(locale.get())}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
