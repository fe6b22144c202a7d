use contracts::shared::locale::Locale;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::context::use_auth;
use crate::shared::i18n::Msg;

/// Phone/password login dialog, opened by `AuthContext::require_login`.
#[component]
pub fn LoginModal(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
    let auth = use_auth();
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<Msg>::None);
    let is_loading = RwSignal::new(false);

    let on_submit = move || {
        let Some(request) = LoginRequest::new(&phone.get_untracked(), &password.get_untracked())
        else {
            error.set(Some(Msg::LoginRequired));
            return;
        };

        is_loading.set(true);
        error.set(None);
        let locale = locale.get_untracked();

        spawn_local(async move {
            match api::login(&request, locale).await {
                Ok(token) => {
                    password.set(String::new());
                    auth.logged_in(token);
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    error.set(Some(Msg::LoginFailed));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <Dialog open=auth.login_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || Msg::Login.text(locale.get())}</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <Show when=move || error.get().is_some()>
                                <div class="error-message">
                                    {move || error.get().map(|m| m.text(locale.get()))}
                                </div>
                            </Show>
                            <label class="form-group">
                                <span>{move || Msg::Phone.text(locale.get())}</span>
                                <Input value=phone input_type=InputType::Tel />
                            </label>
                            <label class="form-group">
                                <span>{move || Msg::Password.text(locale.get())}</span>
                                <Input value=password input_type=InputType::Password />
                            </label>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit()
                            disabled=Signal::derive(move || is_loading.get())
                        >
                            {move || {
                                let msg = if is_loading.get() { Msg::LoggingIn } else { Msg::Login };
                                msg.text(locale.get())
                            }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                error.set(None);
                                auth.cancel();
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
