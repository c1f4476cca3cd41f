use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdeck_shared::error::ApiError;
use staffdeck_shared::validation::validate_reset_request;

use crate::api::ApiClient;
use crate::session::use_auth;
use crate::web::router::use_router;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // (文案, 是否错误)
    let (message, set_message) = signal(Option::<(String, bool)>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        if let Err(e) = validate_reset_request(&email.get_untracked()) {
            set_message.set(Some((e.to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        set_message.set(None);

        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            let result = api.request_password_reset(email.get_untracked()).await;
            match result {
                // 未知邮箱也按成功处理，避免账号枚举；
                // 只有传输层失败才报错
                Ok(_) | Err(ApiError::NotFound(_)) => {
                    set_message.set(Some((
                        "Check your email for reset instructions.".to_string(),
                        false,
                    )));
                }
                Err(ApiError::Network(_)) => {
                    set_message.set(Some(("Error sending reset email.".to_string(), true)));
                }
                Err(_) => {
                    set_message.set(Some((
                        "Check your email for reset instructions.".to_string(),
                        false,
                    )));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-2">"Forgot password"</h1>
                <p class="text-base-content/70 mb-4">
                    "Enter your email and we'll send you reset instructions."
                </p>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || message.get().is_some()>
                            <div
                                role="alert"
                                class=move || {
                                    if message.get().map(|(_, is_err)| is_err).unwrap_or(false) {
                                        "alert alert-error text-sm py-2"
                                    } else {
                                        "alert alert-success text-sm py-2"
                                    }
                                }
                            >
                                <span>{move || message.get().map(|(text, _)| text).unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="alice@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Sending..." }.into_any()
                                } else {
                                    "Send reset email".into_any()
                                }}
                            </button>
                        </div>

                        <div class="text-sm mt-2 text-center">
                            <a class="link link-hover" on:click=move |_| router.navigate("/login")>
                                "Back to sign in"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
