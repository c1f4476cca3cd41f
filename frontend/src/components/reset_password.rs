use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdeck_shared::validation::validate_password_reset;

use crate::api::ApiClient;
use crate::session::use_auth;
use crate::web::router::use_router;

/// 成功提示到自动跳回登录页的延迟
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn ResetPasswordPage(
    /// 重置令牌，来自邮件链接的 `?token=` 查询参数
    #[prop(into)]
    token: String,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (message, set_message) = signal(Option::<(String, bool)>::None);

    let has_token = !token.is_empty();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() || !has_token {
            return;
        }
        // 整表规则：两次输入一致；失败时不发请求
        if let Err(e) =
            validate_password_reset(&password.get_untracked(), &confirm.get_untracked())
        {
            set_message.set(Some((e.to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        set_message.set(None);

        let token = token.clone();
        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            match api.reset_password(token, password.get_untracked()).await {
                Ok(_) => {
                    set_message.set(Some(("Password reset successful!".to_string(), false)));
                    // 短暂停留后回登录页
                    set_timeout(move || router.navigate("/login"), REDIRECT_DELAY);
                }
                Err(e) => {
                    // 令牌过期 / 未知时服务端的 error 文案原样展示
                    set_message.set(Some((e.notice(), true)));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-4">"Reset password"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || !has_token>
                            <div role="alert" class="alert alert-warning text-sm py-2">
                                <span>"This reset link is missing its token. Request a new one."</span>
                            </div>
                        </Show>

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
                            <label class="label" for="password">
                                <span class="label-text">"New password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="At least 6 characters"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"Confirm password"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                placeholder="Repeat the new password"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || is_submitting.get() || !has_token
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Resetting..." }.into_any()
                                } else {
                                    "Reset password".into_any()
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
