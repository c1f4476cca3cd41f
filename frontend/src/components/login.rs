use leptos::prelude::*;
use leptos::task::spawn_local;
use staffdeck_shared::validation::validate_login;

use crate::api::ApiClient;
use crate::components::icons::Users;
use crate::session::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 固定的凭据错误文案，不区分失败原因。
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        if let Err(e) = validate_login(&email.get_untracked(), &password.get_untracked()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = ApiClient::new(auth.session);
        spawn_local(async move {
            match api
                .login(email.get_untracked(), password.get_untracked())
                .await
            {
                Ok(response) => {
                    // 先持久化令牌，再导航到员工列表
                    auth.login(&response.token);
                    router.navigate(&AppRoute::auth_success_redirect().to_path());
                }
                Err(_) => {
                    set_error_msg.set(Some(LOGIN_FAILED.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Users attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"StaffDeck"</h1>
                        <p class="text-base-content/70">"Sign in to manage the employee directory"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
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
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>

                        <div class="flex justify-between text-sm mt-2">
                            <a
                                class="link link-hover"
                                on:click=move |_| router.navigate("/register")
                            >
                                "Create an account"
                            </a>
                            <a
                                class="link link-hover"
                                on:click=move |_| router.navigate("/forgot-password")
                            >
                                "Forgot password?"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
