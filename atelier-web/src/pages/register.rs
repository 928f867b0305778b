use crate::api::PortfolioClient;
use crate::routes::MainRoute;
use gloo_timers::callback::Timeout;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const MIN_PASSWORD_LEN: usize = 6;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error.set(None);

            if password.len() < MIN_PASSWORD_LEN {
                error.set(Some(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters long."
                )));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let success = success.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                match client.register(&request).await {
                    Ok(response) => {
                        success.set(Some(format!("{} Redirecting to login...", response.message)));
                        Timeout::new(2_000, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&MainRoute::Login);
                            }
                        })
                        .forget();
                    }
                    Err(_) => {
                        error.set(Some(
                            "Registration failed. The username may already be taken.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-sm shadow-2xl bg-base-100">
                <form class="card-body" onsubmit={on_submit}>
                    <h1 class="text-2xl font-bold text-center mb-2">{"Create an account"}</h1>

                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    if let Some(message) = &*success {
                        <div class="alert alert-success">
                            <span>{message.clone()}</span>
                        </div>
                    }

                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_input}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_input}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            { if *loading { "Creating account..." } else { "Register" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
