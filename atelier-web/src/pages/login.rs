use crate::api::{ApiError, PortfolioClient};
use crate::models::session::Session;
use crate::routes::MainRoute;
use crate::session::SessionManager;
use crate::storage::BrowserStorage;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let (_, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            loading.set(true);
            error.set(None);

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                match client.login(&request).await {
                    Ok(response) => {
                        let manager =
                            SessionManager::new(BrowserStorage, PortfolioClient::shared());
                        let session = manager.login(response.token, response.user);
                        dispatch.set(session);
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Admin);
                        }
                    }
                    Err(ApiError::Client(401)) => {
                        error.set(Some("Invalid credentials".to_string()));
                    }
                    Err(ApiError::Network(_)) => {
                        error.set(Some("Unable to connect to server".to_string()));
                    }
                    Err(other) => {
                        error.set(Some(format!("Login failed: {other}")));
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
                    <h1 class="text-2xl font-bold text-center mb-2">{"Admin Login"}</h1>

                    if let Some(message) = &*error {
                        <div class="alert alert-error">
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
                            { if *loading { "Signing in..." } else { "Sign in" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
