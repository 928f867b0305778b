use crate::api::PortfolioClient;
use shared::models::ContactRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    // (text, is_error)
    let status = use_state(|| None::<(String, bool)>);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            sending.set(true);
            status.set(None);

            let request = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            let status = status.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                match client.send_contact(&request).await {
                    Ok(response) => {
                        status.set(Some((response.message, false)));
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    Err(_) => status.set(Some((
                        "Could not send your message. Please try again later.".to_string(),
                        true,
                    ))),
                }
                sending.set(false);
            });
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
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

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(input.value());
            }
        })
    };

    html! {
        <div class="max-w-xl mx-auto p-4 md:p-8">
            <h1 class="text-3xl font-bold text-center mb-2">{"Get in touch"}</h1>
            <p class="text-center text-base-content/70 mb-8">
                {"I usually reply within a day or two."}
            </p>

            if let Some((text, is_error)) = &*status {
                <div class={classes!("alert", "mb-6", if *is_error { "alert-error" } else { "alert-success" })}>
                    <span>{text.clone()}</span>
                </div>
            }

            <form onsubmit={on_submit} class="bg-base-100 p-8 rounded-lg shadow-md space-y-4">
                <div class="form-control">
                    <label class="label" for="contact-name">
                        <span class="label-text">{"Name"}</span>
                    </label>
                    <input
                        id="contact-name"
                        class="input input-bordered"
                        type="text"
                        required=true
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="contact-email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input
                        id="contact-email"
                        class="input input-bordered"
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="contact-message">
                        <span class="label-text">{"Message"}</span>
                    </label>
                    <textarea
                        id="contact-message"
                        class="textarea textarea-bordered"
                        rows="5"
                        required=true
                        value={(*message).clone()}
                        oninput={on_message_input}
                    />
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={*sending}>
                    { if *sending { "Sending..." } else { "Send message" } }
                </button>
            </form>
        </div>
    }
}
