use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center mt-16 space-y-4">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"This page doesn't exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Back home"}
            </Link<MainRoute>>
        </div>
    }
}
