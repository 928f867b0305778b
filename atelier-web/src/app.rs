use crate::api::PortfolioClient;
use crate::models::session::Session;
use crate::routes::MainRoute;
use crate::session::SessionManager;
use crate::storage::BrowserStorage;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<Session>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            // Restore any persisted session before the first route renders
            // behind the loading gate.
            let manager = SessionManager::new(BrowserStorage, PortfolioClient::shared());
            dispatch.set(manager.bootstrap());
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
