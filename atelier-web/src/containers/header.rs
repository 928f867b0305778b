use crate::api::PortfolioClient;
use crate::models::session::Session;
use crate::routes::MainRoute;
use crate::session::SessionManager;
use crate::storage::BrowserStorage;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(Header)]
pub fn header() -> Html {
    let (session, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let manager = SessionManager::new(BrowserStorage, PortfolioClient::shared());
            dispatch.set(manager.logout());
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300 shadow-md">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg font-bold">
                    {"Atelier"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal gap-1">
                <li><Link<MainRoute> to={MainRoute::Home}>{"Home"}</Link<MainRoute>></li>
                <li><Link<MainRoute> to={MainRoute::Projects}>{"Projects"}</Link<MainRoute>></li>
                <li><Link<MainRoute> to={MainRoute::Blog}>{"Blog"}</Link<MainRoute>></li>
                <li><Link<MainRoute> to={MainRoute::Contact}>{"Contact"}</Link<MainRoute>></li>
            </ul>
            <div class="flex items-center gap-2">
                {
                    session.user.as_ref().map_or_else(
                        || html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                    {"Log in"}
                                </Link<MainRoute>>
                                <Link<MainRoute> to={MainRoute::Register} classes="btn btn-ghost btn-sm">
                                    {"Register"}
                                </Link<MainRoute>>
                            </>
                        },
                        |user| html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Admin} classes="btn btn-ghost btn-sm">
                                    <Icon icon_id={IconId::HeroiconsOutlineWrenchScrewdriver} class="w-4 h-4" />
                                    {"Admin"}
                                </Link<MainRoute>>
                                <span class="text-sm text-base-content/80">{ &user.username }</span>
                                <button class="btn btn-error btn-sm" onclick={on_logout.clone()}>
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4" />
                                    {"Log out"}
                                </button>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
