use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

/// Public landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <div class="hero bg-base-200 rounded-lg py-16">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <h1 class="text-4xl font-bold">{"Hi, I build things."}</h1>
                        <p class="py-6 text-base-content/80">
                            {"Welcome to my corner of the web — a collection of projects I've shipped and notes I've written along the way."}
                        </p>
                        <Link<MainRoute> to={MainRoute::Projects} classes="btn btn-primary">
                            {"See my work"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineRectangleStack} class="w-6 h-6" />
                            {"Projects"}
                        </h2>
                        <p>{"Selected work, with links to the live sites."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Projects} classes="btn btn-primary btn-sm">
                                {"Browse"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                            {"Blog"}
                        </h2>
                        <p>{"Longer-form writing on whatever I'm learning."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Blog} classes="btn btn-secondary btn-sm">
                                {"Read"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-6 h-6" />
                            {"Contact"}
                        </h2>
                        <p>{"Questions or collaboration ideas? Drop me a line."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Contact} classes="btn btn-outline btn-sm">
                                {"Say hello"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
