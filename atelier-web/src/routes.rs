use crate::components::loading::Loading;
use crate::containers::layout::Layout;
use crate::models::session::{Gate, Session};
use crate::pages::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: String },
    #[at("/contact")]
    Contact,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct MainRouteViewProps {
    route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_store_value::<Session>();
    let gate = session.gate();

    match props.route.clone() {
        MainRoute::Home => html! { <Layout><HomePage /></Layout> },
        MainRoute::Projects => html! { <Layout><ProjectsPage /></Layout> },
        MainRoute::Blog => html! { <Layout><BlogListPage /></Layout> },
        MainRoute::BlogPost { id } => html! { <Layout><BlogDetailPage {id} /></Layout> },
        MainRoute::Contact => html! { <Layout><ContactPage /></Layout> },
        MainRoute::Register => html! { <Layout><RegisterPage /></Layout> },
        MainRoute::Login => {
            if gate == Gate::Authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Admin} /> }
            } else {
                html! { <Layout><LoginPage /></Layout> }
            }
        }
        MainRoute::Admin => match gate {
            // No redirect decision while the session is still loading,
            // otherwise a slow bootstrap would bounce a logged-in admin
            // to the login page on every hard refresh.
            Gate::Pending => html! { <Loading /> },
            Gate::Anonymous => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
            Gate::Authenticated => html! { <Layout><AdminPage /></Layout> },
        },
        MainRoute::NotFound => html! { <Layout><NotFoundPage /></Layout> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_compare_by_variant_and_parameters() {
        assert_eq!(MainRoute::Home, MainRoute::Home);
        assert_ne!(MainRoute::Home, MainRoute::Admin);

        let first = MainRoute::BlogPost { id: "b1".to_string() };
        let second = MainRoute::BlogPost { id: "b1".to_string() };
        let third = MainRoute::BlogPost { id: "b2".to_string() };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn blog_post_route_carries_its_id() {
        let route = MainRoute::BlogPost { id: "b1".to_string() };
        match route {
            MainRoute::BlogPost { id } => assert_eq!(id, "b1"),
            _ => panic!("expected a blog post route"),
        }
    }
}
