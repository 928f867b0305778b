use crate::api::PortfolioClient;
use crate::components::ProjectCard;
use shared::models::Project;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects = use_state(Vec::<Project>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let projects = projects.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PortfolioClient::shared();
                match client.list_projects().await {
                    Ok(list) => projects.set(list),
                    Err(_) => error.set(Some(
                        "Could not load projects. Please try again later.".to_string(),
                    )),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="text-center mt-8">{"Loading..."}</div> };
    }
    if let Some(message) = &*error {
        return html! { <div class="text-center mt-8 text-error">{message.clone()}</div> };
    }

    html! {
        <div>
            <h1 class="text-3xl font-bold text-center my-8">{"My Projects"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for projects.iter().map(|project| html! {
                    <ProjectCard key={project.id.clone()} project={project.clone()} />
                })}
            </div>
        </div>
    }
}
