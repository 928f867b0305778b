use shared::models::Project;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <div class="card bg-base-100 shadow-lg overflow-hidden">
            <figure>
                <img
                    src={project.image_url.clone()}
                    alt={project.title.clone()}
                    class="w-full h-48 object-cover"
                />
            </figure>
            <div class="card-body">
                <h3 class="card-title">{ &project.title }</h3>
                <p class="text-base-content/80">{ &project.description }</p>
                {
                    project.link.as_ref().map_or_else(Html::default, |link| html! {
                        <a
                            href={link.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="link link-primary"
                        >
                            {"View project"}
                        </a>
                    })
                }
            </div>
        </div>
    }
}
