use crate::api::PortfolioClient;
use crate::components::PostCard;
use shared::models::Post;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(BlogListPage)]
pub fn blog_list_page() -> Html {
    let posts = use_state(Vec::<Post>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let posts = posts.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PortfolioClient::shared();
                match client.list_posts().await {
                    Ok(list) => posts.set(list),
                    Err(_) => error.set(Some(
                        "Could not load blog posts. Please try again later.".to_string(),
                    )),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="text-center text-xl mt-10">{"Loading posts..."}</div> };
    }
    if let Some(message) = &*error {
        return html! { <div class="text-center text-error text-xl mt-10">{message.clone()}</div> };
    }

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-4xl font-bold text-center mb-8">{"My Blog"}</h1>
            {
                if posts.is_empty() {
                    html! { <p class="text-center text-base-content/60">{"No posts yet."}</p> }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for posts.iter().map(|post| html! {
                                <PostCard key={post.id.clone()} post={post.clone()} />
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}
