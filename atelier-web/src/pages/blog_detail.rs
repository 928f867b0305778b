use crate::api::PortfolioClient;
use shared::models::{CommentRequest, Post};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BlogDetailProps {
    pub id: String,
}

#[function_component(BlogDetailPage)]
pub fn blog_detail_page(props: &BlogDetailProps) -> Html {
    let post = use_state(|| None::<Post>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    let commenter = use_state(String::new);
    let comment_text = use_state(String::new);
    let submitting = use_state(|| false);
    let comment_notice = use_state(|| None::<String>);

    {
        let post = post.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                let client = PortfolioClient::shared();
                match client.get_post(&id).await {
                    Ok(fetched) => {
                        post.set(Some(fetched));
                        error.set(None);
                    }
                    Err(_) => error.set(Some("Could not load this post.".to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_comment_submit = {
        let id = props.id.clone();
        let post = post.clone();
        let commenter = commenter.clone();
        let comment_text = comment_text.clone();
        let submitting = submitting.clone();
        let comment_notice = comment_notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let user = (*commenter).trim().to_string();
            let text = (*comment_text).trim().to_string();
            if user.is_empty() || text.is_empty() {
                comment_notice.set(Some("Name and comment are both required.".to_string()));
                return;
            }

            submitting.set(true);
            comment_notice.set(None);
            let id = id.clone();
            let post = post.clone();
            let commenter = commenter.clone();
            let comment_text = comment_text.clone();
            let submitting = submitting.clone();
            let comment_notice = comment_notice.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                let request = CommentRequest { user, text };
                match client.add_comment(&id, &request).await {
                    Ok(Some(comments)) => {
                        if let Some(current) = (*post).clone() {
                            post.set(Some(Post { comments, ..current }));
                        }
                        commenter.set(String::new());
                        comment_text.set(String::new());
                    }
                    Ok(None) => {
                        // The backend acknowledged without returning the
                        // updated list; pull the whole post again.
                        if let Ok(fetched) = client.get_post(&id).await {
                            post.set(Some(fetched));
                        }
                        commenter.set(String::new());
                        comment_text.set(String::new());
                    }
                    Err(_) => comment_notice
                        .set(Some("Could not post your comment. Please try again.".to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_commenter_input = {
        let commenter = commenter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                commenter.set(input.value());
            }
        })
    };

    let on_text_input = {
        let comment_text = comment_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                comment_text.set(input.value());
            }
        })
    };

    if *loading {
        return html! { <div class="text-center mt-10">{"Loading..."}</div> };
    }
    if let Some(message) = &*error {
        return html! { <div class="text-center text-error mt-10">{message.clone()}</div> };
    }
    let Some(post_value) = (*post).clone() else {
        return html! { <div class="text-center mt-10">{"Post not found."}</div> };
    };

    let is_busy = *submitting;

    html! {
        <div class="max-w-4xl mx-auto p-4 md:p-8">
            <article class="bg-base-100 p-8 rounded-lg shadow-md mb-8">
                <h1 class="text-4xl font-extrabold mb-4">{ &post_value.title }</h1>
                <p class="text-base-content/60 mb-8 pb-4 border-b border-base-300">
                    { format!(
                        "By {} · published {}",
                        post_value.author,
                        post_value.created_at.format("%Y-%m-%d"),
                    )}
                </p>
                <div class="prose max-w-none leading-relaxed whitespace-pre-line">
                    { &post_value.content }
                </div>
            </article>

            <section class="bg-base-100 p-8 rounded-lg shadow-md">
                <h2 class="text-2xl font-bold mb-6">
                    { format!("Comments ({})", post_value.comments.len()) }
                </h2>

                <div class="space-y-6 mb-10">
                    {
                        if post_value.comments.is_empty() {
                            html! { <p class="text-base-content/60 italic">{"No comments yet. Be the first!"}</p> }
                        } else {
                            html! {
                                { for post_value.comments.iter().map(|comment| html! {
                                    <div class="bg-base-200 p-4 rounded-lg">
                                        <div class="flex justify-between items-center mb-2">
                                            <p class="font-bold">{ &comment.user }</p>
                                            <p class="text-xs text-base-content/50">
                                                { comment.created_at.format("%Y-%m-%d %H:%M").to_string() }
                                            </p>
                                        </div>
                                        <p>{ &comment.text }</p>
                                    </div>
                                })}
                            }
                        }
                    }
                </div>

                <form onsubmit={on_comment_submit} class="bg-base-200 p-6 rounded-lg">
                    <h3 class="text-lg font-semibold mb-4">{"Leave a comment"}</h3>
                    if let Some(message) = &*comment_notice {
                        <div class="alert alert-error mb-4">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control mb-4">
                        <label class="label" for="commenter">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="commenter"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*commenter).clone()}
                            oninput={on_commenter_input}
                        />
                    </div>
                    <div class="form-control mb-4">
                        <label class="label" for="comment-text">
                            <span class="label-text">{"Comment"}</span>
                        </label>
                        <textarea
                            id="comment-text"
                            class="textarea textarea-bordered"
                            rows="4"
                            required=true
                            value={(*comment_text).clone()}
                            oninput={on_text_input}
                        />
                    </div>
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        { if is_busy { "Posting..." } else { "Post comment" } }
                    </button>
                </form>
            </section>
        </div>
    }
}
