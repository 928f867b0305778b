use crate::routes::MainRoute;
use shared::models::Post;
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

const EXCERPT_LEN: usize = 150;

/// First `EXCERPT_LEN` characters of the content, with a trailing
/// ellipsis only when something was actually cut off.
fn excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    if content.chars().nth(EXCERPT_LEN).is_some() {
        excerpt.push_str("...");
    }
    excerpt
}

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let excerpt = excerpt(&post.content);

    html! {
        <div class="card bg-base-100 shadow-md hover:-translate-y-1 transition-transform duration-300">
            <div class="card-body">
                <h2 class="card-title">{ &post.title }</h2>
                <p class="text-sm text-base-content/60">
                    { format!("By {} · {}", post.author, post.created_at.format("%Y-%m-%d")) }
                </p>
                <p class="text-base-content/80">{ excerpt }</p>
                <Link<MainRoute>
                    to={MainRoute::BlogPost { id: post.id.clone() }}
                    classes="link link-primary font-semibold"
                >
                    {"Read more →"}
                </Link<MainRoute>>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_gets_no_ellipsis() {
        assert_eq!(excerpt("A short post."), "A short post.");
    }

    #[test]
    fn content_of_exactly_the_excerpt_length_gets_no_ellipsis() {
        let content = "x".repeat(EXCERPT_LEN);
        assert_eq!(excerpt(&content), content);
    }

    #[test]
    fn long_content_is_truncated_with_an_ellipsis() {
        let content = "y".repeat(EXCERPT_LEN + 1);
        let excerpt = excerpt(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }
}
