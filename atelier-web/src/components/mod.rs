pub(crate) mod loading;
pub(crate) mod post_card;
pub(crate) mod project_card;

// Re-export components for convenience
pub use post_card::PostCard;
pub use project_card::ProjectCard;
