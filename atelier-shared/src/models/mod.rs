pub mod auth;
pub mod contact;
pub mod post;
pub mod project;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};
pub use contact::{ContactRequest, MessageResponse};
pub use post::{Comment, CommentRequest, Post};
pub use project::Project;
