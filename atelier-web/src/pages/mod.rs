mod admin;
mod blog_detail;
mod blog_list;
mod contact;
mod error;
mod home;
mod login;
mod projects;
mod register;

pub use admin::AdminPage;
pub use blog_detail::BlogDetailPage;
pub use blog_list::BlogListPage;
pub use contact::ContactPage;
pub use error::NotFoundPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
