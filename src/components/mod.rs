pub mod about_section;
pub mod app;
pub mod contact_section;
pub mod hero_section;
pub mod project_card;
pub mod project_drawer;
pub mod projects_section;
pub mod site_footer;
pub mod top_bar;

pub use app::{App, AppProps};
