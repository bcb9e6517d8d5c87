//! Interactive single-page portfolio: scroll progress, scrollspy navigation,
//! a one-time about reveal and a single-open project drawer.

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod model;
pub mod state;
pub mod util;

use std::rc::Rc;

use components::{App, AppProps};
use config::PageConfig;
use content::Portfolio;

pub const MOUNT_ID: &str = "app";

/// Reads config and content from the document and mounts the app on `#app`,
/// or on `<body>` when the markup has no mount point.
pub fn start() {
    let config = PageConfig::load();
    util::set_debug(config.debug);
    util::clog(&format!("boot: {config:?}"));
    let props = AppProps {
        config: Rc::new(config),
        content: Rc::new(Portfolio::load()),
    };
    match dom::document().ok().and_then(|d| d.get_element_by_id(MOUNT_ID)) {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            util::clog("boot: no #app, mounting on body");
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
