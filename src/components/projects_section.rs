use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::{
    project_card::ProjectCard,
    project_drawer::{DRAWER_ID, ProjectDrawer},
};
use crate::content::Project;
use crate::dom;
use crate::state::{DrawerAction, DrawerState, drawer::drawer_anchor};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectsSectionProps {
    pub projects: Vec<Project>,
    /// Grid columns as laid out right now (1 below the drawer breakpoint).
    pub columns: usize,
    pub smooth: bool,
}

/// Cards are keyed in their own namespace so no project id can collide
/// with the drawer's key.
pub fn card_key(project_id: &str) -> String {
    format!("card-{project_id}")
}

fn return_focus(id: &str) {
    if let Err(e) = dom::focus_card(id) {
        clog(&format!("drawer: {e}"));
    }
}

#[function_component]
pub fn ProjectsSection(props: &ProjectsSectionProps) -> Html {
    let drawer = use_reducer(DrawerState::default);
    let drawer_ref = use_node_ref();
    let count = props.projects.len();
    let open = drawer.open.filter(|&i| i < count);
    let open_id = open
        .and_then(|i| props.projects.get(i))
        .map(|p| p.id.clone());

    {
        let drawer = drawer.clone();
        use_effect_with(count, move |count| {
            drawer.dispatch(DrawerAction::Retain(*count));
            || ()
        });
    }

    // Escape closes from anywhere on the page while a card is open.
    {
        let drawer = drawer.clone();
        use_effect_with(open_id.clone(), move |open_id| {
            let listener = open_id.clone().and_then(|id| {
                let window = web_sys::window()?;
                Some(EventListener::new(&window, "keydown", move |e| {
                    let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if e.key() == "Escape" || e.key() == "Esc" {
                        drawer.dispatch(DrawerAction::Close);
                        return_focus(&id);
                    }
                }))
            });
            move || drop(listener)
        });
    }

    // Bring the freshly placed drawer into view.
    {
        let drawer_ref = drawer_ref.clone();
        let smooth = props.smooth;
        use_effect_with(open, move |open| {
            if let Some(i) = open {
                clog(&format!("drawer: open {i}"));
                if let Some(el) = drawer_ref.cast::<HtmlElement>() {
                    dom::scroll_into_view_nearest(&el, smooth);
                }
            }
            || ()
        });
    }

    let on_toggle = {
        let drawer = drawer.clone();
        Callback::from(move |i: usize| drawer.dispatch(DrawerAction::Toggle(i)))
    };
    let on_close = {
        let drawer = drawer.clone();
        let open_id = open_id.clone();
        Callback::from(move |_: ()| {
            drawer.dispatch(DrawerAction::Close);
            if let Some(id) = &open_id {
                return_focus(id);
            }
        })
    };

    let anchor = open.map(|i| drawer_anchor(i, props.columns, count));
    // Keyed so the same DOM node moves between rows instead of being rebuilt.
    let mut drawer_node = Some(html! {
        <ProjectDrawer
            key={DRAWER_ID}
            project={open.and_then(|i| props.projects.get(i).cloned())}
            {on_close}
            node_ref={drawer_ref.clone()}
        />
    });
    let mut items: Vec<Html> = Vec::with_capacity(count + 1);
    for (i, p) in props.projects.iter().enumerate() {
        items.push(html! {
            <ProjectCard
                key={card_key(&p.id)}
                project={p.clone()}
                index={i}
                open={open == Some(i)}
                on_toggle={on_toggle.clone()}
            />
        });
        if anchor == Some(i) {
            items.extend(drawer_node.take());
        }
    }
    items.extend(drawer_node);

    html! {
        <section id="projects" class="section projects">
            <h2>{"Projects"}</h2>
            if count == 0 {
                <p class="projects__empty">{"Nothing to show yet."}</p>
            }
            <div class="project-grid">
                { for items }
            </div>
        </section>
    }
}
