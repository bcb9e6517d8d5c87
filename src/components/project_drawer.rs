use yew::prelude::*;

pub use crate::content::DRAWER_ID;
use crate::content::Project;

const TITLE_ID: &str = "project-drawer-title";

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectDrawerProps {
    /// `None` keeps the node mounted but hidden.
    pub project: Option<Project>,
    pub on_close: Callback<()>,
    pub node_ref: NodeRef,
}

#[function_component]
pub fn ProjectDrawer(props: &ProjectDrawerProps) -> Html {
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let open = props.project.is_some();
    let body = match &props.project {
        Some(p) => html! {
            <>
                <div class="project-drawer__header">
                    <h3 id={TITLE_ID}>{ p.title.clone() }</h3>
                    <button class="project-drawer__close" type="button" aria-label="Close details" onclick={close}>{"×"}</button>
                </div>
                { for p.details.iter().map(|d| html! { <p>{ d.clone() }</p> }) }
                if !p.links.is_empty() {
                    <ul class="project-drawer__links">
                        { for p.links.iter().map(|l| html! {
                            <li><a href={l.href.clone()} target="_blank" rel="noopener noreferrer">{ l.label.clone() }</a></li>
                        }) }
                    </ul>
                }
            </>
        },
        None => html! {},
    };
    html! {
        <aside
            id={DRAWER_ID}
            ref={props.node_ref.clone()}
            class={classes!("project-drawer", open.then_some("is-open"))}
            hidden={!open}
            aria-labelledby={open.then_some(TITLE_ID)}
        >
            { body }
        </aside>
    }
}
