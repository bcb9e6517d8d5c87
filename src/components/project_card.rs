use yew::prelude::*;

use crate::content::Project;
use super::project_drawer::DRAWER_ID;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
    pub open: bool,
    pub on_toggle: Callback<usize>,
}

#[function_component]
pub fn ProjectCard(props: &ProjectCardProps) -> Html {
    let onclick = {
        let cb = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| cb.emit(index))
    };
    let onkeydown = {
        let cb = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if key == "Enter" || key == " " || key == "Spacebar" {
                e.prevent_default();
                cb.emit(index);
            }
        })
    };
    let p = &props.project;
    html! {
        <article
            class={classes!("project-card", props.open.then_some("is-open"))}
            data-project={p.id.clone()}
            tabindex="0"
            role="button"
            aria-expanded={props.open.to_string()}
            aria-controls={DRAWER_ID}
            {onclick}
            {onkeydown}
        >
            <h3 class="project-card__title">{ p.title.clone() }</h3>
            <p class="project-card__summary">{ p.summary.clone() }</p>
            <div class="project-card__meta">
                if let Some(year) = p.year {
                    <span class="project-card__year">{ year.to_string() }</span>
                }
                <ul class="tags">
                    { for p.tags.iter().map(|t| html! { <li class="tag">{ t.clone() }</li> }) }
                </ul>
            </div>
        </article>
    }
}
