use yew::prelude::*;

use crate::content::{ABOUT_ID, About};

#[derive(Properties, PartialEq, Clone)]
pub struct AboutSectionProps {
    pub about: About,
    /// Set once by the reveal gate; the class is never taken away again.
    pub revealed: bool,
}

#[function_component]
pub fn AboutSection(props: &AboutSectionProps) -> Html {
    let about = &props.about;
    html! {
        <section id={ABOUT_ID} class={classes!("section", "reveal", props.revealed.then_some("is-visible"))}>
            <h2>{ about.heading.clone() }</h2>
            { for about.paragraphs.iter().map(|p| html! { <p>{ p.clone() }</p> }) }
            if !about.highlights.is_empty() {
                <ul class="highlights">
                    { for about.highlights.iter().map(|h| html! { <li>{ h.clone() }</li> }) }
                </ul>
            }
        </section>
    }
}
