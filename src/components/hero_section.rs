use yew::prelude::*;

use crate::content::Owner;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    pub owner: Owner,
    pub on_navigate: Callback<String>,
}

#[function_component]
pub fn HeroSection(props: &HeroSectionProps) -> Html {
    let jump = |target: &'static str| {
        let cb = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(target.to_string());
        })
    };
    html! {
        <section id="home" class="section hero">
            <h1 class="hero__name">{ props.owner.name.clone() }</h1>
            <p class="hero__tagline">{ props.owner.tagline.clone() }</p>
            <div class="hero__actions">
                <a class="button" href="#projects" onclick={jump("projects")}>{"View projects"}</a>
                <a class="button button--ghost" href="#contact" onclick={jump("contact")}>{"Get in touch"}</a>
            </div>
        </section>
    }
}
