use yew::prelude::*;

use crate::content::Contact;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactSectionProps {
    pub contact: Contact,
}

#[function_component]
pub fn ContactSection(props: &ContactSectionProps) -> Html {
    let c = &props.contact;
    html! {
        <section id="contact" class="section contact">
            <h2>{"Contact"}</h2>
            if !c.blurb.is_empty() {
                <p>{ c.blurb.clone() }</p>
            }
            if !c.email.is_empty() {
                <p><a class="contact__email" href={format!("mailto:{}", c.email)}>{ c.email.clone() }</a></p>
            }
            <ul class="contact__links">
                { for c.links.iter().map(|l| html! {
                    <li><a href={l.href.clone()} target="_blank" rel="noopener noreferrer">{ l.label.clone() }</a></li>
                }) }
            </ul>
        </section>
    }
}
