use yew::prelude::*;

use crate::content::NAV_ITEMS;
use crate::state::progress::bar_style;

#[derive(Properties, PartialEq, Clone)]
pub struct TopBarProps {
    pub owner_name: String,
    pub progress: f64,
    pub active: Option<String>,
    pub on_navigate: Callback<String>,
}

#[function_component]
pub fn TopBar(props: &TopBarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = NAV_ITEMS.iter().map(|item| {
        let is_active = props.active.as_deref() == Some(item.id);
        let onclick = {
            let cb = props.on_navigate.clone();
            let menu_open = menu_open.clone();
            let id = item.id.to_string();
            Callback::from(move |e: MouseEvent| {
                // Let modified clicks open a new tab as usual.
                if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
                    return;
                }
                e.prevent_default();
                menu_open.set(false);
                cb.emit(id.clone());
            })
        };
        html! {
            <li key={item.id}>
                <a
                    class={classes!("nav-link", is_active.then_some("is-active"))}
                    href={format!("#{}", item.id)}
                    aria-current={is_active.then_some("true")}
                    {onclick}
                >{ item.label }</a>
            </li>
        }
    });

    html! {
        <header class="top-bar" id="top-bar">
            <a class="brand" href="#home">{ props.owner_name.clone() }</a>
            <button
                class="nav-toggle"
                type="button"
                aria-controls="site-nav"
                aria-expanded={(*menu_open).to_string()}
                onclick={toggle_menu}
            >{ "Menu" }</button>
            <nav id="site-nav" class={classes!("site-nav", (*menu_open).then_some("is-open"))} aria-label="Sections">
                <ul>{ for links }</ul>
            </nav>
            <div
                id="scroll-progress"
                class="scroll-progress"
                role="progressbar"
                aria-label="Reading progress"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{}", props.progress.round() as u32)}
            >
                <div class="scroll-progress__bar" style={bar_style(props.progress)}></div>
            </div>
        </header>
    }
}
