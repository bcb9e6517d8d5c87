use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteFooterProps {
    pub owner_name: String,
}

#[function_component]
pub fn SiteFooter(props: &SiteFooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <p>{ format!("© {} {}", year, props.owner_name) }</p>
        </footer>
    }
}
