use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use super::{
    about_section::AboutSection, contact_section::ContactSection, hero_section::HeroSection,
    projects_section::ProjectsSection, site_footer::SiteFooter, top_bar::TopBar,
};
use crate::config::PageConfig;
use crate::content::{ABOUT_ID, Portfolio, section_ids};
use crate::dom;
use crate::model::{PageAction, PageState};
use crate::state::FrameGate;
use crate::util::{clog, now_ms};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<PageConfig>,
    pub content: Rc<Portfolio>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let page = use_reducer({
        let config = props.config.clone();
        move || PageState::new(config)
    });
    let reduced_motion = *use_memo((), |_| dom::prefers_reduced_motion());

    {
        let page = page.clone();
        use_effect_with(reduced_motion, move |reduced| {
            // Nothing to animate; show the about section as-is.
            if *reduced {
                page.dispatch(PageAction::RevealNow);
            }
            || ()
        });
    }

    // Scroll sampler: scroll/resize/load all funnel through one animation frame.
    {
        let page = page.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let gate = Rc::new(FrameGate::default());
            let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
            let ids = section_ids();
            let warned_missing = Cell::new(false);

            let frame_cb = {
                let gate = gate.clone();
                let raf_id = raf_id.clone();
                Closure::wrap(Box::new(move || {
                    gate.complete();
                    raf_id.set(None);
                    match dom::sample(&ids, ABOUT_ID) {
                        Ok(metrics) => {
                            if metrics.sections.len() < ids.len() && !warned_missing.replace(true) {
                                clog(&format!(
                                    "scrollspy: {} of {} sections present",
                                    metrics.sections.len(),
                                    ids.len()
                                ));
                            }
                            page.dispatch(PageAction::Sample {
                                metrics,
                                now_ms: now_ms(),
                            });
                        }
                        Err(e) => clog(&format!("sample skipped: {e}")),
                    }
                }) as Box<dyn FnMut()>)
            };

            // Shared by the listeners and the initial sample below.
            let request_frame: Rc<dyn Fn()> = {
                let window = window.clone();
                let gate = gate.clone();
                let raf_id = raf_id.clone();
                Rc::new(move || {
                    let Some(window) = &window else { return };
                    let frame: &js_sys::Function = frame_cb.as_ref().unchecked_ref();
                    if let Some(id) = gate.request(|| window.request_animation_frame(frame)) {
                        raf_id.set(Some(id));
                    }
                })
            };

            let schedule_cb = {
                let request_frame = request_frame.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| request_frame())
                    as Box<dyn FnMut(_)>)
            };

            if let Some(window) = &window {
                let passive = AddEventListenerOptions::new();
                passive.set_passive(true);
                let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    schedule_cb.as_ref().unchecked_ref(),
                    &passive,
                );
                let _ = window
                    .add_event_listener_with_callback("resize", schedule_cb.as_ref().unchecked_ref());
                let _ = window
                    .add_event_listener_with_callback("load", schedule_cb.as_ref().unchecked_ref());
                // Initial sample so a page opened mid-scroll (reload, #fragment) is right away.
                request_frame();
            } else {
                clog("no window; scroll tracking disabled");
            }

            // Cleanup
            move || {
                if let Some(window) = &window {
                    for kind in ["scroll", "resize", "load"] {
                        let _ = window.remove_event_listener_with_callback(
                            kind,
                            schedule_cb.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(id) = raf_id.take() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                drop(schedule_cb);
                drop(request_frame);
            }
        });
    }

    let on_navigate = {
        let page = page.clone();
        let offset = props.config.spy_offset_px;
        Callback::from(move |id: String| {
            if let Err(e) = dom::scroll_to_section(&id, offset, !reduced_motion) {
                clog(&format!("navigate: {e}"));
                return;
            }
            page.dispatch(PageAction::NavClicked { id, now_ms: now_ms() });
        })
    };

    let content = &props.content;
    html! {
        <>
            <TopBar
                owner_name={content.owner.name.clone()}
                progress={page.progress}
                active={page.spy.active.clone()}
                on_navigate={on_navigate.clone()}
            />
            <main id="main">
                <HeroSection owner={content.owner.clone()} on_navigate={on_navigate.clone()} />
                <AboutSection about={content.about.clone()} revealed={page.about.played} />
                <ProjectsSection
                    projects={content.projects.clone()}
                    columns={page.columns}
                    smooth={!reduced_motion}
                />
                <ContactSection contact={content.contact.clone()} />
            </main>
            <SiteFooter owner_name={content.owner.name.clone()} />
        </>
    }
}
