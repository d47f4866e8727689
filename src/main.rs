use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod icons;
mod hooks;
mod carousel;
mod newsletter;
mod animations {
    pub mod counter;
    pub mod phase;
}
mod ui {
    pub mod button;
    pub mod card;
    pub mod container;
    pub mod heading;
}
mod sections {
    pub mod about;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod pricing;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use icons::{Icon, IconId};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering not-found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Back to the home page"}
                    </Link<Route>>
                </div>
            }
        }
    }
}

/// Anchor targets for the in-page navigation; an empty id means the top of
/// the page.
const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", ""),
    ("Services", "services"),
    ("About", "about"),
    ("Features", "features"),
    ("Pricing", "pricing"),
];

/// Vertical room the fixed nav occupies when scrolling to an anchor.
const NAV_OFFSET_PX: f64 = 72.0;

fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);

    if id.is_empty() {
        options.set_top(0.0);
        window.scroll_to_with_scroll_to_options(&options);
        return;
    }

    let element = window.document().and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let top = element.get_bounding_client_rect().top()
            + window.scroll_y().unwrap_or(0.0)
            - NAV_OFFSET_PX;
        options.set_top(top);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active_section = use_state_eq(|| "");

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 20.0);

                    // highlight the section currently under the nav line
                    let mut current = "";
                    for &(_, id) in NAV_LINKS.iter().filter(|(_, id)| !id.is_empty()) {
                        if let Some(element) = document.get_element_by_id(id) {
                            let rect = element.get_bounding_client_rect();
                            if rect.top() <= 100.0 && rect.bottom() >= 100.0 {
                                current = id;
                                break;
                            }
                        }
                    }
                    active_section.set(current);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1rem 2rem;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(11, 15, 25, 0.9);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-logo svg { color: #3b82f6; }
                    .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                    .nav-link {
                        color: #cbd5e1;
                        text-decoration: none;
                        font-size: 0.95rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .nav-link:hover, .nav-link.active { color: #60a5fa; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    @media (max-width: 950px) {
                        .burger-menu { display: block; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(11, 15, 25, 0.95);
                            padding: 1.5rem;
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <Icon id={IconId::Shield} class="icon-md" />
                    { config::SITE_NAME }
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(label, id)| {
                        let onclick = {
                            let menu_open = menu_open.clone();
                            let id = *id;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                scroll_to_section(id);
                            })
                        };
                        html! {
                            <button
                                key={*label}
                                class={classes!("nav-link", (*active_section == *id && !id.is_empty()).then(|| "active"))}
                                {onclick}
                            >
                                { *label }
                            </button>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
