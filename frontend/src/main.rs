use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::{Event, MouseEvent};

mod config;
mod reviews;
mod carousel;
mod leads;
mod components {
    pub mod reveal;
    pub mod hero;
    pub mod features;
    pub mod products;
    pub mod pricing;
    pub mod review_carousel;
    pub mod social_proof;
    pub mod demo_form;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use pages::{
    landing::Landing,
    termsprivacy::{NotFound, PrivacyPolicy, TermsAndConditions},
};

/// Scroll depth after which the nav gets its solid background.
const NAV_SCROLLED_AFTER_PX: f64 = 40.0;
const BODY_LOCK_CLASS: &str = "nav-locked";

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#features", "Features"),
    ("#products", "Products"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Testimonials"),
    ("#team", "Team"),
];

fn set_body_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = if locked {
        classes.add_1(BODY_LOCK_CLASS)
    } else {
        classes.remove_1(BODY_LOCK_CLASS)
    };
}

/// Anchor hrefs only resolve on the landing page, so elsewhere they point back to it.
fn anchor_href(on_landing: bool, anchor: &str) -> String {
    if on_landing {
        anchor.to_string()
    } else {
        format!("/{}", anchor)
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let route = use_route::<Route>();
    let on_landing = matches!(route, Some(Route::Home) | None);

    {
        let menu_open = menu_open.clone();
        use_event_with_window("hashchange", move |_: Event| {
            menu_open.set(false);
        });
    }

    {
        let open = *menu_open;
        use_effect_with_deps(
            move |open| {
                set_body_locked(*open);
                || set_body_locked(false)
            },
            open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let scrolled = scroll_y > NAV_SCROLLED_AFTER_PX;

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"), (*menu_open).then_some("menu-open"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"ThreatAtlas"}
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(anchor, label)| html! {
                        <a href={anchor_href(on_landing, anchor)} class="nav-link" onclick={close_menu.clone()}>
                            { *label }
                        </a>
                    }) }
                    <a href={anchor_href(on_landing, "#demo")} class="nav-cta" onclick={close_menu.clone()}>
                        {"Request Demo"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

const GLOBAL_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #000;
        color: #f3f4f6;
        font-family: 'Inter', system-ui, -apple-system, sans-serif;
    }
    body.nav-locked {
        overflow: hidden;
    }
    section[id], header[id] {
        scroll-margin-top: 5rem;
    }
    .gradient-text {
        background: linear-gradient(90deg, #60a5fa, #818cf8, #c084fc);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .section-title {
        text-align: center;
        font-size: clamp(1.8rem, 4vw, 2.6rem);
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled, .top-nav.menu-open {
        background: rgba(0, 0, 0, 0.85);
        backdrop-filter: blur(10px);
        box-shadow: 0 1px 0 rgba(255, 255, 255, 0.06);
    }
    .nav-content {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.3rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-link {
        color: #d1d5db;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #fff;
    }
    .nav-cta {
        padding: 0.5rem 1rem;
        border-radius: 0.4rem;
        background: #5e17eb;
        color: #fff;
        text-decoration: none;
        font-weight: 600;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.25rem;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #fff;
    }
    @media (max-width: 767px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
            position: fixed;
            top: 4rem;
            left: 0;
            right: 0;
            bottom: 0;
            flex-direction: column;
            padding: 2rem;
            background: rgba(0, 0, 0, 0.95);
        }
        .nav-right.mobile-menu-open {
            display: flex;
        }
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ GLOBAL_CSS }</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
