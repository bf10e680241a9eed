use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::leads::{subscribe_newsletter, NewsletterForm};
use crate::Route;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/"),
    ("X", "https://x.com/"),
    ("GitHub", "https://github.com/"),
    ("YouTube", "https://www.youtube.com/"),
];

#[derive(Clone, PartialEq)]
enum NewsletterStatus {
    Idle,
    Sending,
    Done(String),
    Failed(String),
}

#[function_component(NewsletterSignup)]
fn newsletter_signup() -> Html {
    let form = use_state(NewsletterForm::default);
    let status = use_state(|| NewsletterStatus::Idle);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_agree = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.agree_privacy = input.checked();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == NewsletterStatus::Sending {
                return;
            }
            if let Err(msg) = form.validate() {
                status.set(NewsletterStatus::Failed(msg));
                return;
            }
            let payload = (*form).clone();
            let form = form.clone();
            let status = status.clone();
            status.set(NewsletterStatus::Sending);
            spawn_local(async move {
                match subscribe_newsletter(&payload).await {
                    Ok(message) => {
                        form.set(NewsletterForm::default());
                        status.set(NewsletterStatus::Done(message));
                    }
                    Err(msg) => {
                        gloo_console::error!("Newsletter signup failed:", msg.clone());
                        status.set(NewsletterStatus::Failed(msg));
                    }
                }
            });
        })
    };

    let sending = *status == NewsletterStatus::Sending;

    html! {
        <form class="newsletter" {onsubmit} novalidate=true>
            <h4>{"Threat briefings in your inbox"}</h4>
            <div class="newsletter-row">
                <input
                    type="email"
                    placeholder="you@company.com"
                    value={form.email.clone()}
                    oninput={on_email}
                    aria-label="Email address"
                />
                <button type="submit" disabled={sending}>
                    { if sending { "..." } else { "Subscribe" } }
                </button>
            </div>
            <label class="newsletter-agree">
                <input type="checkbox" checked={form.agree_privacy} onchange={on_agree} />
                <span>{"I agree to the Privacy Policy"}</span>
            </label>
            {
                match &*status {
                    NewsletterStatus::Done(msg) => html! { <p class="newsletter-ok">{ msg }</p> },
                    NewsletterStatus::Failed(msg) => html! { <p class="newsletter-err">{ msg }</p> },
                    _ => html! {},
                }
            }
        </form>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#home" class="footer-logo">{"ThreatAtlas"}</a>
                    <p>{"Actionable threat intelligence for security teams of every size."}</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{ *name }</a>
                        }) }
                    </div>
                </div>
                <div class="footer-links">
                    <h4>{"Platform"}</h4>
                    <a href="#features">{"Features"}</a>
                    <a href="#products">{"Products"}</a>
                    <a href="#pricing">{"Pricing"}</a>
                    <a href="#demo">{"Request a Demo"}</a>
                </div>
                <div class="footer-links">
                    <h4>{"Contact"}</h4>
                    <a href="mailto:contact@threatatlas.io">{"contact@threatatlas.io"}</a>
                    <a href="tel:+18005550199">{"+1 (800) 555-0199"}</a>
                    <span>{"Austin, TX"}</span>
                </div>
                <NewsletterSignup />
            </div>
            <div class="footer-bottom">
                <span>{ format!("© {} ThreatAtlas. All rights reserved.", year) }</span>
                <div class="footer-legal">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        background: #05060a;
                        padding: 4rem 1.5rem 2rem;
                        color: #9ca3af;
                    }
                    .footer-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1.4fr 1fr 1fr 1.6fr;
                        gap: 2.5rem;
                    }
                    @media (max-width: 1023px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (max-width: 639px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                    .footer-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .footer-social, .footer-legal {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .footer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .site-footer h4 {
                        color: #e5e7eb;
                        margin: 0 0 0.5rem;
                    }
                    .site-footer a {
                        color: #9ca3af;
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: #c4b5fd;
                    }
                    .newsletter-row {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .newsletter-row input {
                        flex: 1;
                        min-width: 0;
                        padding: 0.6rem 0.8rem;
                        border-radius: 0.5rem;
                        border: 1px solid #374151;
                        background: #0b0f19;
                        color: #f3f4f6;
                    }
                    .newsletter-row button {
                        padding: 0.6rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #5e17eb;
                        color: #fff;
                        cursor: pointer;
                    }
                    .newsletter-agree {
                        display: flex;
                        gap: 0.5rem;
                        align-items: center;
                        margin-top: 0.6rem;
                        font-size: 0.85rem;
                    }
                    .newsletter-ok { color: #86efac; }
                    .newsletter-err { color: #fca5a5; }
                    .footer-bottom {
                        max-width: 72rem;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 1rem;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </footer>
    }
}
