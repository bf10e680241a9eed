use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::leads::{submit_demo_request, DemoRequestCreated, DemoRequestForm};
use crate::Route;

const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Spain",
    "Mexico",
    "Brazil",
    "India",
    "Australia",
    "Other",
];

/// Which text field an input event writes to.
#[derive(Clone, Copy)]
enum Field {
    FirstName,
    LastName,
    Company,
    JobTitle,
    Phone,
    Email,
}

impl Field {
    fn apply(self, form: &mut DemoRequestForm, value: String) {
        match self {
            Field::FirstName => form.first_name = value,
            Field::LastName => form.last_name = value,
            Field::Company => form.company = value,
            Field::JobTitle => form.job_title = value,
            Field::Phone => form.phone = value,
            Field::Email => form.email = value,
        }
    }
}

#[function_component(DemoForm)]
pub fn demo_form() -> Html {
    let form = use_state(DemoRequestForm::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let created = use_state(|| None::<DemoRequestCreated>);

    let text_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            field.apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_country = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.country = select.value();
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

    let on_subscribe = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.subscribe = input.checked();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let created = created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(msg) = form.validate() {
                error.set(Some(msg));
                return;
            }

            let payload = (*form).clone();
            let form = form.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let created = created.clone();
            submitting.set(true);
            error.set(None);

            spawn_local(async move {
                gloo_console::log!("Submitting demo request for", payload.company.clone());
                match submit_demo_request(&payload).await {
                    Ok(response) => {
                        info!("Demo request accepted: {}", response.reference);
                        form.set(DemoRequestForm::default());
                        created.set(Some(response));
                    }
                    Err(msg) => {
                        warn!("Demo request failed: {}", msg);
                        error.set(Some(msg));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let body = if let Some(done) = (*created).as_ref() {
        let reset = {
            let created = created.clone();
            Callback::from(move |_: MouseEvent| created.set(None))
        };
        html! {
            <div class="demo-success" role="status">
                <h3>{"Thank you!"}</h3>
                <p>{ &done.message }</p>
                <p class="demo-reference">
                    {"Your reference: "}<code>{ &done.reference }</code>
                </p>
                <button class="demo-secondary" onclick={reset}>{"Submit another request"}</button>
            </div>
        }
    } else {
        html! {
            <form class="demo-form" {onsubmit} novalidate=true>
                if let Some(msg) = (*error).as_ref() {
                    <div class="demo-error" role="alert">{ msg }</div>
                }
                <div class="demo-row">
                    <label>
                        {"First name*"}
                        <input type="text" value={form.first_name.clone()} oninput={text_input(Field::FirstName)} required=true />
                    </label>
                    <label>
                        {"Last name*"}
                        <input type="text" value={form.last_name.clone()} oninput={text_input(Field::LastName)} required=true />
                    </label>
                </div>
                <div class="demo-row">
                    <label>
                        {"Company*"}
                        <input type="text" value={form.company.clone()} oninput={text_input(Field::Company)} required=true />
                    </label>
                    <label>
                        {"Job title*"}
                        <input type="text" value={form.job_title.clone()} oninput={text_input(Field::JobTitle)} required=true />
                    </label>
                </div>
                <div class="demo-row">
                    <label>
                        {"Phone"}
                        <input type="tel" value={form.phone.clone()} oninput={text_input(Field::Phone)} />
                    </label>
                    <label>
                        {"Country*"}
                        <select onchange={on_country} required=true>
                            <option value="" selected={form.country.is_empty()} disabled=true>{"Select a country"}</option>
                            { for COUNTRIES.iter().map(|c| html! {
                                <option value={*c} selected={form.country == *c}>{ *c }</option>
                            }) }
                        </select>
                    </label>
                </div>
                <label>
                    {"Business email*"}
                    <input type="email" value={form.email.clone()} oninput={text_input(Field::Email)} required=true />
                </label>
                <label class="demo-check">
                    <input type="checkbox" checked={form.agree_privacy} onchange={on_agree} />
                    <span>
                        {"I agree to the "}
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        {"*"}
                    </span>
                </label>
                <label class="demo-check">
                    <input type="checkbox" checked={form.subscribe} onchange={on_subscribe} />
                    <span>{"Send me threat intelligence updates and product news"}</span>
                </label>
                <button type="submit" class="hero-cta primary demo-submit" disabled={*submitting}>
                    { if *submitting { "Submitting..." } else { "Request Demo" } }
                </button>
            </form>
        }
    };

    html! {
        <section id="demo" class="demo-section">
            <div class="demo-intro">
                <h2 class="section-title gradient-text">{"See ThreatAtlas in Action"}</h2>
                <p class="section-lead">
                    {"Book a personalized walkthrough with our threat intelligence team. We'll tailor the demo to your stack and threat landscape."}
                </p>
            </div>
            <div class="demo-card">
                { body }
            </div>
            <style>
                {r#"
                    .demo-section {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .demo-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(17, 24, 39, 0.7);
                    }
                    .demo-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .demo-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    @media (max-width: 639px) {
                        .demo-row { grid-template-columns: 1fr; }
                    }
                    .demo-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                        font-size: 0.9rem;
                        color: #d1d5db;
                    }
                    .demo-form input[type="text"],
                    .demo-form input[type="tel"],
                    .demo-form input[type="email"],
                    .demo-form select {
                        padding: 0.7rem 0.9rem;
                        border-radius: 0.5rem;
                        border: 1px solid #374151;
                        background: #0b0f19;
                        color: #f3f4f6;
                        font-size: 1rem;
                    }
                    .demo-form label.demo-check {
                        flex-direction: row;
                        align-items: center;
                        gap: 0.6rem;
                    }
                    .demo-check a {
                        color: #a78bfa;
                    }
                    .demo-submit {
                        border: none;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .demo-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .demo-error {
                        padding: 0.8rem 1rem;
                        border-radius: 0.5rem;
                        background: rgba(220, 38, 38, 0.15);
                        border: 1px solid rgba(220, 38, 38, 0.5);
                        color: #fca5a5;
                    }
                    .demo-success {
                        text-align: center;
                    }
                    .demo-reference code {
                        color: #c4b5fd;
                    }
                    .demo-secondary {
                        margin-top: 1rem;
                        background: none;
                        border: 1px solid rgba(139, 92, 246, 0.5);
                        color: #e5e7eb;
                        padding: 0.6rem 1.2rem;
                        border-radius: 999px;
                        cursor: pointer;
                    }
                "#}
            </style>
        </section>
    }
}
