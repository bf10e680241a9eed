use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const LEGAL_CSS: &str = r#"
    .legal-content {
        max-width: 48rem;
        margin: 0 auto;
        padding: 8rem 1.5rem 4rem;
        line-height: 1.7;
        color: #d1d5db;
    }
    .legal-content h1 {
        color: #fff;
        font-size: 2.25rem;
    }
    .legal-content h2 {
        color: #e5e7eb;
        font-size: 1.3rem;
        margin-top: 2rem;
    }
    .legal-content a {
        color: #a78bfa;
    }
    .legal-links {
        margin-top: 3rem;
        text-align: center;
    }
    .not-found {
        min-height: 70vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 8rem 1.5rem 4rem;
    }
    .not-found h1 {
        font-size: 5rem;
        margin: 0;
    }
"#;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. Data We Collect"}</h2>
                <p>{"When you request a demo or subscribe to our briefings we collect:"}</p>
                <ul>
                    <li>{"Name, company and job title (to prepare a relevant demo)"}</li>
                    <li>{"Business email address and, optionally, a phone number (to contact you)"}</li>
                    <li>{"Country (to route your request to the right regional team)"}</li>
                    <li>{"Your newsletter preference"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Legal Basis for Processing"}</h2>
                <ul>
                    <li>{"Your explicit consent, given through the privacy checkbox on each form"}</li>
                    <li>{"Legitimate interest in responding to sales enquiries you start"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. How We Protect It"}</h2>
                <ul>
                    <li>{"All traffic is served over HTTPS"}</li>
                    <li>{"Lead records are only reachable by authenticated staff"}</li>
                    <li>{"Submission endpoints are rate limited to prevent abuse"}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You can ask us at any time to access, correct or delete the data you submitted, or to unsubscribe from the newsletter."}</p>
            </section>

            <section>
                <h2>{"5. Retention"}</h2>
                <p>{"Demo requests are kept for up to 24 months after our last contact with you. Newsletter subscriptions are kept until you unsubscribe."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{"Email: privacy@threatatlas.io"}</p>
            </section>
            { legal_links() }
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"ThreatAtlas Terms and Conditions"}</h1>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms govern your use of the ThreatAtlas website. By using the site you agree to them."}</p>
            </section>

            <section>
                <h2>{"2. Acceptable Use"}</h2>
                <p>{"You agree not to misuse the site, submit false information through its forms, or attempt to disrupt or probe it without written authorization."}</p>
            </section>

            <section>
                <h2>{"3. Product Information"}</h2>
                <p>{"Descriptions, metrics and pricing shown on this site are informational and may change. Subscriptions are governed by a separate customer agreement."}</p>
            </section>

            <section>
                <h2>{"4. Intellectual Property"}</h2>
                <p>{"All content on the site, including text, graphics, logos and software, belongs to ThreatAtlas or its licensors."}</p>
            </section>

            <section>
                <h2>{"5. Limitation of Liability"}</h2>
                <p>{"The site is provided \"as is\" without warranties of any kind. ThreatAtlas is not liable for damages arising from its use."}</p>
            </section>

            <section>
                <h2>{"6. Changes to Terms"}</h2>
                <p>{"We may update these Terms from time to time. Continued use of the site after a change means you accept the new Terms."}</p>
            </section>

            <section>
                <h2>{"7. Contact Us"}</h2>
                <p>{"Questions about these Terms can be sent to legal@threatatlas.io."}</p>
            </section>
            { legal_links() }
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="gradient-text">{"404"}</h1>
            <p>{"This page slipped past our sensors."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta primary">{"Back to home"}</Link<Route>>
            <style>{ LEGAL_CSS }</style>
        </div>
    }
}
