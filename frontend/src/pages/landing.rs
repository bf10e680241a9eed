use yew::prelude::*;

use crate::components::demo_form::DemoForm;
use crate::components::features::{Advantages, Features};
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::pricing::PricingPlans;
use crate::components::products::{CyberServices, ThreatBenefits, ThreatProducts};
use crate::components::reveal::Reveal;
use crate::components::review_carousel::ReviewCarousel;
use crate::components::social_proof::{LeadersReview, SocialProof, Team};
use crate::reviews::REVIEWS;

/// Number of reviews promoted to the leaders section.
const FEATURED_REVIEWS: usize = 2;

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <Reveal>
                <h2 class="section-title gradient-text">{"What Our Customers Say"}</h2>
                <p class="section-lead">
                    {"Security teams across finance, healthcare and the public sector rely on ThreatAtlas every day."}
                </p>
            </Reveal>
            <ReviewCarousel reviews={REVIEWS} />
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let featured = &REVIEWS[..FEATURED_REVIEWS.min(REVIEWS.len())];

    html! {
        <div class="landing-page">
            <Hero />
            <Features />
            <Advantages />
            <ThreatProducts />
            <CyberServices />
            <ThreatBenefits />
            <PricingPlans />
            <Testimonials />
            <LeadersReview {featured} />
            <Team />
            <DemoForm />
            <SocialProof />
            <Footer />
            <style>
                {r#"
                    .landing-page {
                        overflow-x: hidden;
                    }
                    .section-lead {
                        text-align: center;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        color: #9ca3af;
                        font-size: 1.1rem;
                        line-height: 1.6;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .reveal.slide-left {
                        transform: translateX(-40px);
                    }
                    .reveal.slide-right {
                        transform: translateX(40px);
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal, .reveal.visible {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                    }
                    .testimonials-section {
                        padding: 6rem 1rem;
                    }
                "#}
            </style>
        </div>
    }
}
