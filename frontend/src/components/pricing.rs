use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Plan {
    name: &'static str,
    price: &'static str,
    frequency: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$29",
        frequency: "per month",
        description: "Ideal for small teams and startups.",
        features: &[
            "Up to 5 users",
            "Basic threat detection",
            "Email support",
            "Standard integrations",
        ],
        popular: false,
    },
    Plan {
        name: "Professional",
        price: "$79",
        frequency: "per month",
        description: "Perfect for growing security teams.",
        features: &[
            "Up to 25 users",
            "Real-time threat intelligence",
            "Priority email & chat support",
            "All integrations included",
            "Customizable dashboards",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Contact Us",
        frequency: "",
        description: "Tailored solutions for large organizations.",
        features: &[
            "Unlimited users",
            "Dedicated account manager",
            "Custom integrations & SLAs",
            "Advanced analytics & reporting",
            "On-site training & support",
        ],
        popular: false,
    },
];

#[function_component(PricingPlans)]
pub fn pricing_plans() -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <h2 class="section-title gradient-text">{"Transparent Pricing & Plans"}</h2>
            <p class="section-lead">
                {"Choose the plan that fits your organization's needs. Scalable, flexible, and transparent pricing to maximize your security ROI."}
            </p>
            <div class="pricing-grid">
                { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                    <Reveal class={classes!("pricing-card", plan.popular.then_some("popular"))} delay_ms={i as u32 * 120}>
                        if plan.popular {
                            <div class="popular-badge">{"Popular"}</div>
                        }
                        <h3>{ plan.name }</h3>
                        <div class="price">
                            <span class="amount">{ plan.price }</span>
                            if !plan.frequency.is_empty() {
                                <span class="period">{ plan.frequency }</span>
                            }
                        </div>
                        <p class="plan-description">{ plan.description }</p>
                        <ul>
                            { for plan.features.iter().map(|f| html! { <li>{"✓ "}{ *f }</li> }) }
                        </ul>
                        <a href="#demo" class="plan-cta">
                            { if plan.price == "Contact Us" { "Talk to Sales" } else { "Get Started" } }
                        </a>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                    .pricing-section {
                        padding: 7rem 1rem;
                        background: repeating-linear-gradient(-30deg, rgba(99,102,241,0.04) 0px, rgba(99,102,241,0.04) 8px, transparent 8px, transparent 26px);
                    }
                    .pricing-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 1023px) {
                        .pricing-grid { grid-template-columns: 1fr; max-width: 28rem; }
                    }
                    .pricing-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        min-height: 520px;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.04);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .pricing-card:hover {
                        transform: translateY(-6px);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                    }
                    .pricing-card.popular {
                        border-color: rgba(139, 92, 246, 0.6);
                    }
                    .popular-badge {
                        position: absolute;
                        top: -0.8rem;
                        right: 1.5rem;
                        padding: 0.2rem 0.8rem;
                        border-radius: 999px;
                        font-size: 0.8rem;
                        background: linear-gradient(90deg, #3b82f6, #6366f1, #8b5cf6);
                    }
                    .price .amount {
                        font-size: 2.5rem;
                        font-weight: 800;
                    }
                    .price .period {
                        margin-left: 0.5rem;
                        color: #9ca3af;
                    }
                    .plan-description {
                        color: #9ca3af;
                    }
                    .pricing-card ul {
                        list-style: none;
                        padding: 0;
                        flex: 1;
                        line-height: 2;
                    }
                    .plan-cta {
                        display: block;
                        text-align: center;
                        padding: 0.8rem;
                        border-radius: 999px;
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                        background: linear-gradient(90deg, #3b82f6, #6366f1, #8b5cf6);
                    }
                "#}
            </style>
        </section>
    }
}
