use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Product {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    image: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        title: "Threat Intelligence",
        subtitle: "Augmented intelligence with ML-powered analysis",
        description: "Search domains, IPs, URLs and hashes for deep analysis. View aggregated analysis results and AI-powered recommendations for rapid triage.",
        image: "/assets/threat-dashboard.png",
    },
    Product {
        title: "Password Intelligence",
        subtitle: "Advanced password security & AI recommendations",
        description: "Analyze password strength locally, generate secure credentials, and get tailored AI recommendations to improve password hygiene across your organization.",
        image: "/assets/password-intel.png",
    },
    Product {
        title: "ATT&CK Matrix",
        subtitle: "MITRE ATT&CK exploration and technique search",
        description: "Search for techniques, groups and software to understand threat actor behavior. Visualize techniques and generate prioritized defense actions.",
        image: "/assets/attack-matrix.png",
    },
    Product {
        title: "Global Maps",
        subtitle: "Real-time global threat origin visualizations",
        description: "Explore live global attack maps, examine origin patterns, and export regional reports. Useful for SOC situational awareness and threat hunting.",
        image: "/assets/global-maps.png",
    },
];

struct Service {
    title: &'static str,
    tier: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    details: &'static str,
    metric: Option<(&'static str, &'static str)>,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Threat Detection",
        tier: "Core",
        description: "Real-time monitoring and AI-driven alerts for proactive threat identification.",
        features: &[
            "24/7 threat monitoring",
            "Anomaly detection using AI",
            "Automated incident response",
        ],
        details: "Our threat detection service continuously monitors your systems, using artificial intelligence to detect unusual behavior, unauthorized access, and potential security breaches in real-time.",
        metric: Some(("TPR", "99.3%")),
    },
    Service {
        title: "Network Protection",
        tier: "Advanced",
        description: "Firewall configuration, intrusion prevention, and secure networking.",
        features: &[
            "Advanced firewall setup",
            "Intrusion prevention systems (IPS)",
            "VPN and network segmentation",
            "Traffic filtering and access control",
        ],
        details: "Our network protection service shields your infrastructure against unauthorized access, malware, and internal vulnerabilities with enterprise-grade firewalls, traffic monitoring and isolation of critical systems.",
        metric: None,
    },
    Service {
        title: "Data Encryption",
        tier: "Essentials",
        description: "End-to-end encryption and secure data storage to protect sensitive information.",
        features: &[
            "AES-256 encryption for all stored data",
            "TLS/SSL encryption for data in transit",
            "Encrypted backups and key management",
            "Compliance with GDPR, HIPAA, and ISO standards",
        ],
        details: "Sensitive information stays protected at every stage. Strong encryption secures data at rest and in transit while keeping you compliant with global data privacy regulations.",
        metric: None,
    },
];

struct Benefit {
    title: &'static str,
    description: &'static str,
}

const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Revolutionize risk management",
        description: "With tailored on-demand, monthly and quarterly threat reports written by analysts specifically for the board and executives.",
    },
    Benefit {
        title: "Enable growth",
        description: "With actionable threat intelligence before expanding into a new region or business line.",
    },
    Benefit {
        title: "Lower the cost",
        description: "Of cybersecurity by maximizing the efficacy of your existing security infrastructure.",
    },
    Benefit {
        title: "Transform security",
        description: "And block malicious network and endpoint activity the moment it is first observed anywhere in the world.",
    },
    Benefit {
        title: "Identify and remove weaknesses",
        description: "Before they are exploited by arming your Red Team with knowledge of threat actors' tools, tactics and processes.",
    },
    Benefit {
        title: "Automate workflows",
        description: "By enriching your SIEM, SOAR, EDR and vulnerability management platforms through TAXII and STIX integrations.",
    },
    Benefit {
        title: "Prioritize vulnerability patching",
        description: "With alerts the moment vulnerabilities in your stack are exploited by actors targeting your industry.",
    },
    Benefit {
        title: "Eliminate false positive alerts",
        description: "And focus on legitimately risky events with indicators of compromise for your threat landscape.",
    },
    Benefit {
        title: "Reduce response time",
        description: "And remove attackers quickly with knowledge of the kill chain in MITRE ATT&CK format.",
    },
];

#[function_component(ThreatProducts)]
pub fn threat_products() -> Html {
    html! {
        <section id="products" class="products-section">
            <h2 class="section-title gradient-text">{"One Platform, Every Lens on the Threat"}</h2>
            { for PRODUCTS.iter().enumerate().map(|(i, p)| html! {
                <Reveal class={classes!("product-row", (i % 2 == 1).then_some("flipped"))}>
                    <div class="product-text">
                        <h3>{ p.title }</h3>
                        <h4>{ p.subtitle }</h4>
                        <p>{ p.description }</p>
                        <a href="#demo" class="product-link">{"See it in a demo →"}</a>
                    </div>
                    <div class="product-image">
                        <img src={p.image} alt={p.title} loading="lazy" />
                    </div>
                </Reveal>
            }) }
            <style>
                {r#"
                    .products-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1rem;
                    }
                    .product-row {
                        display: grid;
                        grid-template-columns: 1fr 1.2fr;
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 5rem;
                    }
                    .product-row.flipped .product-text {
                        order: 2;
                    }
                    @media (max-width: 767px) {
                        .product-row { grid-template-columns: 1fr; }
                        .product-row.flipped .product-text { order: 0; }
                    }
                    .product-text h3 {
                        font-size: 1.6rem;
                        font-weight: 500;
                        margin: 0 0 0.5rem;
                    }
                    .product-text h4 {
                        color: #93c5fd;
                        font-weight: 400;
                        margin: 0 0 1rem;
                    }
                    .product-text p {
                        color: #9ca3af;
                        line-height: 1.7;
                    }
                    .product-link {
                        color: #a78bfa;
                        text-decoration: none;
                    }
                    .product-image img {
                        width: 100%;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                    }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let is_open = use_state(|| false);
    let Some(service) = SERVICES.get(props.index) else {
        return html! {};
    };

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <Reveal class={classes!("service-card", is_open.then_some("open"))} delay_ms={props.index as u32 * 120}>
            <div class="service-header">
                <h3>{ service.title }</h3>
                <span class="service-tier">{ service.tier }</span>
            </div>
            <p class="service-description">{ service.description }</p>
            <ul class="service-features">
                { for service.features.iter().map(|f| html! { <li>{ *f }</li> }) }
            </ul>
            if let Some((label, value)) = service.metric {
                <div class="service-metric">
                    <span class="metric-value gradient-text">{ value }</span>
                    <span class="metric-label">{ label }</span>
                </div>
            }
            <button class="service-toggle" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                { if *is_open { "Hide details" } else { "Show details" } }
            </button>
            if *is_open {
                <p class="service-details">{ service.details }</p>
            }
        </Reveal>
    }
}

#[function_component(CyberServices)]
pub fn cyber_services() -> Html {
    html! {
        <section id="services" class="services-section">
            <h2 class="section-title gradient-text">{"Cybersecurity Services"}</h2>
            <div class="services-grid">
                { for (0..SERVICES.len()).map(|index| html! { <ServiceCard {index} /> }) }
            </div>
            <div class="services-cta">
                <p>{"We build tailored detection & response plans for enterprise environments."}</p>
                <a href="#demo" class="hero-cta primary">{"Contact Sales"}</a>
            </div>
            <style>
                {r#"
                    .services-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 1023px) {
                        .services-grid { grid-template-columns: 1fr; }
                    }
                    .service-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.04);
                    }
                    .service-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .service-header h3 {
                        margin: 0;
                        font-size: 1.15rem;
                    }
                    .service-tier {
                        font-size: 0.75rem;
                        padding: 0.2rem 0.6rem;
                        border-radius: 999px;
                        border: 1px solid rgba(139, 92, 246, 0.5);
                        color: #c4b5fd;
                    }
                    .service-description, .service-details {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .service-features {
                        padding-left: 1.2rem;
                        color: #d1d5db;
                    }
                    .service-metric {
                        display: flex;
                        align-items: baseline;
                        gap: 0.5rem;
                        margin: 1rem 0;
                    }
                    .metric-value {
                        font-size: 1.75rem;
                        font-weight: 800;
                    }
                    .metric-label {
                        color: #9ca3af;
                    }
                    .service-toggle {
                        background: none;
                        border: none;
                        color: #a78bfa;
                        cursor: pointer;
                        padding: 0;
                    }
                    .services-cta {
                        text-align: center;
                        margin-top: 3rem;
                        color: #9ca3af;
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(ThreatBenefits)]
pub fn threat_benefits() -> Html {
    html! {
        <section id="benefits" class="benefits-section">
            <h2 class="section-title">
                {"What you get with the "}
                <span class="gradient-text">{"ThreatAtlas Intelligence Platform"}</span>
            </h2>
            <div class="benefits-grid">
                { for BENEFITS.iter().enumerate().map(|(i, b)| html! {
                    <Reveal class="benefit-card" delay_ms={(i % 3) as u32 * 100}>
                        <h3>{ b.title }</h3>
                        <p>{ b.description }</p>
                    </Reveal>
                }) }
            </div>
            <div class="benefits-cta">
                <a href="#demo" class="hero-cta secondary">{"Talk to our experts"}</a>
            </div>
            <style>
                {r#"
                    .benefits-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1rem;
                    }
                    .benefits-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem 2.5rem;
                    }
                    @media (max-width: 1023px) {
                        .benefits-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 639px) {
                        .benefits-grid { grid-template-columns: 1fr; }
                    }
                    .benefit-card {
                        border-top: 1px solid rgba(99, 102, 241, 0.4);
                    }
                    .benefit-card h3 {
                        font-size: 1.1rem;
                        padding: 0.75rem 0;
                        margin: 0;
                    }
                    .benefit-card p {
                        color: #9ca3af;
                        margin: 0;
                    }
                    .benefits-cta {
                        text-align: center;
                        margin-top: 3rem;
                    }
                "#}
            </style>
        </section>
    }
}
