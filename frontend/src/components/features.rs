use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🎯",
        title: "IOC Reconnaissance Engine",
        desc: "Transform suspicious indicators into actionable intelligence in seconds.",
    },
    Feature {
        icon: "🛡️",
        title: "Malicious IOC Detection",
        desc: "Stop chasing false positives with our advanced validation engine.",
    },
    Feature {
        icon: "🔍",
        title: "Dark Web Intelligence",
        desc: "Get early warnings of threats & compromised credentials before they strike.",
    },
    Feature {
        icon: "🧭",
        title: "MITRE ATT&CK Mapping",
        desc: "Understand how attackers operate and identify gaps in your security posture.",
    },
    Feature {
        icon: "⚡",
        title: "APT Group Intelligence Hub",
        desc: "Track adversaries targeting your industry with detailed profiles and analysis.",
    },
    Feature {
        icon: "🔑",
        title: "Password Breach Intelligence",
        desc: "Protect your digital identity by monitoring for exposed credentials proactively.",
    },
];

struct Advantage {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    image: &'static str,
}

const ADVANTAGES: &[Advantage] = &[
    Advantage {
        icon: "🌐",
        title: "Unified Platform",
        desc: "All intelligence capabilities in one interface, reducing tool fatigue and improving workflow efficiency.",
        image: "/assets/enterprise-security.jpeg",
    },
    Advantage {
        icon: "🖥️",
        title: "Real-time Analysis",
        desc: "Get instant results with deep historical context to make faster, more informed security decisions.",
        image: "/assets/network-security.jpeg",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="features-grid">
                { for FEATURES.iter().enumerate().map(|(i, f)| html! {
                    <Reveal class="feature-card" delay_ms={i as u32 * 80}>
                        <div class="feature-icon">{ f.icon }</div>
                        <h4>{ f.title }</h4>
                        <p>{ f.desc }</p>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                    .features-section {
                        padding: 5rem 1rem;
                    }
                    .features-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 1023px) {
                        .features-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 639px) {
                        .features-grid { grid-template-columns: 1fr; }
                    }
                    .feature-card {
                        background: rgba(17, 24, 39, 0.5);
                        border: 1px solid #1f2937;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        transition: box-shadow 0.3s ease;
                    }
                    .feature-card:hover {
                        box-shadow: 0 10px 30px rgba(59, 130, 246, 0.2);
                    }
                    .feature-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card h4 {
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem;
                    }
                    .feature-card p {
                        color: #9ca3af;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(Advantages)]
pub fn advantages() -> Html {
    html! {
        <section id="advantages" class="advantages-section">
            { for ADVANTAGES.iter().enumerate().map(|(i, a)| html! {
                <div class={classes!("advantage-row", (i % 2 == 1).then_some("flipped"))}>
                    <Reveal class="advantage-image slide-left">
                        <img src={a.image} alt={a.title} loading="lazy" />
                    </Reveal>
                    <Reveal class="advantage-text slide-right">
                        <div class="advantage-icon">{ a.icon }</div>
                        <h3>{ a.title }</h3>
                        <p>{ a.desc }</p>
                    </Reveal>
                </div>
            }) }
            <style>
                {r#"
                    .advantages-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 5rem;
                    }
                    .advantage-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .advantage-row.flipped .advantage-image {
                        order: 2;
                    }
                    @media (max-width: 767px) {
                        .advantage-row { grid-template-columns: 1fr; }
                        .advantage-row.flipped .advantage-image { order: 0; }
                    }
                    .advantage-image {
                        height: 20rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .advantage-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .advantage-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                        filter: drop-shadow(0 0 6px rgba(99, 102, 241, 0.6));
                    }
                    .advantage-text h3 {
                        font-size: 1.9rem;
                        margin: 0 0 1rem;
                    }
                    .advantage-text p {
                        font-size: 1.1rem;
                        color: #9ca3af;
                    }
                "#}
            </style>
        </section>
    }
}
