use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero" id="home">
            <div class="hero-background" aria-hidden="true"></div>
            <div class="hero-overlay" aria-hidden="true"></div>
            <div class="cyber-grid" aria-hidden="true"></div>
            <div class="hero-content">
                <h1 class="hero-title hero-item" style="animation-delay: 0ms;">{"ThreatAtlas Pro"}</h1>
                <h2 class="hero-subtitle gradient-text hero-item" style="animation-delay: 120ms;">
                    {"Actionable Threat Intelligence, Simplified."}
                </h2>
                <p class="hero-description hero-item" style="animation-delay: 240ms;">
                    {"Empower your security team to detect, analyze, and respond to cyber threats before they impact your organization."}
                </p>
                <div class="hero-cta-group hero-item" style="animation-delay: 360ms;">
                    <a href="#demo" class="hero-cta primary">{"Request a Demo"}</a>
                    <a href="#features" class="hero-cta secondary">{"Learn More"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                        padding: 0 1rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-image: url('/assets/hero.jpg');
                        background-size: cover;
                        background-position: center;
                        animation: hero-drift 24s linear infinite;
                        will-change: transform;
                    }
                    @keyframes hero-drift {
                        0% { transform: scale(1.04) rotate(0deg); }
                        33% { transform: scale(1) rotate(0.2deg); }
                        66% { transform: scale(1.02) rotate(-0.2deg); }
                        100% { transform: scale(1.04) rotate(0deg); }
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0,0,0,0.6), rgba(0,0,0,0.25), rgba(0,0,0,0.7));
                    }
                    .cyber-grid {
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(rgba(94, 23, 235, 0.12) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(94, 23, 235, 0.12) 1px, transparent 1px);
                        background-size: 48px 48px;
                        mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                    }
                    .hero-item {
                        opacity: 0;
                        animation: hero-rise 0.6s ease-out forwards;
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(14px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 7vw, 4.5rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        text-shadow: 0 4px 24px rgba(0, 0, 0, 0.6);
                    }
                    .hero-subtitle {
                        font-size: clamp(1.5rem, 3vw, 2rem);
                        margin-bottom: 2rem;
                    }
                    .hero-description {
                        font-size: 1.2rem;
                        color: #e5e7eb;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.7;
                    }
                    .hero-cta-group {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 0.75rem 1.25rem;
                        border-radius: 0.4rem;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta.primary {
                        background: #5e17eb;
                        box-shadow: 0 10px 30px rgba(94, 23, 235, 0.35);
                    }
                    .hero-cta.secondary {
                        border: 2px solid rgba(88, 28, 135, 0.4);
                    }
                "#}
            </style>
        </header>
    }
}
