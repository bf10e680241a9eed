use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::reviews::Review;

struct Stat {
    label: &'static str,
    value: &'static str,
}

const STATS: &[Stat] = &[
    Stat { label: "Companies Protected", value: "400+" },
    Stat { label: "Threats Neutralized", value: "30,000+" },
    Stat { label: "Credential Breaches Detected", value: "2M+" },
];

struct Recognition {
    icon: &'static str,
    label: &'static str,
}

const RECOGNITIONS: &[Recognition] = &[
    Recognition { icon: "/assets/award.svg", label: "Cybersecurity Excellence Award" },
    Recognition { icon: "/assets/community.svg", label: "Top 50 InfoSec Tools" },
    Recognition { icon: "/assets/tools.svg", label: "Security Community Pick" },
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
    bio: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Liam Carter",
        role: "Senior Software Engineer",
        photo: "/assets/team/liam.jpg",
        bio: "Over 12 years of experience in backend development and scalable cloud infrastructure.",
    },
    TeamMember {
        name: "Sophia Bennett",
        role: "Product Manager",
        photo: "/assets/team/sophia.jpg",
        bio: "Strategic thinker with a strong UX background, aligning product vision with business goals.",
    },
    TeamMember {
        name: "Noah Reyes",
        role: "Threat Intelligence Analyst",
        photo: "/assets/team/noah.jpg",
        bio: "Former incident responder who tracks ransomware crews and turns their tradecraft into detections.",
    },
];

fn recognitions() -> Html {
    html! {
        <div class="recognitions">
            { for RECOGNITIONS.iter().map(|r| html! {
                <div class="recognition">
                    <img src={r.icon} alt="" loading="lazy" />
                    <span>{ r.label }</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadersReviewProps {
    pub featured: &'static [Review],
}

#[function_component(LeadersReview)]
pub fn leaders_review(props: &LeadersReviewProps) -> Html {
    html! {
        <section id="leaders-review" class="leaders-section">
            <h2 class="section-title">
                {"Trusted by "}<span class="gradient-text">{"Security"}</span>{" Leaders Worldwide"}
            </h2>
            <div class="leaders-grid">
                { for props.featured.iter().map(|r| html! {
                    <Reveal class="leader-card" key={r.id}>
                        <div class="leader-header">
                            <div class="review-avatar">
                                { r.author.split_whitespace().filter_map(|p| p.chars().next()).take(2).collect::<String>() }
                            </div>
                            <div>
                                <div class="leader-name">{ r.author }</div>
                                <div class="leader-title">{ r.attribution() }</div>
                            </div>
                        </div>
                        <blockquote>{"“"}{ r.quote_text }{"”"}</blockquote>
                        <div class="leader-underline"></div>
                    </Reveal>
                }) }
            </div>
            { recognitions() }
            <style>
                {r#"
                    .leaders-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 2rem 1.5rem 4rem;
                    }
                    .leaders-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    @media (max-width: 767px) {
                        .leaders-grid { grid-template-columns: 1fr; }
                    }
                    .leader-card {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #27272a;
                        background: #0b0b0b;
                        overflow: hidden;
                    }
                    .leader-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .leader-name {
                        font-weight: 600;
                    }
                    .leader-title {
                        font-size: 0.8rem;
                        color: #a1a1aa;
                    }
                    .leader-card blockquote {
                        margin: 0;
                        font-size: 1.15rem;
                        line-height: 1.7;
                        color: #e4e4e7;
                    }
                    .leader-underline {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 0;
                        height: 4px;
                        background: linear-gradient(90deg, #60a5fa, #c084fc);
                    }
                    .recognitions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 3rem;
                    }
                    .recognition {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        max-width: 10rem;
                        text-align: center;
                        font-size: 0.85rem;
                        color: #d4d4d8;
                    }
                    .recognition img {
                        height: 3rem;
                        opacity: 0.9;
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    html! {
        <section id="social-proof" class="social-proof-section">
            <Reveal>
                <h2 class="section-title gradient-text">{"Security Teams Count on ThreatAtlas"}</h2>
            </Reveal>
            <div class="stats">
                { for STATS.iter().enumerate().map(|(i, s)| html! {
                    <Reveal class="stat-card" delay_ms={i as u32 * 120}>
                        <div class="stat-value gradient-text">{ s.value }</div>
                        <div class="stat-label">{ s.label }</div>
                    </Reveal>
                }) }
            </div>
            { recognitions() }
            <style>
                {r#"
                    .social-proof-section {
                        max-width: 72rem;
                        margin: 4rem auto 0;
                        padding: 6rem 1.5rem;
                    }
                    .stats {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .stat-card {
                        min-width: 170px;
                        padding: 1.5rem 2rem;
                        text-align: center;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.04);
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 800;
                    }
                    .stat-label {
                        color: #d1d5db;
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id="team" class="team-section">
            <h2 class="section-title gradient-text">{"Meet Our Team"}</h2>
            <p class="section-lead">
                {"A team of dedicated professionals with expertise in software engineering, product and threat research."}
            </p>
            <div class="team-grid">
                { for TEAM.iter().enumerate().map(|(i, m)| html! {
                    <Reveal class="team-card" delay_ms={i as u32 * 100}>
                        <img src={m.photo} alt={m.name} loading="lazy" />
                        <h3>{ m.name }</h3>
                        <p class="team-role">{ m.role }</p>
                        <p class="team-bio">{ m.bio }</p>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                    .team-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }
                    .team-card {
                        padding: 2rem;
                        text-align: center;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(17, 24, 39, 0.6);
                    }
                    .team-card img {
                        width: 7rem;
                        height: 7rem;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 2px solid rgba(99, 102, 241, 0.5);
                    }
                    .team-role {
                        color: #93c5fd;
                    }
                    .team-bio {
                        color: #9ca3af;
                        font-size: 0.95rem;
                    }
                "#}
            </style>
        </section>
    }
}
