use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::config;
use crate::content::{ABOUT_STATS, CAFE_NAME, FEATURES};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config::CARD_THRESHOLD, props.delay_ms);

    html! {
        <div ref={node} class={classes!("feature-card", "reveal", revealed.then(|| "revealed"))}>
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        padding: 5rem 2rem;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .feature-card {
                        background: rgba(255, 255, 255, 0.7);
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #fef3c7;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        text-align: center;
                    }
                    .feature-card:hover {
                        transform: scale(1.05);
                    }
                    .feature-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card h3 {
                        color: #78350f;
                    }
                    .feature-card p {
                        color: #92400e;
                        line-height: 1.6;
                    }
                    .stats-strip {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                        gap: 2rem;
                        background: rgba(255, 255, 255, 0.5);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .stats-strip .counter-value {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #78350f;
                    }
                    .stats-strip p {
                        color: #b45309;
                        font-weight: 500;
                    }
                "#}
            </style>
            <div class="section-header">
                <h2>{format!("Tentang {}", CAFE_NAME)}</h2>
                <p>
                    {"Lebih dari sekedar kedai kopi, kami adalah tempat dimana cerita-cerita indah dimulai. "}
                    {"Setiap cangkir yang kami sajikan dibuat dengan dedikasi dan cinta untuk memberikan pengalaman terbaik."}
                </p>
            </div>

            <div class="features-grid">
                {
                    FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard
                            icon={feature.icon}
                            title={feature.title}
                            description={feature.description}
                            delay_ms={index as u32 * config::FEATURE_STAGGER_MS}
                        />
                    }).collect::<Html>()
                }
            </div>

            <div class="stats-strip">
                {
                    ABOUT_STATS.iter().map(|stat| html! {
                        <div>
                            <AnimatedCounter {stat} />
                            <p>{stat.label}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
