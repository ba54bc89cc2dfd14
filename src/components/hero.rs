use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::content::{CAFE_NAME, HERO_STATS, TAGLINE};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        padding: 6rem 2rem 4rem;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 4.5rem);
                        color: #78350f;
                        margin: 0;
                    }
                    .hero-tagline {
                        font-size: 1.5rem;
                        color: #b45309;
                        font-weight: 500;
                    }
                    .hero-copy {
                        font-size: 1.125rem;
                        color: #92400e;
                        max-width: 32rem;
                        line-height: 1.7;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin: 2rem 0;
                    }
                    .hero-stats {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        color: #b45309;
                    }
                    .hero-stats .divider {
                        width: 1px;
                        height: 2rem;
                        background: #fcd34d;
                    }
                    .hero-stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .hero-stat .counter-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .hero-visual {
                        display: flex;
                        justify-content: center;
                        font-size: 10rem;
                        position: relative;
                    }
                    .hero-visual .steam {
                        position: absolute;
                        top: -1rem;
                        font-size: 3rem;
                        opacity: 0.4;
                        animation: pulse 4s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 0.2; transform: translateY(0); }
                        50% { opacity: 0.5; transform: translateY(-10px); }
                    }
                "#}
            </style>
            <div class="hero-text">
                <h1>{CAFE_NAME}</h1>
                <p class="hero-tagline">{TAGLINE}</p>
                <p class="hero-copy">
                    {"Temukan kelezatan kopi premium dan suasana hangat yang membuat setiap kunjungan menjadi pengalaman tak terlupakan."}
                </p>
                <div class="hero-actions">
                    <a href="#menu" class="button-primary">{"Order Now"}</a>
                    <a href="#menu" class="button-outline">{"View Menu"}</a>
                </div>
                <div class="hero-stats">
                    {
                        HERO_STATS.iter().enumerate().map(|(index, stat)| html! {
                            <>
                                if index > 0 {
                                    <div class="divider"></div>
                                }
                                <div class="hero-stat">
                                    <AnimatedCounter {stat} />
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            </>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="hero-visual">
                <span class="steam">{"〰"}</span>
                <span>{"☕"}</span>
            </div>
        </section>
    }
}
