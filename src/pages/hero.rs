use yew::prelude::*;

use crate::config;

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        display: flex;
        align-items: flex-end;
        justify-content: center;
        width: 100%;
        height: 100dvh;
        overflow: hidden;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        z-index: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        z-index: 10;
        background: #000;
        opacity: 0.5;
    }
    .hero-content {
        z-index: 20;
        margin: 0 14rem 6rem;
        color: #f3f4f6;
    }
    .hero-statement {
        margin-bottom: 7rem;
        font-family: var(--font-serif);
        font-size: 1.75rem;
        font-weight: 300;
        line-height: 2.25rem;
        letter-spacing: 0.025em;
        text-align: justify;
    }
    .hero-more {
        font-size: 1.25rem;
        line-height: 1;
        text-align: center;
    }
    @media (max-width: 768px) {
        .hero-content {
            margin: 0 1.5rem 4rem;
        }
        .hero-statement {
            margin-bottom: 3rem;
            font-size: 1.25rem;
            line-height: 1.75rem;
        }
    }
"#;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-content">
                <h1 class="hero-statement">
                    {"I am a purpose-driven visual creator. I design experiences and visual narratives that merge aesthetics and sustainability, guided by a commitment to social, environmental, and cultural impact, with the goal of transforming our connection with fashion."}
                </h1>
                <div class="hero-more text-with-cursor active-cursor">{"more about me"}</div>
            </div>
            <video
                class="hero-video"
                autoplay=true
                loop=true
                muted=true
                playsinline=true
                preload="auto"
                aria-label="Artistic background video"
            >
                <source
                    src={config::asset("/videos/mf-hero-video-mobile.mp4")}
                    type="video/mp4"
                    media="(max-width: 768px)"
                />
                <source
                    src={config::asset("/videos/mf-hero-video.webm")}
                    type="video/webm"
                    media="(min-width: 769px)"
                />
                <source
                    src={config::asset("/videos/mf-hero-video.mp4")}
                    type="video/mp4"
                    media="(min-width: 769px)"
                />
                {"Your browser does not support the video tag."}
            </video>
            <div class="hero-overlay" aria-hidden="true"></div>
        </section>
    }
}
