use yew::prelude::*;

use crate::components::typewriter::Typewriter;
use crate::config;
use crate::content::words::{INTERESTS_WORDS, I_AM_WORDS};

const I_AM_CSS: &str = r#"
    .i-am-section {
        position: relative;
        display: flex;
        flex-direction: column;
        justify-content: center;
        gap: 9rem;
        width: 100%;
        min-height: 100dvh;
        padding: 6rem 9rem;
        background: #e5e7eb;
        font-family: var(--font-serif);
    }
    .i-am-section h2 {
        font-size: 6rem;
    }
    .i-am-line {
        display: flex;
        align-items: baseline;
    }
    .i-am-line.interested {
        flex-direction: column;
        align-items: flex-end;
    }
    .typewriter {
        display: inline-flex;
        align-items: baseline;
        gap: 0.5rem;
        margin-left: 1rem;
        font-size: 2.25rem;
        font-weight: 300;
        text-transform: lowercase;
    }
    @media (max-width: 768px) {
        .i-am-section {
            padding: 4rem 1.5rem;
        }
        .i-am-section h2 {
            font-size: 3rem;
        }
    }
"#;

const ABOUT_CSS: &str = r#"
    .about-section {
        position: relative;
        display: flex;
        flex-direction: column;
        justify-content: center;
        width: 100%;
        min-height: 100dvh;
        padding: 6rem 9rem;
        background: #f5f5f4;
    }
    .about-block {
        display: grid;
        grid-template-columns: repeat(12, minmax(0, 1fr));
        gap: 3rem;
        margin-bottom: 7rem;
    }
    .about-photo {
        grid-column: span 5;
        display: flex;
        justify-content: center;
    }
    .about-photo img {
        width: 100%;
        max-width: 28rem;
        aspect-ratio: 3 / 4;
        object-fit: cover;
        filter: grayscale(100%);
    }
    .about-text {
        grid-column: span 7;
        max-width: 42rem;
        padding-top: 2rem;
    }
    .about-text h2 {
        margin-bottom: 2.5rem;
        font-family: var(--font-serif);
        font-size: 3rem;
        letter-spacing: 0.025em;
    }
    .about-block p {
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.625;
    }
    .about-block p + p {
        margin-top: 1.5rem;
    }
    .about-label {
        grid-column: span 3;
        font-family: var(--font-serif);
        font-size: 2.25rem;
        letter-spacing: 0.025em;
    }
    .about-body {
        grid-column: span 9;
        max-width: 48rem;
    }
    @media (max-width: 768px) {
        .about-section {
            padding: 4rem 1.5rem;
        }
        .about-block {
            grid-template-columns: 1fr;
        }
        .about-photo,
        .about-text,
        .about-label,
        .about-body {
            grid-column: auto;
        }
    }
"#;

const OBJECTIVES: &[&str] = &[
    "Support design projects that integrate sustainability, aesthetics, and meaning.",
    "Foster creative processes that prioritize circularity, dialogue, and cultural transformation.",
    "Expand international networks of collaboration with a focus on climate justice and regenerative creativity.",
    "Research and communicate new pedagogies from conscious fashion and storytelling.",
    "Continue exploring desire as a vital force guiding our aesthetic, ethical, and spiritual decisions.",
];

fn labelled_block(label: &str, body: Html) -> Html {
    html! {
        <div class="about-block">
            <h2 class="about-label">{label}</h2>
            <div class="about-body">{body}</div>
        </div>
    }
}

/// "I am ..." and "I am interested in ..." with their typewriters.
#[function_component(IAm)]
pub fn i_am() -> Html {
    html! {
        <section class="i-am-section">
            <style>{I_AM_CSS}</style>
            <div class="i-am-line">
                <h2>{"I am"}</h2>
                <Typewriter
                    prefix="a"
                    words={I_AM_WORDS}
                    speed={125}
                    erase_speed={100}
                    delay_between_words={2000}
                />
            </div>
            <div class="i-am-line interested">
                <h2>{"I am interested"}</h2>
                <Typewriter
                    prefix="in"
                    words={INTERESTS_WORDS}
                    speed={100}
                    erase_speed={75}
                    delay_between_words={3000}
                />
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about-section">
            <style>{ABOUT_CSS}</style>
            <div class="about-block">
                <div class="about-photo">
                    <img src={config::asset("/images/maiafrid-profile.jpg")} alt="Maia Frid profile" loading="lazy" />
                </div>
                <div class="about-text">
                    <h2>{"ABOUT ME"}</h2>
                    <p>{"I am Maia Frid, a visual creator born in Buenos Aires, specializing in creative direction, styling, and sustainable narratives. My practice weaves together art, fashion, and ecological awareness to imagine possible futures through design and sensitivity."}</p>
                    <p>{"Through collaborations with brands, institutions, and communities, I create images and experiences that invite reflection, connection, and transformation."}</p>
                </div>
            </div>
            {labelled_block("MISSION", html! {
                <p>{"To cultivate a creative practice that dialogues with nature, honoring cycles, memories, and connections. My mission is to create conscious visual narratives that drive a fairer, regenerative, and sensitive fashion, in connection with the social, territorial, and spiritual."}</p>
            })}
            {labelled_block("VISION", html! {
                <p>{"I envision a future where fashion and art become languages for healing, planet care, and the celebration of diversity. I aspire to be a bridge between worlds, the visible and the invisible, the ancestral and the contemporary, proposing new ways to relate to our environment."}</p>
            })}
            {labelled_block("OBJECTIVES", html! {
                <>
                    { for OBJECTIVES.iter().map(|objective| html! { <p>{*objective}</p> }) }
                </>
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each section injects its own stylesheet, so neither may lean on the other's rules.
    #[test]
    fn each_section_carries_its_own_rules() {
        for class in [".about-section", ".about-block", ".about-photo", ".about-label", ".about-body"] {
            assert!(ABOUT_CSS.contains(class), "about styles miss {class}");
            assert!(!I_AM_CSS.contains(class), "i-am styles define {class}");
        }
        for class in [".i-am-section", ".i-am-line", ".typewriter"] {
            assert!(I_AM_CSS.contains(class), "i-am styles miss {class}");
            assert!(!ABOUT_CSS.contains(class), "about styles define {class}");
        }
    }
}
