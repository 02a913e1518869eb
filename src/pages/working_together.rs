use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::config;
use crate::content::hiring::{AND_NEED_TO, HIRE_ME_FOR};
use crate::content::steps::{StepData, GLOBAL_AVAILABILITY, WORKING_TOGETHER_STEPS};

const WORKING_TOGETHER_CSS: &str = r#"
    .wt-banner {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        min-height: 100dvh;
        background-size: cover;
        background-position: center;
    }
    .wt-banner h1 {
        font-family: var(--font-serif);
        font-size: 3.5rem;
        font-weight: 300;
        line-height: 1;
        letter-spacing: 0.025em;
        text-align: center;
        text-transform: uppercase;
        color: #fff;
    }
    .wt-carousel-section {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        min-height: 100dvh;
        padding: 6rem 9rem;
        background: #e7e5e4;
    }
    .wt-carousel {
        height: 75vh;
    }
    .wt-slide {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        height: 100%;
        overflow: hidden;
        cursor: pointer;
    }
    .wt-slide-image {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
    }
    .wt-slide-overlay {
        position: absolute;
        inset: 0;
        z-index: 10;
        background: rgba(0, 0, 0, 0.3);
    }
    .wt-slide h2 {
        position: relative;
        z-index: 20;
        width: 100%;
        padding: 0 1rem;
        font-family: var(--font-serif);
        font-size: 1.875rem;
        letter-spacing: 0.025em;
        text-transform: uppercase;
        color: #fff;
    }
    .wt-details {
        display: flex;
        flex-direction: column;
        width: 100%;
        padding: 6rem 9rem;
        background: #e7e5e4;
    }
    .wt-details > h2 {
        margin-bottom: 6rem;
        font-family: var(--font-serif);
        font-size: 3rem;
        letter-spacing: 0.025em;
        text-align: center;
    }
    .wt-step + .wt-step {
        margin-top: 6rem;
    }
    .wt-step h3 {
        margin-bottom: 2rem;
        font-family: var(--font-serif);
        font-size: 1.875rem;
        letter-spacing: 0.025em;
    }
    .wt-detail {
        margin-bottom: 1.5rem;
    }
    .wt-detail h4 {
        margin-bottom: 0.5rem;
        font-family: var(--font-serif);
        font-size: 1.25rem;
    }
    .wt-detail p,
    .wt-availability p {
        font-weight: 300;
        line-height: 1.625;
        color: #374151;
    }
    .wt-availability {
        margin-top: 4rem;
        padding: 2.5rem;
        background: #f5f5f4;
        text-align: center;
    }
    .wt-availability h3 {
        margin-bottom: 1.5rem;
        font-family: var(--font-serif);
        font-size: 1.875rem;
        letter-spacing: 0.025em;
    }
    .wt-availability p {
        max-width: 56rem;
        margin: 0 auto;
    }
    .hiring {
        width: 100%;
        padding: 6rem 9rem;
        background: #f5f5f4;
    }
    .hiring-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 2rem;
    }
    .hiring-left {
        padding: 2.5rem 2.5rem 2.5rem 5rem;
        border-radius: 0 1rem 1rem 0;
        background: #e7e5e4;
    }
    .hiring-right {
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 2.5rem;
    }
    .hiring h2 {
        margin-bottom: 2.5rem;
        font-family: var(--font-serif);
        font-size: 3rem;
    }
    .hiring-row {
        display: flex;
        align-items: center;
    }
    .hiring-row + .hiring-row {
        margin-top: 2rem;
    }
    .hiring-left .hiring-row p {
        font-style: italic;
        font-weight: 700;
    }
    .hiring-right .hiring-row p {
        color: #374151;
    }
    .hiring-rule {
        flex-grow: 1;
        margin: 0 1rem;
        border-top: 1px solid #a8a29e;
    }
    @media (max-width: 768px) {
        .wt-carousel-section,
        .wt-details,
        .hiring {
            padding: 4rem 1.5rem;
        }
        .hiring-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

/// Smoothly centres the detail block of a step in the viewport.
fn scroll_to_step(anchor_id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(anchor_id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No element with id {}", anchor_id),
    }
}

#[function_component(WorkingTogetherBanner)]
pub fn working_together_banner() -> Html {
    let style = format!(
        "background-image: url(\"{}\");",
        config::asset("/images/mwm-banner.PNG")
    );
    html! {
        <section class="wt-banner" style={style}>
            <style>{WORKING_TOGETHER_CSS}</style>
            <h1>{"Step-by-Step: Working Together"}</h1>
        </section>
    }
}

fn step_slide(step: &StepData) -> Html {
    let anchor_id = step.anchor_id();
    let onclick = Callback::from(move |_: MouseEvent| scroll_to_step(&anchor_id));
    let image_style = format!("background-image: url(\"{}\");", config::asset(step.image));
    html! {
        <div class="wt-slide" title={step.description} {onclick}>
            <div class="wt-slide-image" style={image_style} aria-hidden="true"></div>
            <div class="wt-slide-overlay"></div>
            <h2>{step.heading()}</h2>
        </div>
    }
}

#[function_component(WorkingTogetherCarousel)]
pub fn working_together_carousel() -> Html {
    html! {
        <section class="wt-carousel-section">
            <Carousel
                auto_play={true}
                auto_play_interval={6000}
                show_arrows={true}
                class={classes!("wt-carousel")}
                items_per_view={3}
                gap={24}
                label="Working together process steps"
            >
                { for WORKING_TOGETHER_STEPS.iter().map(step_slide) }
            </Carousel>
        </section>
    }
}

#[function_component(ProcessDetail)]
pub fn process_detail() -> Html {
    html! {
        <section class="wt-details">
            <h2>{"THE PROCESS IN DETAIL"}</h2>
            { for WORKING_TOGETHER_STEPS.iter().map(|step| html! {
                <div class="wt-step" key={step.anchor_id()} id={step.anchor_id()}>
                    <h3>{step.heading()}</h3>
                    { for step.details.iter().map(|detail| html! {
                        <div class="wt-detail">
                            <h4>{detail.title}</h4>
                            <p>{detail.text}</p>
                        </div>
                    }) }
                </div>
            }) }
            <div class="wt-availability">
                <h3>{GLOBAL_AVAILABILITY.title}</h3>
                <p>{GLOBAL_AVAILABILITY.text}</p>
            </div>
        </section>
    }
}

#[function_component(HiringReasons)]
pub fn hiring_reasons() -> Html {
    html! {
        <section class="hiring">
            <div class="hiring-grid">
                <div class="hiring-left">
                    <h2>{"HIRE ME IF"}<br/>{"YOU ARE"}<br/>{"LOOKING FOR"}</h2>
                    { for HIRE_ME_FOR.iter().map(|service| html! {
                        <div class="hiring-row">
                            <p>{*service}</p>
                            <div class="hiring-rule"></div>
                        </div>
                    }) }
                </div>
                <div class="hiring-right">
                    <h2>{"AND NEED TO"}</h2>
                    { for AND_NEED_TO.iter().map(|need| html! {
                        <div class="hiring-row">
                            <div class="hiring-rule"></div>
                            <p>{*need}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
