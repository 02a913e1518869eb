use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::custom_dropdown::{CustomDropdown, DropdownStates};
use crate::config;
use crate::content::blog::{articles, BlogArticle};
use crate::content::dropdowns::{DropdownKey, DROPDOWN_ITEMS};

const CATEGORIES_CSS: &str = r#"
    .categories-section {
        position: relative;
        width: 100%;
        min-height: 100dvh;
        padding: 6rem 0;
        background: #fff;
    }
    .quote-band {
        margin-bottom: 6rem;
        overflow: hidden;
        white-space: nowrap;
        font-style: italic;
        color: #374151;
    }
    .quote-band span {
        display: inline-block;
        padding-left: 100%;
        animation: continuous-translate 30s linear infinite;
    }
    @keyframes continuous-translate {
        from { transform: translateX(0); }
        to { transform: translateX(-100%); }
    }
    .dropdown-list {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        gap: 1.5rem;
        padding: 0 9rem;
    }
    .blog-carousel-wrap {
        padding: 1.5rem 0;
    }
    .blog-carousel {
        height: 400px;
    }
    .blog-card {
        height: 100%;
        overflow-y: scroll;
        border: 1px solid #e5e7eb;
        background: #fff;
    }
    .blog-card-image {
        height: 50%;
        overflow: hidden;
    }
    .blog-card-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .blog-card-body {
        padding: 1.5rem;
    }
    .blog-card-date {
        margin-bottom: 0.5rem;
        font-size: 0.875rem;
        color: #6b7280;
    }
    .blog-card-body h3 {
        margin-bottom: 0.75rem;
        font-family: var(--font-serif);
        font-size: 1.25rem;
    }
    .blog-card-body p {
        font-size: 0.875rem;
        color: #374151;
    }
    .blog-card-body a {
        display: inline-block;
        margin-top: 1rem;
        font-size: 0.875rem;
        text-decoration: underline;
    }
    @media (max-width: 768px) {
        .dropdown-list {
            padding: 0 1.5rem;
        }
    }
"#;

fn blog_card(article: &BlogArticle) -> Html {
    html! {
        <div class="blog-card">
            <div class="blog-card-image">
                <img src={config::asset(&article.image)} alt={article.image_alt.clone()} loading="lazy" />
            </div>
            <div class="blog-card-body">
                <p class="blog-card-date">{&article.date}</p>
                <h3>{&article.title}</h3>
                <p>{&article.summary}</p>
                <a href={article.href.clone()}>{"Read more"}</a>
            </div>
        </div>
    }
}

fn dropdown_body(key: DropdownKey) -> Html {
    match key {
        DropdownKey::Blog => html! {
            <div class="blog-carousel-wrap">
                <Carousel
                    auto_play={false}
                    auto_play_interval={5000}
                    show_arrows={false}
                    class={classes!("blog-carousel")}
                    items_per_view={3}
                    gap={16}
                    label="Blog articles"
                >
                    { for articles().iter().map(blog_card) }
                </Carousel>
            </div>
        },
        _ => html! {},
    }
}

/// Quote band and the expandable category list.
#[function_component(Categories)]
pub fn categories() -> Html {
    let states = use_state(DropdownStates::default);

    // Any mousedown while something is open closes everything.
    let open = *states;
    {
        let states = states.clone();
        use_effect_with_deps(
            move |current: &DropdownStates| {
                let current = *current;
                let destructor: Box<dyn FnOnce()> = match web_sys::window().and_then(|w| w.document()) {
                    Some(document) => {
                        let callback = Closure::<dyn Fn()>::new(move || {
                            if current.any_open() {
                                log::debug!("Closing all dropdowns on outside mousedown");
                                let mut next = current;
                                next.close_all();
                                states.set(next);
                            }
                        });
                        if let Err(e) = document.add_event_listener_with_callback(
                            "mousedown",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Failed to attach mousedown listener: {:?}", e);
                        }
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "mousedown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            open,
        );
    }

    let update = |key: DropdownKey, apply: fn(&mut DropdownStates, DropdownKey)| {
        let states = states.clone();
        Callback::from(move |_: ()| {
            let mut next = *states;
            apply(&mut next, key);
            states.set(next);
        })
    };

    html! {
        <section class="categories-section" aria-label="Main categories">
            <style>{CATEGORIES_CSS}</style>
            <div class="quote-band">
                <span>{"\"My connection with nature shares the same space as the one I nurture with others and myself, guided by deep listening and collective creation.\""}</span>
            </div>
            <div class="dropdown-list">
                {
                    DROPDOWN_ITEMS.iter().map(|item| {
                        html! {
                            <CustomDropdown
                                key={item.id.as_str()}
                                id={item.id.as_str()}
                                title={item.title}
                                subtitle={item.subtitle}
                                is_open={states.is_open(item.id)}
                                on_open={update(item.id, DropdownStates::open)}
                                on_close={update(item.id, DropdownStates::close)}
                                on_toggle={update(item.id, DropdownStates::toggle)}
                            >
                                {dropdown_body(item.id)}
                            </CustomDropdown>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
