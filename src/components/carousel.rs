use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Index bookkeeping for a paged carousel. `current` is the first visible slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    total: usize,
    per_view: usize,
}

impl CarouselState {
    pub fn new(total: usize, per_view: usize) -> Self {
        Self {
            current: 0,
            total,
            per_view: per_view.max(1),
        }
    }

    /// Same carousel positioned at `index`, clamped into range.
    pub fn at(mut self, index: usize) -> Self {
        self.current = self.clamp(index);
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn clamp(&self, index: usize) -> usize {
        if self.total == 0 {
            0
        } else {
            index.min(self.total - 1)
        }
    }

    pub fn next(&mut self) {
        let next = self.current.saturating_add(self.per_view);
        self.current = if next >= self.total { 0 } else { next };
    }

    pub fn prev(&mut self) {
        self.current = if self.current < self.per_view {
            self.last_page_start()
        } else {
            self.current - self.per_view
        };
    }

    pub fn first(&mut self) {
        self.current = 0;
    }

    pub fn last(&mut self) {
        self.current = self.total.saturating_sub(self.per_view);
    }

    // Start of the trailing (possibly partial) page.
    fn last_page_start(&self) -> usize {
        let tail = match self.total % self.per_view {
            0 => self.per_view,
            rem => rem,
        };
        self.total.saturating_sub(tail)
    }

    /// Applies a keyboard key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            "Home" => self.first(),
            "End" => self.last(),
            _ => return false,
        }
        true
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.current && index < self.current.saturating_add(self.per_view)
    }

    pub fn announcement(&self) -> String {
        if self.total == 0 {
            return String::new();
        }
        format!("Item {} of {}", self.current + 1, self.total)
    }

    pub fn item_width_percent(&self) -> f64 {
        100.0 / self.per_view as f64
    }

    pub fn offset_percent(&self) -> f64 {
        self.current as f64 * self.item_width_percent()
    }

    /// Width of one slide with the gaps between visible slides shared out.
    pub fn slide_width_css(&self, gap: u32) -> String {
        let gap_share = gap as f64 * (self.per_view - 1) as f64 / self.per_view as f64;
        format!("calc({}% - {}px)", self.item_width_percent(), gap_share)
    }
}

const CAROUSEL_CSS: &str = r#"
    .carousel {
        position: relative;
        width: 100%;
        overflow: hidden;
    }
    .carousel:focus-visible {
        outline: 2px solid #44403c;
        outline-offset: 4px;
    }
    .carousel-track {
        display: flex;
        height: 100%;
        transition: transform 500ms ease-in-out;
    }
    .carousel-slide {
        flex-shrink: 0;
        height: 100%;
    }
    .carousel-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        z-index: 10;
        padding: 0.75rem;
        border: none;
        border-radius: 9999px;
        color: #fff;
        background: rgba(0, 0, 0, 0.3);
        cursor: pointer;
        transition: background-color 150ms;
    }
    .carousel-arrow:hover {
        background: rgba(0, 0, 0, 0.5);
    }
    .carousel-arrow.prev {
        left: 1rem;
    }
    .carousel-arrow.next {
        right: 1rem;
    }
    .carousel-arrow svg {
        display: block;
        width: 1.5rem;
        height: 1.5rem;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub children: Children,
    #[prop_or(false)]
    pub auto_play: bool,
    #[prop_or(5000)]
    pub auto_play_interval: u32,
    #[prop_or(true)]
    pub show_arrows: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(3)]
    pub items_per_view: usize,
    /// Gap between slides in pixels.
    #[prop_or(16)]
    pub gap: u32,
    #[prop_or(AttrValue::Static("Image carousel"))]
    pub label: AttrValue,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let current = use_state(|| 0usize);
    let is_paused = use_state(|| false);
    let total = props.children.len();
    let per_view = props.items_per_view;
    let state = CarouselState::new(total, per_view).at(*current);

    // Autoplay. Re-armed whenever the index or pause state changes so a manual
    // move restarts the countdown.
    let index = *current;
    let paused = *is_paused;
    {
        let current = current.clone();
        use_effect_with_deps(
            move |(auto_play, interval_ms, index, paused, total, per_view)| {
                let interval = if *auto_play && !*paused && *total > 0 {
                    let from = CarouselState::new(*total, *per_view).at(*index);
                    log::debug!("Carousel autoplay armed at slide {}", from.current());
                    Some(Interval::new(*interval_ms, move || {
                        let mut next = from;
                        next.next();
                        current.set(next.current());
                    }))
                } else {
                    None
                };
                move || drop(interval)
            },
            (
                props.auto_play,
                props.auto_play_interval,
                index,
                paused,
                total,
                per_view,
            ),
        );
    }

    let go_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = state;
            next.next();
            current.set(next.current());
        })
    };

    let go_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let mut prev = state;
            prev.prev();
            current.set(prev.current());
        })
    };

    let onkeydown = {
        let current = current.clone();
        Callback::from(move |e: KeyboardEvent| {
            let mut moved = state;
            if moved.handle_key(&e.key()) {
                e.prevent_default();
                current.set(moved.current());
            }
        })
    };

    let pause = {
        let is_paused = is_paused.clone();
        move || is_paused.set(true)
    };
    let resume = {
        let is_paused = is_paused.clone();
        move || is_paused.set(false)
    };
    let onfocus = {
        let pause = pause.clone();
        Callback::from(move |_: FocusEvent| pause())
    };
    let onblur = {
        let resume = resume.clone();
        Callback::from(move |_: FocusEvent| resume())
    };
    let onmouseenter = Callback::from(move |_: MouseEvent| pause());
    let onmouseleave = Callback::from(move |_: MouseEvent| resume());

    let track_style = format!(
        "transform: translateX(-{}%); gap: {}px;",
        state.offset_percent(),
        props.gap
    );
    let slide_style = format!("width: {};", state.slide_width_css(props.gap));

    html! {
        <div
            class={classes!("carousel", props.class.clone())}
            role="region"
            aria-label={props.label.clone()}
            aria-roledescription="carousel"
            tabindex="0"
            {onkeydown}
            {onfocus}
            {onblur}
            {onmouseenter}
            {onmouseleave}
        >
            <style>{CAROUSEL_CSS}</style>
            <div class="sr-only" aria-live="polite" aria-atomic="true">
                {state.announcement()}
            </div>
            <div class="carousel-track" style={track_style} aria-hidden="true">
                {
                    props.children.iter().enumerate().map(|(index, child)| {
                        html! {
                            <div
                                key={index}
                                class="carousel-slide"
                                style={slide_style.clone()}
                                role="group"
                                aria-roledescription="slide"
                                aria-label={format!("{} of {}", index + 1, total)}
                                aria-hidden={if state.is_visible(index) { "false" } else { "true" }}
                            >
                                {child}
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            if props.show_arrows {
                <button class="carousel-arrow prev" type="button" aria-label="Previous slide" onclick={go_prev}>
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                        <path
                            fill-rule="evenodd"
                            d="M7.72 12.53a.75.75 0 010-1.06l7.5-7.5a.75.75 0 111.06 1.06L9.31 12l6.97 6.97a.75.75 0 11-1.06 1.06l-7.5-7.5z"
                            clip-rule="evenodd"
                        />
                    </svg>
                </button>
                <button class="carousel-arrow next" type="button" aria-label="Next slide" onclick={go_next}>
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                        <path
                            fill-rule="evenodd"
                            d="M16.28 11.47a.75.75 0 010 1.06l-7.5 7.5a.75.75 0 01-1.06-1.06L14.69 12 7.72 5.03a.75.75 0 011.06-1.06l7.5 7.5z"
                            clip-rule="evenodd"
                        />
                    </svg>
                </button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_pages_forward_and_wraps_to_start() {
        let mut s = CarouselState::new(6, 3);
        s.next();
        assert_eq!(s.current(), 3);
        s.next();
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn prev_from_start_jumps_to_last_page() {
        let mut s = CarouselState::new(6, 3);
        s.prev();
        assert_eq!(s.current(), 3);

        // Partial trailing page starts at the remainder.
        let mut s = CarouselState::new(7, 3);
        s.prev();
        assert_eq!(s.current(), 6);
        s.prev();
        assert_eq!(s.current(), 3);
    }

    #[test]
    fn fewer_items_than_per_view_stays_at_zero() {
        let mut s = CarouselState::new(2, 3);
        s.next();
        assert_eq!(s.current(), 0);
        s.prev();
        assert_eq!(s.current(), 0);
        s.last();
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn keys_map_to_navigation() {
        let mut s = CarouselState::new(6, 3);
        assert!(s.handle_key("ArrowRight"));
        assert_eq!(s.current(), 3);
        assert!(s.handle_key("Home"));
        assert_eq!(s.current(), 0);
        assert!(s.handle_key("End"));
        assert_eq!(s.current(), 3);
        assert!(s.handle_key("ArrowLeft"));
        assert_eq!(s.current(), 0);
        assert!(!s.handle_key("Enter"));
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn index_stays_in_bounds_under_any_sequence() {
        let keys = ["ArrowRight", "ArrowLeft", "End", "ArrowRight", "ArrowLeft", "ArrowLeft", "Home"];
        for total in 0..12 {
            for per_view in 0..5 {
                let mut s = CarouselState::new(total, per_view);
                for round in 0..30 {
                    s.handle_key(keys[round % keys.len()]);
                    if total == 0 {
                        assert_eq!(s.current(), 0);
                    } else {
                        assert!(s.current() < total, "total={total} per_view={per_view} at {}", s.current());
                    }
                }
            }
        }
    }

    #[test]
    fn zero_per_view_is_treated_as_one() {
        let mut s = CarouselState::new(3, 0);
        s.next();
        assert_eq!(s.current(), 1);
        assert_eq!(s.item_width_percent(), 100.0);
    }

    #[test]
    fn huge_per_view_does_not_overflow() {
        let mut s = CarouselState::new(5, usize::MAX).at(2);
        assert!(s.is_visible(3));
        assert!(!s.is_visible(1));
        s.next();
        assert_eq!(s.current(), 0);
        s.prev();
        assert_eq!(s.current(), 0);
        assert_eq!(s.announcement(), "Item 1 of 5");
    }

    #[test]
    fn positioning_clamps_into_range() {
        assert_eq!(CarouselState::new(4, 3).at(6).current(), 3);
        assert_eq!(CarouselState::new(0, 3).at(2).current(), 0);
    }

    #[test]
    fn visibility_covers_one_page() {
        let s = CarouselState::new(6, 3).at(3);
        assert!(!s.is_visible(2));
        assert!(s.is_visible(3));
        assert!(s.is_visible(5));
        assert!(!s.is_visible(6));
    }

    #[test]
    fn announcement_and_layout() {
        let s = CarouselState::new(6, 3).at(3);
        assert_eq!(s.announcement(), "Item 4 of 6");
        assert_eq!(s.offset_percent(), 100.0);
        assert_eq!(CarouselState::new(6, 2).slide_width_css(16), "calc(50% - 8px)");
        assert_eq!(CarouselState::new(0, 3).announcement(), "");
    }
}
