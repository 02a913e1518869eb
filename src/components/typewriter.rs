use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between typed characters, in milliseconds.
    pub speed: u32,
    pub erase_speed: u32,
    /// How long a finished word stays on screen before erasing starts.
    pub delay_between_words: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            speed: 200,
            erase_speed: 100,
            delay_between_words: 1500,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Typing,
    Erasing,
}

/// Type/erase cycle over a word list. `shown` counts characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
    word_index: usize,
    shown: usize,
    phase: Phase,
}

impl TypewriterState {
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn word<'a, S: AsRef<str>>(&self, words: &'a [S]) -> &'a str {
        if words.is_empty() {
            return "";
        }
        words[self.word_index % words.len()].as_ref()
    }

    pub fn current_text<S: AsRef<str>>(&self, words: &[S]) -> String {
        self.word(words).chars().take(self.shown).collect()
    }

    fn is_word_complete<S: AsRef<str>>(&self, words: &[S]) -> bool {
        self.shown >= self.word(words).chars().count()
    }

    /// Milliseconds until the next `tick`, or `None` when there is nothing to animate.
    pub fn next_delay<S: AsRef<str>>(&self, words: &[S], timing: &TypewriterTiming) -> Option<u32> {
        if words.is_empty() {
            return None;
        }
        let delay = match self.phase {
            Phase::Typing if self.is_word_complete(words) => timing.delay_between_words,
            Phase::Typing => timing.speed,
            Phase::Erasing => timing.erase_speed,
        };
        Some(delay)
    }

    pub fn tick<S: AsRef<str>>(&mut self, words: &[S]) {
        if words.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing if self.is_word_complete(words) => {
                self.phase = Phase::Erasing;
                // Empty words have nothing to erase.
                if self.shown == 0 {
                    self.advance(words.len());
                }
            }
            Phase::Typing => self.shown += 1,
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.advance(words.len());
                }
            }
        }
    }

    fn advance(&mut self, word_count: usize) {
        self.word_index = (self.word_index + 1) % word_count;
        self.shown = 0;
        self.phase = Phase::Typing;
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    #[prop_or_default]
    pub prefix: String,
    pub words: &'static [&'static str],
    #[prop_or(200)]
    pub speed: u32,
    #[prop_or(100)]
    pub erase_speed: u32,
    #[prop_or(1500)]
    pub delay_between_words: u32,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let state = use_state(TypewriterState::default);
    let timing = TypewriterTiming {
        speed: props.speed,
        erase_speed: props.erase_speed,
        delay_between_words: props.delay_between_words,
    };

    // One pending timeout per state; dropping it on change or unmount cancels it.
    let snapshot = *state;
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(current, words, timing)| {
                let current = *current;
                let words: &'static [&'static str] = *words;
                let timeout = current.next_delay(words, timing).map(|delay| {
                    Timeout::new(delay, move || {
                        let mut next = current;
                        next.tick(words);
                        state.set(next);
                    })
                });
                move || drop(timeout)
            },
            (snapshot, props.words, timing),
        );
    }

    html! {
        <span class="typewriter">
            if !props.prefix.is_empty() {
                <span>{&props.prefix}</span>
            }
            {state.current_text(props.words)}
            <span class="animate-blink">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut TypewriterState, words: &[&str], ticks: usize) {
        for _ in 0..ticks {
            state.tick(words);
        }
    }

    #[test]
    fn types_one_character_per_tick() {
        let words = ["abc"];
        let mut s = TypewriterState::default();
        assert_eq!(s.current_text(&words), "");
        s.tick(&words);
        assert_eq!(s.current_text(&words), "a");
        run(&mut s, &words, 2);
        assert_eq!(s.current_text(&words), "abc");
        assert_eq!(s.phase(), Phase::Typing);
    }

    #[test]
    fn delays_follow_the_phase() {
        let words = ["ab"];
        let timing = TypewriterTiming {
            speed: 125,
            erase_speed: 100,
            delay_between_words: 2000,
        };
        let mut s = TypewriterState::default();
        assert_eq!(s.next_delay(&words, &timing), Some(125));
        run(&mut s, &words, 2);
        assert_eq!(s.next_delay(&words, &timing), Some(2000));
        s.tick(&words);
        assert_eq!(s.phase(), Phase::Erasing);
        assert_eq!(s.next_delay(&words, &timing), Some(100));
    }

    #[test]
    fn cycles_words_in_order_forever() {
        let words = ["ab", "c", "def"];
        let mut s = TypewriterState::default();
        let mut seen = Vec::new();
        for _ in 0..200 {
            let before = s.word_index();
            s.tick(&words);
            if s.word_index() != before {
                seen.push(s.word_index());
            }
        }
        assert!(seen.len() >= 6);
        for (i, index) in seen.iter().enumerate() {
            assert_eq!(*index, (i + 1) % words.len());
        }
    }

    #[test]
    fn erasing_removes_characters_then_moves_on() {
        let words = ["ab", "xy"];
        let mut s = TypewriterState::default();
        run(&mut s, &words, 3);
        assert_eq!(s.phase(), Phase::Erasing);
        s.tick(&words);
        assert_eq!(s.current_text(&words), "a");
        s.tick(&words);
        assert_eq!(s.word_index(), 1);
        assert_eq!(s.phase(), Phase::Typing);
        assert_eq!(s.current_text(&words), "");
    }

    #[test]
    fn empty_word_is_skipped_after_the_hold() {
        let words = ["", "ok"];
        let timing = TypewriterTiming::default();
        let mut s = TypewriterState::default();
        assert_eq!(s.next_delay(&words, &timing), Some(timing.delay_between_words));
        s.tick(&words);
        assert_eq!(s.word_index(), 1);
        assert_eq!(s.phase(), Phase::Typing);
    }

    #[test]
    fn multibyte_words_are_typed_by_character() {
        let words = ["acción"];
        let mut s = TypewriterState::default();
        run(&mut s, &words, 5);
        assert_eq!(s.current_text(&words), "acció");
        s.tick(&words);
        assert_eq!(s.current_text(&words), "acción");
    }

    #[test]
    fn empty_word_list_never_schedules() {
        let words: [&str; 0] = [];
        let mut s = TypewriterState::default();
        assert_eq!(s.next_delay(&words, &TypewriterTiming::default()), None);
        s.tick(&words);
        assert_eq!(s, TypewriterState::default());
        assert_eq!(s.current_text(&words), "");
    }
}
