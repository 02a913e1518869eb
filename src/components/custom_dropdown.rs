use yew::prelude::*;

use crate::content::dropdowns::DropdownKey;

/// Open flags for every dropdown on the page, indexed by key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownStates {
    open: [bool; DropdownKey::COUNT],
}

impl DropdownStates {
    pub fn is_open(&self, key: DropdownKey) -> bool {
        self.open[key.index()]
    }

    pub fn any_open(&self) -> bool {
        self.open.iter().any(|open| *open)
    }

    pub fn open(&mut self, key: DropdownKey) {
        self.open[key.index()] = true;
    }

    pub fn close(&mut self, key: DropdownKey) {
        self.open[key.index()] = false;
    }

    pub fn toggle(&mut self, key: DropdownKey) {
        self.open[key.index()] = !self.open[key.index()];
    }

    pub fn close_all(&mut self) {
        self.open = [false; DropdownKey::COUNT];
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownAction {
    Toggle,
    Close,
}

impl DropdownAction {
    /// Keyboard mapping for the dropdown header. Tab keeps its default behaviour.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(DropdownAction::Toggle),
            "Escape" => Some(DropdownAction::Close),
            _ => None,
        }
    }

    pub fn prevents_default(self) -> bool {
        matches!(self, DropdownAction::Toggle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropdownAria {
    pub expanded: &'static str,
    pub hidden: &'static str,
}

/// `aria-expanded` on the header and `aria-hidden` on the panel, always opposite.
pub fn aria_for(is_open: bool) -> DropdownAria {
    if is_open {
        DropdownAria {
            expanded: "true",
            hidden: "false",
        }
    } else {
        DropdownAria {
            expanded: "false",
            hidden: "true",
        }
    }
}

const DROPDOWN_CSS: &str = r#"
    .custom-dropdown {
        width: 100%;
        padding-bottom: 1rem;
        border-bottom: 1px solid #e5e7eb;
    }
    .custom-dropdown-header {
        display: flex;
        align-items: center;
        width: 100%;
        padding: 0;
        border: none;
        background: none;
        text-align: left;
        cursor: pointer;
    }
    .custom-dropdown-title {
        font-size: 5.5rem;
        line-height: 1;
        letter-spacing: 0.05em;
        font-weight: 300;
    }
    .custom-dropdown-panel {
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: all 500ms ease-in-out 100ms;
    }
    .custom-dropdown-panel.open {
        max-height: max-content;
        opacity: 1;
        margin-top: 1rem;
    }
    .custom-dropdown-subtitle {
        margin-bottom: 1rem;
        font-family: var(--font-serif);
        font-size: 1.25rem;
        text-transform: uppercase;
        color: #374151;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct CustomDropdownProps {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub is_open: bool,
    pub on_open: Callback<()>,
    pub on_close: Callback<()>,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CustomDropdown)]
pub fn custom_dropdown(props: &CustomDropdownProps) -> Html {
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(action) = DropdownAction::from_key(&e.key()) {
                if action.prevents_default() {
                    e.prevent_default();
                }
                match action {
                    DropdownAction::Toggle => on_toggle.emit(()),
                    DropdownAction::Close => on_close.emit(()),
                }
            }
        })
    };
    let onmouseenter = props.on_open.reform(|_: MouseEvent| ());
    let onmouseleave = props.on_close.reform(|_: MouseEvent| ());

    let aria = aria_for(props.is_open);
    let panel_id = format!("{}-content", props.id);

    html! {
        <div class="custom-dropdown" {onmouseleave}>
            <style>{DROPDOWN_CSS}</style>
            <button
                class="custom-dropdown-header"
                type="button"
                {onmouseenter}
                {onkeydown}
                aria-expanded={aria.expanded}
                aria-controls={panel_id.clone()}
            >
                <span class={classes!(
                    "custom-dropdown-title",
                    "text-with-cursor",
                    props.is_open.then_some("active-cursor"),
                )}>
                    {&props.title}
                </span>
            </button>
            <div
                id={panel_id}
                class={classes!("custom-dropdown-panel", props.is_open.then_some("open"))}
                aria-hidden={aria.hidden}
            >
                <h3 class="custom-dropdown-subtitle">{&props.subtitle}</h3>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_only_the_target() {
        let mut states = DropdownStates::default();
        states.toggle(DropdownKey::Press);
        assert!(states.is_open(DropdownKey::Press));
        assert!(!states.is_open(DropdownKey::Blog));
        states.toggle(DropdownKey::Press);
        assert!(!states.any_open());
    }

    #[test]
    fn open_close_and_close_all() {
        let mut states = DropdownStates::default();
        states.open(DropdownKey::Archive);
        states.open(DropdownKey::Blog);
        states.open(DropdownKey::Blog);
        assert!(states.is_open(DropdownKey::Blog));
        states.close(DropdownKey::Archive);
        assert!(!states.is_open(DropdownKey::Archive));
        assert!(states.any_open());
        states.close_all();
        assert!(DropdownKey::ALL.iter().all(|key| !states.is_open(*key)));
    }

    #[test]
    fn keyboard_mapping() {
        assert_eq!(DropdownAction::from_key("Enter"), Some(DropdownAction::Toggle));
        assert_eq!(DropdownAction::from_key(" "), Some(DropdownAction::Toggle));
        assert_eq!(DropdownAction::from_key("Escape"), Some(DropdownAction::Close));
        assert_eq!(DropdownAction::from_key("Tab"), None);
        assert!(DropdownAction::Toggle.prevents_default());
        assert!(!DropdownAction::Close.prevents_default());
    }

    #[test]
    fn aria_attributes_track_open_state() {
        let mut states = DropdownStates::default();
        for key in DropdownKey::ALL {
            for _ in 0..3 {
                states.toggle(key);
                let aria = aria_for(states.is_open(key));
                assert_eq!(aria.expanded == "true", states.is_open(key));
                assert_ne!(aria.expanded, aria.hidden);
            }
        }
    }
}
