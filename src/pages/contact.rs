use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your email address")]
    EmptyEmail,
    #[error("That doesn't look like an email address")]
    MalformedEmail,
}

pub fn validate_email(email: &str) -> Result<(), ContactError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ContactError::EmptyEmail);
    }
    let (local, domain) = email.split_once('@').ok_or(ContactError::MalformedEmail)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(ContactError::MalformedEmail);
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(ContactError::MalformedEmail);
    }
    Ok(())
}

/// `mailto:` link to `to` with URL-encoded subject and body.
pub fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

fn open_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

const CONTACT_CSS: &str = r#"
    .contact-section {
        position: relative;
        display: flex;
        flex-direction: column;
        justify-content: center;
        width: 100%;
        min-height: 100dvh;
        padding: 6rem 9rem;
        background: #f3f4f6;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 4rem;
        margin-bottom: 5rem;
    }
    .contact-heading {
        font-family: var(--font-serif);
        font-size: 6rem;
        line-height: 1.25;
    }
    .contact-details > * + * {
        margin-top: 1.5rem;
    }
    .contact-label {
        color: #6b7280;
    }
    .contact-details a {
        color: #000;
    }
    .contact-details a:hover {
        text-decoration: underline;
    }
    .contact-note textarea {
        width: 100%;
        height: 10rem;
        padding: 1rem;
        border: 1px solid #d1d5db;
    }
    .contact-note textarea:focus,
    .newsletter-form input:focus {
        outline: none;
        border-color: #6b7280;
    }
    .contact-note a.disabled {
        pointer-events: none;
        color: #9ca3af;
    }
    .newsletter {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding-top: 2rem;
        border-top: 1px solid #e5e7eb;
    }
    .newsletter h3 {
        width: 20%;
        font-size: 1.25rem;
        font-weight: 500;
    }
    .newsletter-blurb {
        width: 40%;
        font-size: 0.875rem;
        color: #4b5563;
    }
    .newsletter-form {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        width: 40%;
    }
    .newsletter-form input {
        flex-grow: 1;
        padding: 1rem;
        border: 1px solid #d1d5db;
    }
    .newsletter-form button {
        padding: 1rem;
        border: none;
        color: #fff;
        background: #000;
        white-space: nowrap;
        cursor: pointer;
    }
    .newsletter-form button:hover {
        background: #1f2937;
    }
    .newsletter-error {
        width: 100%;
        font-size: 0.875rem;
        color: #b91c1c;
    }
    @media (max-width: 768px) {
        .contact-section {
            padding: 4rem 1.5rem;
        }
        .contact-grid {
            grid-template-columns: 1fr;
        }
        .contact-heading {
            font-size: 3.5rem;
        }
        .newsletter {
            flex-direction: column;
            align-items: flex-start;
            gap: 1.5rem;
        }
        .newsletter h3,
        .newsletter-blurb,
        .newsletter-form {
            width: 100%;
        }
    }
"#;

#[function_component(Contact)]
pub fn contact() -> Html {
    let note = use_state(String::new);
    let email = use_state(String::new);
    let email_error = use_state(|| None::<ContactError>);
    let subscribed = use_state(|| false);

    let contact_email = config::get_contact_email();
    let instagram_url = config::get_instagram_url();

    let on_note_input = {
        let note = note.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let note_is_blank = note.trim().is_empty();
    let send_note = {
        let note = note.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if note.trim().is_empty() {
                return;
            }
            open_url(&mailto_url(contact_email, "Hello from your website", &note));
        })
    };

    let on_email_input = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            email_error.set(None);
        })
    };

    let subscribe = {
        let email = email.clone();
        let email_error = email_error.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_email(&email) {
                Ok(()) => {
                    let address = email.trim();
                    log::info!("Newsletter subscription requested");
                    open_url(&mailto_url(
                        contact_email,
                        "Newsletter subscription",
                        &format!("Please add {} to your newsletter.", address),
                    ));
                    subscribed.set(true);
                }
                Err(err) => email_error.set(Some(err)),
            }
        })
    };

    html! {
        <section class="contact-section">
            <style>{CONTACT_CSS}</style>
            <div class="contact-grid">
                <h2 class="contact-heading">{"let's get"}<br/>{"in touch"}</h2>
                <div class="contact-details">
                    <div>
                        <p class="contact-label">{"Email"}</p>
                        <a href={format!("mailto:{}", contact_email)}>{contact_email}</a>
                    </div>
                    <div>
                        <p class="contact-label">{"Instagram"}</p>
                        <a href={instagram_url} target="_blank" rel="noopener noreferrer">
                            {format!("@{}", config::get_instagram_handle())}
                        </a>
                    </div>
                    <div class="contact-note">
                        <p class="contact-label">{"or drop me a note:"}</p>
                        <textarea
                            placeholder="Your message here..."
                            value={(*note).clone()}
                            oninput={on_note_input}
                        />
                        <a
                            href="#"
                            class={classes!(note_is_blank.then_some("disabled"))}
                            aria-disabled={if note_is_blank { "true" } else { "false" }}
                            onclick={send_note}
                        >
                            {"Send"}
                        </a>
                    </div>
                </div>
            </div>
            <div class="newsletter">
                <h3>{"Subscribe to my newsletter"}</h3>
                <div class="newsletter-blurb">
                    <p>{"I don't promise to write often, but I do promise to write with intention. Sincere words, ideas in motion, workshops, projects. A way to stay connected."}</p>
                </div>
                if *subscribed {
                    <p class="newsletter-form">{"Thank you, talk soon."}</p>
                } else {
                    <form class="newsletter-form" onsubmit={subscribe} novalidate=true>
                        <input
                            type="email"
                            placeholder="email@example.com"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            aria-invalid={if email_error.is_some() { "true" } else { "false" }}
                        />
                        <button type="submit">{"Subscribe"}</button>
                        if let Some(err) = (*email_error).clone() {
                            <p class="newsletter-error" role="alert">{err.to_string()}</p>
                        }
                    </form>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert_eq!(validate_email("email@example.com"), Ok(()));
        assert_eq!(validate_email("  first.last@studio.co.uk "), Ok(()));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_email(""), Err(ContactError::EmptyEmail));
        assert_eq!(validate_email("   "), Err(ContactError::EmptyEmail));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["plain", "@example.com", "a@b", "a@b@c.com", "a@.com", "a@example.", "a b@example.com"] {
            assert_eq!(validate_email(bad), Err(ContactError::MalformedEmail), "{bad}");
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let url = mailto_url("me@example.com", "Hi there", "line one\nline & two");
        assert_eq!(
            url,
            "mailto:me@example.com?subject=Hi%20there&body=line%20one%0Aline%20%26%20two"
        );
    }
}
