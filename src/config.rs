//! Build-time settings. Override any of them by exporting the variable before
//! running `trunk build`.

const DEFAULT_CONTACT_EMAIL: &str = "maiafrid@gmail.com";
const DEFAULT_INSTAGRAM: &str = "maiafrid";

/// Prefix prepended to every `/images` and `/videos` URL.
pub fn get_asset_base() -> &'static str {
    option_env!("PORTFOLIO_ASSET_BASE").unwrap_or("")
}

pub fn get_contact_email() -> &'static str {
    option_env!("PORTFOLIO_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL)
}

pub fn get_instagram_handle() -> &'static str {
    option_env!("PORTFOLIO_INSTAGRAM").unwrap_or(DEFAULT_INSTAGRAM)
}

pub fn get_instagram_url() -> String {
    format!("https://instagram.com/{}", get_instagram_handle())
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Resolves a site-relative asset path against the configured base.
pub fn asset(path: &str) -> String {
    join_asset(get_asset_base(), path)
}

fn join_asset(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_leaves_path_untouched() {
        assert_eq!(join_asset("", "/images/a.png"), "/images/a.png");
    }

    #[test]
    fn base_and_path_join_with_single_slash() {
        assert_eq!(
            join_asset("https://cdn.example.com/", "/videos/hero.mp4"),
            "https://cdn.example.com/videos/hero.mp4"
        );
        assert_eq!(
            join_asset("/static", "images/a.png"),
            "/static/images/a.png"
        );
    }

    #[test]
    fn instagram_url_uses_handle() {
        assert!(get_instagram_url().ends_with(get_instagram_handle()));
    }
}
