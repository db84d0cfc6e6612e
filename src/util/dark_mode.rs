//! Dark theme preference.
//!
//! DESIGN
//! ======
//! An explicit operator choice is stored in `localStorage` as `"dark"` or
//! `"light"`; absent or unrecognized values defer to the OS color scheme.
//! `initial` resolves and applies the theme once at hydration without
//! persisting, so a purely OS-derived theme never becomes sticky. `set`
//! is for the toolbar toggle and does persist.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "voicedash_theme";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// Decode a stored theme token. Anything unrecognized counts as "no choice"
/// so stale values from older builds fall back to the OS scheme.
#[cfg(any(test, feature = "hydrate"))]
fn parse_choice(raw: &str) -> Option<bool> {
    match raw {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Effective theme given an explicit choice and the OS scheme. The explicit
/// choice always wins.
#[cfg(any(test, feature = "hydrate"))]
fn resolve(choice: Option<bool>, system_dark: bool) -> bool {
    choice.unwrap_or(system_dark)
}

#[cfg(feature = "hydrate")]
fn stored_choice() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let token = storage.get_item(STORAGE_KEY).ok().flatten()?;
    parse_choice(&token)
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

#[cfg(feature = "hydrate")]
fn apply_class(enabled: bool) {
    let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
        return;
    };
    let classes = root.class_list();
    let _ = if enabled { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
}

/// Resolve the startup theme, apply it to the document, and return it.
/// Does not persist: only an explicit toggle records a choice.
pub fn initial() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let dark = resolve(stored_choice(), system_prefers_dark());
        apply_class(dark);
        dark
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Switch the theme: update the document and persist the choice.
pub fn set(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        apply_class(enabled);
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
