//! Browser-backed theme surface and cookie store.
//!
//! Reads and writes the `data-theme` attribute on `<html>` and the `theme`
//! cookie. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! DOM access is best-effort: a missing window or document is treated as "no
//! attribute / no cookie" so the cycle logic still runs and falls back to
//! dark. Non-browser builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
use crate::state::theme::{THEME_ATTRIBUTE, THEME_COOKIE, cookie_value, theme_cookie};
use crate::state::theme::{PreferenceStore, Theme, ThemeSurface, advance_theme, restore_theme};

/// The document root element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn active(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            root_element()?.get_attribute(THEME_ATTRIBUTE)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn apply(&mut self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = root_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl PreferenceStore for CookieStore {
    fn get(&self) -> Theme {
        #[cfg(feature = "csr")]
        {
            let cookies = html_document().and_then(|doc| doc.cookie().ok());
            Theme::resolve(cookies.as_deref().and_then(|c| cookie_value(c, THEME_COOKIE)))
        }
        #[cfg(not(feature = "csr"))]
        {
            Theme::default()
        }
    }

    fn set(&mut self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                if doc.set_cookie(&theme_cookie(theme)).is_err() {
                    log::warn!("failed to persist theme cookie");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// Apply the persisted theme to the page. Called once at mount.
pub fn restore() -> Theme {
    restore_theme(&mut DocumentSurface, &CookieStore)
}

/// Advance to the next theme and persist it.
pub fn toggle() -> Theme {
    advance_theme(&mut DocumentSurface, &mut CookieStore)
}

#[cfg(feature = "csr")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}
