//! Injected navigation/dialog capability.
//!
//! The OAuth flows leave the page with a full browser redirect and the
//! Shopify flow may ask for the store domain via a dialog. Both go through
//! this handle, provided once via Leptos context, so components stay
//! testable without a real `window`.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::sync::Arc;

/// Cloneable handle over page navigation and the domain prompt.
///
/// Lives in the Leptos context, which stores values behind a sync
/// lock, so the closures carry `Send + Sync` bounds.
#[derive(Clone)]
pub struct Browser {
    redirect: Arc<dyn Fn(&str) + Send + Sync>,
    prompt: Arc<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl Browser {
    /// Build from explicit closures. Tests use this to record redirects
    /// and script prompt answers.
    pub fn new(
        redirect: impl Fn(&str) + Send + Sync + 'static,
        prompt: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self { redirect: Arc::new(redirect), prompt: Arc::new(prompt) }
    }

    /// The real DOM-backed implementation. On the server both operations
    /// are no-ops, matching the rest of the hydrate-gated surface.
    pub fn dom() -> Self {
        Self::new(
            |url| {
                #[cfg(feature = "hydrate")]
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(url);
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = url;
            },
            |message| {
                #[cfg(feature = "hydrate")]
                {
                    return web_sys::window()
                        .and_then(|w| w.prompt_with_message(message).ok())
                        .flatten();
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = message;
                    None
                }
            },
        )
    }

    /// Navigate the whole page to `url`.
    pub fn redirect(&self, url: &str) {
        (self.redirect)(url);
    }

    /// Ask the user a question; `None` when dismissed.
    pub fn prompt(&self, message: &str) -> Option<String> {
        (self.prompt)(message)
    }
}
