//! Cancellable, key-scoped fetch lifecycle.
//!
//! Every card on the dashboard loads its data the same way: a request keyed
//! on the channel `login`, cancelled when the key changes or the component
//! is torn down, with loading/error flags the view renders from. The state
//! transitions live in [`FetchState`] as plain methods so they can be tested
//! natively; [`keyed_fetch`] is the Leptos glue around them.
//!
//! ERROR HANDLING
//! ==============
//! Two layers per request: transport (non-2xx status) and application
//! (`ok: false` envelope). Both surface a short user-facing message and are
//! never retried. Cancellation is a silent no-op, never an error.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use leptos::prelude::*;

/// Why a fetch did not produce data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport layer: the server answered with a non-2xx status.
    #[error("HTTP {status} – {body}")]
    Http { status: u16, body: String },
    /// Application layer: the envelope carried `ok: false`.
    #[error("{0}")]
    Api(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request never completed (network down, DNS, CORS).
    #[error("request failed: {0}")]
    Network(String),
    /// The request was aborted because the key changed or the
    /// component was torn down. Never surfaced to the user.
    #[error("request cancelled")]
    Cancelled,
}

/// Lifecycle state for one card's current request.
///
/// Prior data survives both a reload and a failure; only a successful
/// response replaces it, wholesale.
#[derive(Clone, Debug)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None, generation: 0 }
    }
}

impl<T> FetchState<T> {
    /// The key became absent: drop displayed data and invalidate any
    /// in-flight request so its late result is ignored.
    pub fn clear(&mut self) {
        self.data = None;
        self.loading = false;
        self.error = None;
        self.generation += 1;
    }

    /// A new request is starting. Returns the ticket the response must
    /// present to [`FetchState::settle`].
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Apply a finished request. Results from superseded requests (stale
    /// ticket) and cancellations are dropped without touching anything.
    pub fn settle(&mut self, ticket: u64, result: Result<T, FetchError>) {
        if ticket != self.generation {
            return;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.loading = false;
                self.error = None;
            }
            Err(FetchError::Cancelled) => {}
            Err(err) => {
                self.loading = false;
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Abort handle passed into an endpoint helper alongside the request.
///
/// On the server there is nothing to abort, so this is an empty shell.
#[derive(Clone, Default)]
pub struct CancelToken {
    #[cfg(feature = "hydrate")]
    signal: Option<web_sys::AbortSignal>,
}

impl CancelToken {
    #[cfg(feature = "hydrate")]
    pub fn signal(&self) -> Option<&web_sys::AbortSignal> {
        self.signal.as_ref()
    }
}

/// Owns the `AbortController` for a card's current request. Renewing the
/// guard aborts the predecessor before handing out a fresh token.
#[derive(Default)]
pub struct AbortGuard {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

impl AbortGuard {
    /// Abort the in-flight request, if any. Aborting an already-completed
    /// request has no effect.
    pub fn abort(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }

    /// Abort the predecessor and mint a token for the next request.
    pub fn renew(&mut self) -> CancelToken {
        self.abort();
        #[cfg(feature = "hydrate")]
        {
            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(web_sys::AbortController::signal);
            self.controller = controller;
            return CancelToken { signal };
        }
        #[cfg(not(feature = "hydrate"))]
        CancelToken::default()
    }
}

/// Tearing the guard down (the owning scope was disposed) aborts whatever
/// request is still in flight.
impl Drop for AbortGuard {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Drive a [`FetchState`] from a reactive key.
///
/// While the key is `None` no request is issued and the state stays cleared.
/// Each key change aborts the previous request and starts exactly one new
/// one; at most one request per card is current at any time.
pub fn keyed_fetch<T, F, Fut>(key: Signal<Option<String>>, fetcher: F) -> RwSignal<FetchState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(String, CancelToken) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = RwSignal::new(FetchState::default());
    let guard = StoredValue::new_local(AbortGuard::default());

    Effect::new(move |_| match key.get() {
        None => {
            guard.update_value(AbortGuard::abort);
            state.update(FetchState::clear);
        }
        Some(login) => {
            let token = guard.try_update_value(AbortGuard::renew).unwrap_or_default();
            let mut ticket = 0;
            state.update(|s| ticket = s.begin());

            let fut = fetcher(login, token);
            leptos::task::spawn_local(async move {
                let result = fut.await;
                state.try_update(|s| s.settle(ticket, result));
            });
        }
    });

    state
}
