use std::sync::{Arc, Mutex};

use super::*;

#[test]
fn recorded_redirects_are_observable() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let browser = Browser::new(
        move |url: &str| sink.lock().unwrap().push(url.to_owned()),
        |_| None,
    );

    browser.redirect("https://example.com/auth");
    assert_eq!(seen.lock().unwrap().as_slice(), ["https://example.com/auth"]);
}

#[test]
fn prompt_returns_the_scripted_answer() {
    let browser = Browser::new(|_| {}, |_| Some("mystore.myshopify.com".to_owned()));
    assert_eq!(browser.prompt("shop?").as_deref(), Some("mystore.myshopify.com"));

    let dismissed = Browser::new(|_| {}, |_| None);
    assert_eq!(dismissed.prompt("shop?"), None);
}

#[test]
fn cloned_handles_share_the_same_sink() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let browser = Browser::new(move |url: &str| sink.lock().unwrap().push(url.to_owned()), |_| None);

    let clone = browser.clone();
    clone.redirect("/a");
    browser.redirect("/b");
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn handle_is_context_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Browser>();
}
