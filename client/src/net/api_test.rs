use super::*;

#[test]
fn status_message_matches_backend_contract() {
    assert_eq!(http_status_message(500), "Error 500");
    assert_eq!(http_status_message(404), "Error 404");
    assert_eq!(http_status_message(503), "Error 503");
}

#[test]
fn status_message_feeds_user_visible_error_format() {
    // The session state prefixes "Error: ", yielding "Error: Error 500"
    // for an HTTP 500 — the format the original backend clients expect.
    let rendered = format!("Error: {}", http_status_message(500));
    assert_eq!(rendered, "Error: Error 500");
}
