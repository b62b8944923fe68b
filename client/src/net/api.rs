//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs; the error string is the
//! gateway failure description the session state renders to the user.
//! A non-success HTTP status becomes `"Error <status>"`, so a 500 shows
//! up in the UI as `"Error: Error 500"`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AskResponse;
#[cfg(feature = "hydrate")]
use super::types::SummarizeResponse;

#[cfg(any(test, feature = "hydrate"))]
fn http_status_message(status: u16) -> String {
    format!("Error {status}")
}

/// Submit a question via `POST /api/ask`.
///
/// # Errors
///
/// Returns the gateway failure description when the request cannot be
/// sent, the server answers with a non-success status, or the response
/// body does not parse.
pub async fn ask(question: &str) -> Result<AskResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/ask")
            .json(&serde_json::json!({ "question": question }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_status_message(resp.status()));
        }
        resp.json::<AskResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err("not available on server".to_owned())
    }
}

/// Request a summary of an answer via `POST /api/summarize`.
///
/// # Errors
///
/// Same failure modes as [`ask`].
pub async fn summarize(answer: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/summarize")
            .json(&serde_json::json!({ "answer": answer }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(http_status_message(resp.status()));
        }
        let body: SummarizeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.summary)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = answer;
        Err("not available on server".to_owned())
    }
}
