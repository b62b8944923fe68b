//! Single-page Q&A screen.

use leptos::prelude::*;

use crate::components::ask_panel::AskPanel;
use crate::components::history_panel::HistoryPanel;

/// Home page — the whole app lives on this one screen.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"AI-Powered Q&A"</h1>
            <AskPanel/>
            <HistoryPanel/>
        </div>
    }
}
