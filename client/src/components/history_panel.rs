//! History list of successful question/answer exchanges.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// History panel — the cumulative record of successful asks, oldest first.
#[component]
pub fn HistoryPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="history-panel">
            <h2>"History"</h2>
            {move || {
                let history = session.get().history;
                if history.is_empty() {
                    return view! {
                        <p class="history-panel__empty">"No questions yet"</p>
                    }
                        .into_any();
                }

                view! {
                    <ul class="history-panel__list">
                        {history
                            .into_iter()
                            .map(|h| {
                                view! {
                                    <li class="history-panel__item">
                                        <strong>{h.question}</strong>
                                        ": "
                                        {h.answer}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
