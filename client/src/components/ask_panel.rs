//! Question input, answer display, and on-demand summary.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::session::QaExchange;
use crate::state::session::SessionState;

/// Ask panel — question input, answer section, and summarize controls.
///
/// Submission follows the session rules: a blank question is rejected
/// locally without a network call, a successful ask clears the summary,
/// and gateway failures render as `Error: ...` strings in place of
/// content. Overlapping requests are not guarded; the last response to
/// resolve wins.
#[component]
pub fn AskPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let do_ask = move || {
        if session.with_untracked(SessionState::question_is_blank) {
            session.update(SessionState::reject_empty_submit);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let question = session.with_untracked(|s| s.question.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::ask(&question).await {
                    Ok(resp) => session.update(|s| {
                        s.apply_answer(QaExchange { question: resp.question, answer: resp.answer });
                    }),
                    Err(message) => session.update(|s| s.apply_ask_error(&message)),
                }
            });
        }
    };

    let do_summarize = move || {
        if !session.with_untracked(SessionState::can_summarize) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            // Summarize the answer value as of this click, even if a
            // pending ask later replaces it.
            let answer = session.with_untracked(|s| s.answer.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::summarize(&answer).await {
                    Ok(summary) => session.update(|s| s.apply_summary(summary)),
                    Err(message) => session.update(|s| s.apply_summary_error(&message)),
                }
            });
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_ask();
        }
    };

    view! {
        <div class="ask-panel">
            <div class="ask-panel__input-row">
                <input
                    class="ask-panel__input"
                    type="text"
                    placeholder="Ask a question..."
                    prop:value=move || session.get().question
                    on:input=move |ev| session.update(|s| s.set_question(&event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| do_ask()>
                    "Ask"
                </button>
            </div>

            <section class="ask-panel__answer">
                <h2>"Answer:"</h2>
                <p>{move || session.get().answer}</p>

                <Show when=move || session.with(SessionState::can_summarize)>
                    <button class="btn ask-panel__summarize" on:click=move |_| do_summarize()>
                        "Summarize"
                    </button>
                </Show>

                <Show when=move || session.with(|s| !s.summary.is_empty())>
                    <div class="ask-panel__summary">
                        <h3>"Summary:"</h3>
                        <p>{move || session.get().summary}</p>
                    </div>
                </Show>
            </section>
        </div>
    }
}
