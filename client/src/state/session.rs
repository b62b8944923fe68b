//! Session state for the Q&A interaction flow.
//!
//! DESIGN
//! ======
//! The record is a flat set of fields, each with its own update rule. The
//! only cross-field rule: a successful ask clears the summary, because a
//! summary is only ever valid for the answer it was derived from. There is
//! no in-flight guard; when two asks overlap, the last response to resolve
//! wins the final answer/history update.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Answer text shown when the user submits a blank question.
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";

/// One successful question/answer exchange.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QaExchange {
    pub question: String,
    pub answer: String,
}

/// Session-scoped Q&A state, owned by the root component for the lifetime
/// of one loaded instance of the app.
///
/// `history` is append-only and chronological: it records successful asks
/// in the order their responses were applied, never reordered or deduped.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub question: String,
    pub answer: String,
    pub summary: String,
    pub history: Vec<QaExchange>,
}

impl SessionState {
    /// Overwrite the draft question with the raw input text.
    ///
    /// No trimming or validation happens here; the blank check runs only
    /// at submit time.
    pub fn set_question(&mut self, text: &str) {
        self.question = text.to_owned();
    }

    /// True when the draft question is blank after trimming.
    #[must_use]
    pub fn question_is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }

    /// Reject a blank submission: a fixed validation message replaces the
    /// answer, and nothing else changes. Terminal for that invocation —
    /// no gateway call follows.
    pub fn reject_empty_submit(&mut self) {
        self.answer = EMPTY_QUESTION_MESSAGE.to_owned();
    }

    /// Record a successful ask: show the answer, append the exchange to
    /// history, and drop the summary.
    pub fn apply_answer(&mut self, exchange: QaExchange) {
        self.answer = exchange.answer.clone();
        self.history.push(exchange);
        self.summary.clear();
    }

    /// Record a failed ask. History keeps only successful exchanges, and
    /// the previous summary stays as-is even though it refers to a prior
    /// answer — accepted behavior, not an oversight.
    pub fn apply_ask_error(&mut self, message: &str) {
        self.answer = gateway_error_text(message);
    }

    /// True when there is an answer to summarize.
    #[must_use]
    pub fn can_summarize(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Record a successful summary of the current answer.
    pub fn apply_summary(&mut self, text: String) {
        self.summary = text;
    }

    /// Record a failed summary request.
    pub fn apply_summary_error(&mut self, message: &str) {
        self.summary = gateway_error_text(message);
    }
}

/// User-visible rendering of a gateway failure description.
fn gateway_error_text(message: &str) -> String {
    format!("Error: {message}")
}
