//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the Q&A surfaces while reading/writing the shared
//! session state from the Leptos context provider.

pub mod ask_panel;
pub mod history_panel;
