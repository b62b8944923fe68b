//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! All session data lives in one explicitly owned record (`SessionState`)
//! provided to components via Leptos context. Components never mutate
//! fields directly; every transition goes through a named method so the
//! update rules stay in one place and under test.

pub mod session;
