//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the retrieval and answer-generation logic so route
//! handlers can stay focused on request validation and status mapping.

pub mod answer;
pub mod retrieval;
