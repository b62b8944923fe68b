//! Networking modules for the backend Q&A API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the shared wire schema.
//! Both endpoints are plain request/response calls; failures surface as
//! description strings the session state renders verbatim.

pub mod api;
pub mod types;
