//! Prompt Deck API Library
//!
//! Admin-curated prompt templates with `{{input}}` / `{{search}}`
//! placeholders, resolved per request and sent to an LLM completion backend.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
