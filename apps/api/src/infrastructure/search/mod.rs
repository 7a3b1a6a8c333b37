// Web search backends

pub mod brave;

pub use brave::{BraveSearchClient, DisabledSearch};
