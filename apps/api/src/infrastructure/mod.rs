// Infrastructure layer module
// Contains storage adapters and external service integrations
// Follows Hexagonal Architecture

pub mod llm;
pub mod repositories;
pub mod search;
