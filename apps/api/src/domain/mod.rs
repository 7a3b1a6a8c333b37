// Domain layer module exports
// Following Hexagonal Architecture: entities, repository ports and service ports
// Domain is independent of infrastructure concerns

pub mod prompt;
pub mod repositories;
pub mod services;
pub mod user;
