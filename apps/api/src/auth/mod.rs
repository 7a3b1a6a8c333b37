// Authentication primitives: password hashing, JWT tokens and admin provisioning

pub mod bootstrap;
pub mod jwt;
pub mod password;
