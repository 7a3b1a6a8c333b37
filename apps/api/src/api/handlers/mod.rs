pub mod auth;
pub mod process;
pub mod prompts;
