// Prompt template domain module
// Contains the template entity plus its creation and patch inputs

#![allow(clippy::module_inception)]

pub mod prompt;

pub use prompt::{NewPrompt, PromptPatch, PromptTemplate};
