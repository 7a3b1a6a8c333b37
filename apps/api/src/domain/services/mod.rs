// Service ports for the outbound collaborators, plus the template processor
// that drives them

pub mod completion;
pub mod search;
pub mod template_processor;

pub use completion::{CompletionClient, CompletionError};
pub use search::{SearchResult, WebSearch, SEARCH_UNAVAILABLE};
pub use template_processor::{ProcessError, TemplateProcessor};
