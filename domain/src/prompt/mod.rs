//! Prompt templates for the chat pipeline.

pub mod template;

pub use template::PromptTemplate;
