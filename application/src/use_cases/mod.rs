//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_images;
pub mod generate_site;
pub mod handle_chat;
pub mod host_site;

#[cfg(test)]
pub(crate) mod test_support;
