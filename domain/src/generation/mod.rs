//! Model output for a chat turn.
//!
//! - [`decision::ImageDecision`]: whether new visual assets are needed
//! - [`response::GeneratorResponse`]: the page mutations proposed for a prompt
//! - [`response::CombinedResult`]: both, merged for the caller

pub mod decision;
pub mod response;
