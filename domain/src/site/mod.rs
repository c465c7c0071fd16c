//! Site domain.
//!
//! - [`page::Page`]: a named HTML document at a path
//! - [`change::SiteChange`]: a mutation proposed by the generator
//! - [`page::apply_changes`]: how a page set evolves under those mutations

pub mod change;
pub mod page;
