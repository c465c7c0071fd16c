//! Site storage adapters
//!
//! Both adapters share one key layout (see [`StorageLayout`]):
//!
//! ```text
//! {prefix}sites/{siteId}/site.json                 full HostedSite
//! {prefix}index/{invertedMillis}-{siteId}.json     SiteSummary
//! ```
//!
//! Index keys sort lexicographically newest-first, so a listing is a plain
//! ascending key scan and the cursor is the last key returned.

mod layout;
mod memory;
mod paging;

#[cfg(feature = "s3")]
mod s3;

pub use layout::StorageLayout;
pub use memory::InMemorySiteStore;

#[cfg(feature = "s3")]
pub use s3::{S3SiteStore, S3StoreConfig};
