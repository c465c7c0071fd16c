//! Hosting domain.
//!
//! A published page set is a [`HostedSite`]: immutable, identified by a
//! generated [`SiteId`], and described by [`SiteMetadata`]. Listings carry the
//! lighter [`SiteSummary`].

mod entities;
mod metadata;

pub use entities::{HostedSite, SiteId, SiteSummary};
pub use metadata::{MetadataDraft, SiteMetadata};
