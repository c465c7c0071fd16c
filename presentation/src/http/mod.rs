//! HTTP API
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /api/chat` | [`handlers::chat`] |
//! | `POST /api/host` | [`handlers::host_site`] |
//! | `GET /api/sites` | [`handlers::list_sites`] |
//! | `GET /api/recentsites` | [`handlers::recent_sites`] |
//! | `GET /api/sites/:site_id` | [`handlers::get_site`] |
//! | `GET /health` | [`handlers::health`] |

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::router;
pub use state::AppState;
