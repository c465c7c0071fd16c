//! Shared handler state

use sitewright_application::{HandleChatUseCase, SiteHostingService};
use std::sync::Arc;

/// Use cases available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<HandleChatUseCase>,
    pub hosting: Arc<SiteHostingService>,
}

impl AppState {
    pub fn new(chat: HandleChatUseCase, hosting: SiteHostingService) -> Self {
        Self {
            chat: Arc::new(chat),
            hosting: Arc::new(hosting),
        }
    }
}
