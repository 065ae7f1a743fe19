//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::session::ChatSession;
use crate::storage::settings::{load_settings, AppSettings};
use crate::transport::HttpChatClient;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<HttpChatClient>,
    pub session: Signal<ChatSession>,
    pub settings: Signal<AppSettings>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        let settings = load_settings();
        let client = Arc::new(HttpChatClient::new(settings.api_base_url.as_str()));

        Self {
            client,
            session: Signal::new(ChatSession::new()),
            settings: Signal::new(settings),
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    rsx! {
        Layout {}
    }
}
