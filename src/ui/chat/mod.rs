//! Chat interface components
//!
//! Contains the chat view, message display, input, and quick actions.
//! The view holds the session in a signal; every transition is one signal
//! write, so re-renders follow the transition order exactly.

pub mod input;
pub mod message;
pub mod quick_actions;

use dioxus::prelude::*;
use input::ChatInput;
use message::MessageBubble;
use quick_actions::QuickActions;

use crate::app::AppState;
use crate::transport::{exchange, ChatTransport};

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session;

    // Handler for submitting the current draft. One spawned task per
    // accepted turn: one transport call, one settlement.
    let handle_send = {
        let session = session.clone();
        let client = app_state.client.clone();
        move |_: ()| {
            let mut session = session.clone();
            let outbound = session.write().submit();
            if let Some(outbound) = outbound {
                let client = client.clone();
                spawn(async move {
                    let outcome = exchange(client.as_ref(), &outbound).await;
                    session.write().settle(outbound.turn, outcome);
                });
            }
        }
    };

    // Handler for the manual connection retry (health probe)
    let handle_retry = {
        let session = session.clone();
        let client = app_state.client.clone();
        move |_| {
            let mut session = session.clone();
            let turn = session.write().begin_retry();
            if let Some(turn) = turn {
                let client = client.clone();
                spawn(async move {
                    let ok = client.check_health().await;
                    session.write().probe_settled(turn, ok);
                });
            }
        }
    };

    let handle_clear = {
        let session = session.clone();
        move |_| {
            let mut session = session.clone();
            session.write().clear();
        }
    };

    let handle_input = {
        let session = session.clone();
        move |text: String| {
            let mut session = session.clone();
            session.write().set_draft(text);
        }
    };

    let handle_pick = {
        let session = session.clone();
        move |action: String| {
            let mut session = session.clone();
            session.write().set_draft(action);
        }
    };

    let (connected, busy, message_count, draft) = {
        let s = session.read();
        (
            s.is_connected(),
            s.is_busy(),
            s.messages().len(),
            s.draft().to_string(),
        )
    };

    let status_label = if connected { "Connected" } else { "Disconnected" };
    let dot_class = if connected {
        "status-dot online"
    } else {
        "status-dot offline"
    };
    let input_disabled = busy || !connected;

    rsx! {
        section { class: "chat-card",

            // Header: title, connectivity indicator, retry + clear controls
            header { class: "chat-header",
                div { class: "chat-title",
                    div { class: "chat-badge", "💬" }
                    div {
                        h1 { class: "chat-heading", "AI Assistant" }
                        div { class: "chat-status",
                            span { class: "{dot_class}" }
                            span { "{status_label}" }
                        }
                    }
                }
                div { class: "chat-controls",
                    if !connected {
                        button {
                            class: "control-button",
                            title: "Retry connection",
                            disabled: busy,
                            onclick: handle_retry,
                            "↻"
                        }
                    }
                    button {
                        class: "control-button",
                        title: "Clear chat",
                        onclick: handle_clear,
                        "🗑"
                    }
                }
            }

            // Message list
            div { class: "messages",
                for msg in session.read().messages().iter() {
                    MessageBubble { key: "{msg.id}", message: msg.clone() }
                }
                if busy {
                    div { class: "typing-indicator",
                        span { class: "typing-dot" }
                        span { class: "typing-dot" }
                        span { class: "typing-dot" }
                        span { class: "typing-label", "Thinking..." }
                    }
                }
            }

            // Suggestions, only while the chat holds just the greeting
            if message_count <= 1 {
                QuickActions { on_pick: handle_pick }
            }

            footer { class: "chat-footer",
                ChatInput {
                    value: draft,
                    disabled: input_disabled,
                    busy: busy,
                    on_input: handle_input,
                    on_send: handle_send,
                }
                if !connected {
                    p { class: "offline-banner", "⚠️ Not connected to server. Please check your API." }
                }
            }
        }
    }
}
