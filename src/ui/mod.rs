//! UI components for chatdesk
//!
//! This module contains all user interface components built with Dioxus.
//! The components only render session state and forward events; all chat
//! behavior lives in [`crate::session`] and [`crate::transport`].

pub mod chat;
pub mod navbar;

use chat::ChatView;
use dioxus::prelude::*;
use navbar::Navbar;

const STYLE: &str = r#"
* { box-sizing: border-box; margin: 0; }
body {
    font-family: 'Segoe UI', system-ui, sans-serif;
    background: #1a1d21;
    color: #e8e6e3;
    height: 100vh;
}
.app-shell { display: flex; flex-direction: column; height: 100vh; }
.navbar {
    display: flex; align-items: center; justify-content: space-between;
    padding: 10px 24px; background: #0f1113; box-shadow: 0 1px 4px rgba(0,0,0,0.4);
}
.navbar-brand { font-weight: 700; font-size: 17px; }
.navbar-links { display: flex; gap: 18px; }
.nav-link { color: #9aa0a6; text-decoration: none; font-size: 14px; }
.nav-link.active, .nav-link:hover { color: #e8e6e3; }
.chat-card {
    display: flex; flex-direction: column; flex: 1; min-height: 0;
    max-width: 640px; width: 100%; margin: 16px auto;
    background: #22262b; border-radius: 12px; overflow: hidden;
    box-shadow: 0 8px 24px rgba(0,0,0,0.5);
}
.chat-header {
    display: flex; align-items: center; justify-content: space-between;
    padding: 12px 16px; border-bottom: 1px solid #2e3338;
}
.chat-title { display: flex; align-items: center; gap: 10px; }
.chat-badge {
    width: 36px; height: 36px; border-radius: 8px; background: #2a6b7c;
    display: flex; align-items: center; justify-content: center; font-size: 18px;
}
.chat-heading { font-size: 15px; font-weight: 600; }
.chat-status { display: flex; align-items: center; gap: 6px; font-size: 12px; color: #9aa0a6; }
.status-dot { width: 8px; height: 8px; border-radius: 50%; display: inline-block; }
.status-dot.online { background: #34a853; }
.status-dot.offline { background: #ea4335; }
.chat-controls { display: flex; gap: 8px; }
.control-button {
    background: transparent; border: 1px solid #3a4046; border-radius: 6px;
    color: #e8e6e3; padding: 6px 10px; cursor: pointer; font-size: 14px;
}
.control-button:disabled { opacity: 0.4; cursor: not-allowed; }
.messages { flex: 1; min-height: 0; overflow-y: auto; padding: 16px; }
.message-row { display: flex; gap: 8px; margin-bottom: 12px; }
.message-row.user { justify-content: flex-end; }
.avatar {
    width: 30px; height: 30px; border-radius: 50%; background: #2e3338;
    display: flex; align-items: center; justify-content: center; font-size: 15px;
    flex-shrink: 0;
}
.bubble { max-width: 75%; padding: 8px 12px; border-radius: 10px; background: #2e3338; }
.message-row.user .bubble { background: #2a6b7c; }
.bubble-text { font-size: 14px; line-height: 1.4; white-space: pre-wrap; }
.bubble-time { display: block; margin-top: 4px; font-size: 10px; color: #9aa0a6; }
.typing-indicator { display: flex; align-items: center; gap: 5px; padding: 4px 2px; }
.typing-dot {
    width: 6px; height: 6px; border-radius: 50%; background: #9aa0a6;
    animation: bounce 1s infinite alternate;
}
.typing-dot:nth-child(2) { animation-delay: 0.15s; }
.typing-dot:nth-child(3) { animation-delay: 0.3s; }
.typing-label { font-size: 12px; color: #9aa0a6; margin-left: 4px; }
@keyframes bounce { to { transform: translateY(-4px); } }
.quick-actions { padding: 0 16px 8px; }
.quick-actions-hint { font-size: 12px; color: #9aa0a6; margin-bottom: 6px; }
.quick-action {
    background: transparent; border: 1px solid #2a6b7c; color: #7fb6c4;
    border-radius: 14px; padding: 5px 10px; margin: 0 6px 6px 0;
    font-size: 12px; cursor: pointer;
}
.quick-action:hover { background: #2a6b7c; color: #e8e6e3; }
.chat-footer { border-top: 1px solid #2e3338; padding: 12px 16px; }
.input-row { display: flex; gap: 8px; }
.chat-input {
    flex: 1; background: #1a1d21; border: 1px solid #3a4046; border-radius: 20px;
    color: #e8e6e3; padding: 10px 16px; font-size: 14px; outline: none;
}
.chat-input:disabled { opacity: 0.5; }
.send-button {
    width: 40px; height: 40px; border-radius: 50%; border: none;
    background: #2e3338; color: #e8e6e3; cursor: not-allowed; opacity: 0.4;
    display: flex; align-items: center; justify-content: center;
}
.send-button.ready { background: #2a6b7c; cursor: pointer; opacity: 1; }
.send-spinner {
    width: 14px; height: 14px; border-radius: 50%;
    border: 2px solid #9aa0a6; border-top-color: transparent;
    animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.offline-banner { margin-top: 8px; font-size: 12px; color: #ea4335; }
"#;

#[component]
pub fn Layout() -> Element {
    rsx! {
        style { {STYLE} }
        div { class: "app-shell",
            Navbar {}
            ChatView {}
        }
    }
}
