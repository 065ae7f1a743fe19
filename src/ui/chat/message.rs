//! Message bubble rendering

use crate::types::message::{Message, Role};
use dioxus::prelude::*;

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let from_user = message.role == Role::User;
    let row_class = if from_user {
        "message-row user"
    } else {
        "message-row assistant"
    };
    let time_label = message.time_label();

    rsx! {
        div { class: "{row_class}",
            if !from_user {
                div { class: "avatar", "🤖" }
            }
            div { class: "bubble",
                p { class: "bubble-text", "{message.text}" }
                span { class: "bubble-time", "{time_label}" }
            }
            if from_user {
                div { class: "avatar", "🧑" }
            }
        }
    }
}
