//! Chat input row with send button
//!
//! The draft lives in the session, not here: the input echoes `value` and
//! forwards edits through `on_input`, so the session stays the single
//! source of truth.

use dioxus::prelude::*;

#[component]
pub fn ChatInput(
    value: String,
    disabled: bool,
    busy: bool,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    let can_send = !disabled && !value.trim().is_empty();

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if can_send {
                on_send.call(());
            }
        }
    };

    let send_class = if can_send {
        "send-button ready"
    } else {
        "send-button"
    };

    rsx! {
        div { class: "input-row",
            input {
                r#type: "text",
                class: "chat-input",
                placeholder: "Type your message...",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: handle_keydown,
                disabled: disabled,
            }
            button {
                class: "{send_class}",
                title: "Send (Enter)",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        on_send.call(());
                    }
                },
                if busy {
                    span { class: "send-spinner" }
                } else {
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        line { x1: "12", y1: "19", x2: "12", y2: "5" }
                        polyline { points: "5 12 12 5 19 12" }
                    }
                }
            }
        }
    }
}
