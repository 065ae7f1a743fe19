//! Quick action suggestions shown on a fresh chat
//!
//! Clicking one fills the draft; it still goes through the normal submit
//! guard, so nothing is sent while busy or disconnected.

use crate::session::QUICK_ACTIONS;
use dioxus::prelude::*;

#[component]
pub fn QuickActions(on_pick: EventHandler<String>) -> Element {
    rsx! {
        div { class: "quick-actions",
            p { class: "quick-actions-hint", "Try these quick actions:" }
            for action in QUICK_ACTIONS.iter() {
                button {
                    class: "quick-action",
                    onclick: move |_| on_pick.call(action.to_string()),
                    "{action}"
                }
            }
        }
    }
}
