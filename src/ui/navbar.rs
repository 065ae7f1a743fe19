//! Static top navigation bar

use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "MyApp" }
            div { class: "navbar-links",
                a { class: "nav-link active", href: "#", "Home" }
                a { class: "nav-link", href: "#", "About" }
                a { class: "nav-link", href: "#", "Contact" }
            }
        }
    }
}
