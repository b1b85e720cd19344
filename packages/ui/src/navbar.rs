use dioxus::prelude::*;

/// Top navigation bar; the app passes its route links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav { class: "navbar",
            {children}
        }
    }
}
