use dioxus::prelude::*;

/// Home page hero banner.
#[component]
pub fn Hero(children: Element) -> Element {
    rsx! {
        div {
            class: "hero",
            div {
                class: "hero-inner",
                h2 { class: "hero-title", "Your Personal Recipe Collection" }
                p {
                    class: "hero-tagline",
                    "Save, organize, and share your favorite recipes. "
                    "Add recipes as text, voice recordings, or videos."
                }
                div {
                    class: "hero-actions",
                    {children}
                }
            }
        }
    }
}
