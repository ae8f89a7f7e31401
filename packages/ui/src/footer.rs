use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-brand",
                h3 { "Cooking Diary" }
                p { "Your personal recipe collection and cooking journal." }
            }
            div {
                class: "footer-links",
                h4 { "Quick Links" }
                a { href: "/", "Home" }
                a { href: "/", "Browse Recipes" }
                a { href: "/add-recipe", "Add New Recipe" }
            }
        }
    }
}
