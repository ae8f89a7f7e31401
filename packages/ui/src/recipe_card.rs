use dioxus::prelude::*;
use store::{MediaType, Recipe};

/// One catalog entry in the home page grid.
#[component]
pub fn RecipeCard(recipe: Recipe) -> Element {
    let media_label = recipe.media_type.label();

    rsx! {
        article {
            class: "recipe-card",
            div {
                class: "recipe-card-image",
                img { src: "{recipe.image_url}", alt: "{recipe.title}" }
            }
            div {
                class: "recipe-card-header",
                h3 { "{recipe.title}" }
                p { class: "recipe-card-source", "Source: {recipe.source}" }
            }
            div {
                class: "recipe-card-body",
                p { "{recipe.description}" }
                div {
                    class: "recipe-card-tags",
                    for tag in &recipe.tags {
                        span { class: "tag", "{tag}" }
                    }
                }
                if recipe.media_type != MediaType::Text {
                    span { class: "media-badge", "{media_label} recipe" }
                }
                {match (recipe.media_type, &recipe.media_url) {
                    (MediaType::Audio, Some(url)) => rsx! {
                        audio { class: "recipe-card-media", src: "{url}", controls: true }
                    },
                    (MediaType::Video, Some(url)) => rsx! {
                        video { class: "recipe-card-media", src: "{url}", controls: true }
                    },
                    _ => rsx! {},
                }}
            }
        }
    }
}
