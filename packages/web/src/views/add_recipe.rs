//! Add-recipe page: the submission form with text/audio/video content tabs.

use dioxus::prelude::*;
use store::{MediaType, RecipeDraft, TagInput};
use ui::components::{Button, ButtonVariant, Input, Textarea};

use crate::Route;

#[component]
pub fn AddRecipe() -> Element {
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut source = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut instructions = use_signal(String::new);
    let mut ingredients = use_signal(String::new);
    let mut prep_time = use_signal(String::new);
    let mut cook_time = use_signal(String::new);
    let mut servings = use_signal(String::new);
    let mut media_tab = use_signal(|| MediaType::Text);
    let mut image_preview = use_signal(|| Option::<String>::None);
    let mut media_content = use_signal(|| Option::<String>::None);
    let mut media_name = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Read the uploaded image into a data-URL for preview and storage.
    let handle_image_upload = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            spawn(async move {
                if let Some(name) = file_engine.files().first().cloned() {
                    if let Some(bytes) = file_engine.read_file(&name).await {
                        image_preview.set(Some(store::data_url(&name, &bytes)));
                    }
                }
            });
        }
    };

    let handle_media_upload = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            spawn(async move {
                if let Some(name) = file_engine.files().first().cloned() {
                    if let Some(bytes) = file_engine.read_file(&name).await {
                        media_content.set(Some(store::data_url(&name, &bytes)));
                        media_name.set(Some(name));
                    }
                }
            });
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let draft = RecipeDraft {
            title: title(),
            description: description(),
            source: source(),
            tags: TagInput::from(tags().as_str()),
            image_url: image_url(),
            uploaded_image: image_preview(),
            media_type: media_tab(),
            media_content: media_content(),
            instructions: instructions(),
            ingredients: ingredients(),
            prep_time: prep_time(),
            cook_time: cook_time(),
            servings: servings(),
        };

        if let Err(invalid) = draft.validate() {
            error.set(Some(invalid.to_string()));
            return;
        }

        match ui::recipe_book().save(&draft) {
            Ok(recipe) => {
                tracing::info!("Recipe added: {}", recipe.title);
                nav.push(Route::Home {});
            }
            Err(e) => {
                tracing::error!("Failed to save recipe: {e}");
                error.set(Some(
                    "There was a problem saving your recipe. Please try again.".to_string(),
                ));
            }
        }
    };

    rsx! {
        main {
            class: "page",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| { nav.push(Route::Home {}); },
                "← Back to Home"
            }

            div {
                class: "card add-recipe-card",
                h1 { "Add New Recipe" }
                p { class: "section-tagline", "Share your culinary creations with the community" }

                form {
                    class: "add-recipe-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { "Recipe Title" }
                    Input {
                        placeholder: "Delicious Chocolate Cake",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    label { "Short Description" }
                    Textarea {
                        placeholder: "A brief description of your recipe",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }

                    div {
                        class: "form-row",
                        div {
                            label { "Source (Optional)" }
                            Input {
                                placeholder: "Family recipe, website, etc.",
                                value: source(),
                                oninput: move |evt: FormEvent| source.set(evt.value()),
                            }
                        }
                        div {
                            label { "Tags (comma separated)" }
                            Input {
                                placeholder: "Dessert, Chocolate, Easy",
                                value: tags(),
                                oninput: move |evt: FormEvent| tags.set(evt.value()),
                            }
                        }
                    }

                    label { "Recipe Image" }
                    div {
                        class: "form-row",
                        div {
                            Input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_image_upload,
                            }
                            p { class: "form-hint", "Or provide an image URL below" }
                        }
                        Input {
                            placeholder: "https://example.com/image.jpg",
                            value: image_url(),
                            oninput: move |evt: FormEvent| image_url.set(evt.value()),
                        }
                    }
                    if let Some(preview) = image_preview() {
                        div {
                            class: "image-preview",
                            img { src: "{preview}", alt: "Preview" }
                        }
                    }

                    label { "Recipe Content" }
                    div {
                        class: "tabs",
                        for media in [MediaType::Text, MediaType::Audio, MediaType::Video] {
                            button {
                                class: if media_tab() == media { "tab tab-active" } else { "tab" },
                                r#type: "button",
                                onclick: move |_| media_tab.set(media),
                                {media.label()}
                            }
                        }
                    }

                    {match media_tab() {
                        MediaType::Text => rsx! {
                            label { "Ingredients (one per line)" }
                            Textarea {
                                placeholder: "2 cups flour\n1 cup sugar\n3 eggs",
                                value: ingredients(),
                                oninput: move |evt: FormEvent| ingredients.set(evt.value()),
                            }
                            label { "Instructions (one step per line)" }
                            Textarea {
                                placeholder: "Preheat oven to 350°F\nMix dry ingredients\nAdd wet ingredients and stir",
                                value: instructions(),
                                oninput: move |evt: FormEvent| instructions.set(evt.value()),
                            }
                        },
                        MediaType::Audio => rsx! {
                            label { "Audio Recording" }
                            Input {
                                r#type: "file",
                                accept: "audio/*",
                                onchange: handle_media_upload,
                            }
                            p { class: "form-hint", "Upload an audio file of you explaining the recipe" }
                            if let Some(name) = media_name() {
                                p { class: "form-hint file-selected", "File selected: {name}" }
                            }
                        },
                        MediaType::Video => rsx! {
                            label { "Video Recording" }
                            Input {
                                r#type: "file",
                                accept: "video/*",
                                onchange: handle_media_upload,
                            }
                            p { class: "form-hint", "Upload a video demonstrating how to prepare the recipe" }
                            if let Some(name) = media_name() {
                                p { class: "form-hint file-selected", "File selected: {name}" }
                            }
                        },
                    }}

                    div {
                        class: "form-row form-row-3",
                        div {
                            label { "Prep Time (minutes)" }
                            Input {
                                r#type: "number",
                                placeholder: "30",
                                value: prep_time(),
                                oninput: move |evt: FormEvent| prep_time.set(evt.value()),
                            }
                        }
                        div {
                            label { "Cook Time (minutes)" }
                            Input {
                                r#type: "number",
                                placeholder: "45",
                                value: cook_time(),
                                oninput: move |evt: FormEvent| cook_time.set(evt.value()),
                            }
                        }
                        div {
                            label { "Servings" }
                            Input {
                                r#type: "number",
                                placeholder: "4",
                                value: servings(),
                                oninput: move |evt: FormEvent| servings.set(evt.value()),
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Save Recipe"
                    }
                }
            }
        }
    }
}
