//! Home page: hero, recipe search, and the catalog tabs.

use dioxus::prelude::*;
use store::Recipe;
use ui::components::{Button, ButtonVariant, Input};
use ui::{Hero, RecipeCard};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Popular,
    MyRecipes,
    Favorites,
    Shared,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Popular, Self::MyRecipes, Self::Favorites, Self::Shared];

    fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular Recipes",
            Self::MyRecipes => "My Recipes",
            Self::Favorites => "Favorites",
            Self::Shared => "Shared",
        }
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let recipes = use_signal(store::popular_recipes);
    let mut search = use_signal(String::new);
    let mut active_tab = use_signal(|| Tab::Popular);

    let all = recipes();
    let term = search();
    let filtered: Vec<Recipe> = store::filter_recipes(&all, &term)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        main {
            class: "page",
            Hero {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| { nav.push(Route::AddRecipe {}); },
                    "+ Add New Recipe"
                }
                Button { variant: ButtonVariant::Outline, "Browse Collections" }
            }

            div {
                class: "search-box",
                Input {
                    class: "search-input",
                    placeholder: "Search recipes by name, ingredients, or tags...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            div {
                class: "tabs",
                for tab in Tab::ALL {
                    button {
                        class: if active_tab() == tab { "tab tab-active" } else { "tab" },
                        onclick: move |_| active_tab.set(tab),
                        {tab.label()}
                    }
                }
            }

            {match active_tab() {
                Tab::Popular => rsx! {
                    section {
                        h2 { "Popular Recipes" }
                        p { class: "section-tagline", "Discover trending recipes from around the world" }
                        div {
                            class: "recipe-grid",
                            for recipe in filtered {
                                RecipeCard { recipe }
                            }
                        }
                    }
                },
                Tab::MyRecipes => rsx! {
                    section {
                        class: "empty-state",
                        h3 { "You haven't added any recipes yet" }
                        p { "Start building your collection by adding your favorite recipes" }
                        Button {
                            onclick: move |_| { nav.push(Route::AddRecipe {}); },
                            "+ Add Your First Recipe"
                        }
                    }
                },
                Tab::Favorites => rsx! {
                    section {
                        class: "empty-state",
                        h3 { "No favorite recipes yet" }
                        p { "Browse popular recipes and mark your favorites" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| active_tab.set(Tab::Popular),
                            "Browse Popular Recipes"
                        }
                    }
                },
                Tab::Shared => rsx! {
                    section {
                        class: "empty-state",
                        h3 { "No shared recipes yet" }
                        p { "Share your recipes with friends and family" }
                    }
                },
            }}
        }
    }
}
