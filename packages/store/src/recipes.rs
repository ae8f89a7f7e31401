//! # Recipe record store
//!
//! [`RecipeBook`] owns the `recipes` collection: every user-submitted
//! [`Recipe`], appended on save and never edited or deleted. The whole
//! collection is read, extended in memory, and written back within one call,
//! so the last writer wins at interaction granularity (cross-tab interleaving
//! is an acknowledged gap, not a guarantee).
//!
//! Saving normalizes the raw [`RecipeDraft`] exactly as the submission form
//! expects: tags split and trimmed, instructions and ingredients split on
//! newlines, the stored image chosen by precedence (uploaded image, then the
//! URL field, then a generated fallback keyed off the first tag), and the
//! source defaulting to `"Personal Recipe"`.
//!
//! Submitted recipes are not associated with the logged-in user; there is no
//! ownership column to filter on.

use crate::clock::{Clock, WallClock};
use crate::kv::{read_json, write_json, KeyValueStore, StoreError};
use crate::models::{Recipe, RecipeDraft};

/// Storage key of the recipe collection.
pub const RECIPES_KEY: &str = "recipes";

const DEFAULT_SOURCE: &str = "Personal Recipe";

/// Append-only store of user-submitted recipes.
pub struct RecipeBook<S, C = WallClock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore> RecipeBook<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: WallClock,
        }
    }
}

impl<S: KeyValueStore, C: Clock> RecipeBook<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Normalize `draft` into a [`Recipe`], append it to the stored collection,
    /// and persist the full updated collection.
    pub fn save(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let mut recipes = self.all()?;

        let tags = draft.tags.normalize();
        let source = if draft.source.trim().is_empty() {
            DEFAULT_SOURCE.to_string()
        } else {
            draft.source.trim().to_string()
        };

        let recipe = Recipe {
            id: self.clock.now_millis(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            source,
            image_url: choose_image(draft, &tags),
            instructions: split_lines(&draft.instructions),
            ingredients: split_lines(&draft.ingredients),
            prep_time: non_empty(&draft.prep_time),
            cook_time: non_empty(&draft.cook_time),
            servings: draft.servings.trim().parse().ok(),
            media_type: draft.media_type,
            media_url: draft.media_content.clone(),
            tags,
        };

        recipes.push(recipe.clone());
        write_json(&self.store, RECIPES_KEY, &recipes)?;

        Ok(recipe)
    }

    /// Every stored recipe, in submission order. An absent key reads as empty.
    pub fn all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(read_json(&self.store, RECIPES_KEY)?.unwrap_or_default())
    }
}

/// Stored image precedence: uploaded image, then the URL field, then a stock
/// photo URL keyed off the first tag.
fn choose_image(draft: &RecipeDraft, tags: &[String]) -> String {
    if let Some(uploaded) = &draft.uploaded_image {
        return uploaded.clone();
    }
    let url = draft.image_url.trim();
    if !url.is_empty() {
        return url.to_string();
    }
    let keyword = tags
        .first()
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| "food".to_string());
    format!("https://source.unsplash.com/featured/800x600/?{keyword},cooking")
}

/// Split a free-text field into one entry per line; empty input yields none.
fn split_lines(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.lines().map(str::to_string).collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Case-insensitive catalog search over title, description, and tags.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.iter().collect();
    }
    recipes
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
                || r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::models::{MediaType, TagInput};
    use crate::MemoryStore;

    fn book(store: &MemoryStore) -> RecipeBook<&MemoryStore, ManualClock> {
        RecipeBook::with_clock(store, ManualClock::new(1_700_000_000_000))
    }

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Chocolate Cake".to_string(),
            description: "Rich, moist, and dangerously easy.".to_string(),
            tags: TagInput::from("Dessert, Chocolate, Easy"),
            ..RecipeDraft::default()
        }
    }

    #[test]
    fn test_save_normalizes_tags() {
        let store = MemoryStore::new();
        let recipe = book(&store).save(&draft()).unwrap();
        assert_eq!(recipe.tags, vec!["Dessert", "Chocolate", "Easy"]);
    }

    #[test]
    fn test_save_splits_ingredients_and_defaults_instructions() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.ingredients = "2 cups flour\n1 cup sugar".to_string();

        let recipe = book(&store).save(&d).unwrap();
        assert_eq!(recipe.ingredients, vec!["2 cups flour", "1 cup sugar"]);
        assert_eq!(recipe.instructions, Vec::<String>::new());
    }

    #[test]
    fn test_save_defaults_source_and_generates_fallback_image() {
        let store = MemoryStore::new();
        let recipe = book(&store).save(&draft()).unwrap();

        assert_eq!(recipe.source, "Personal Recipe");
        assert_eq!(
            recipe.image_url,
            "https://source.unsplash.com/featured/800x600/?dessert,cooking"
        );
    }

    #[test]
    fn test_fallback_image_without_tags_uses_food() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.tags = TagInput::from("");

        let recipe = book(&store).save(&d).unwrap();
        assert_eq!(
            recipe.image_url,
            "https://source.unsplash.com/featured/800x600/?food,cooking"
        );
    }

    #[test]
    fn test_image_precedence_uploaded_over_url() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.image_url = "https://example.com/cake.jpg".to_string();

        let from_url = book(&store).save(&d).unwrap();
        assert_eq!(from_url.image_url, "https://example.com/cake.jpg");

        d.uploaded_image = Some("data:image/png;base64,AAAA".to_string());
        let from_upload = book(&store).save(&d).unwrap();
        assert_eq!(from_upload.image_url, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_save_parses_optional_details() {
        let store = MemoryStore::new();
        let mut d = draft();
        d.prep_time = "30".to_string();
        d.cook_time = "  ".to_string();
        d.servings = "4".to_string();
        d.media_type = MediaType::Audio;
        d.media_content = Some("data:audio/mpeg;base64,AAAA".to_string());

        let recipe = book(&store).save(&d).unwrap();
        assert_eq!(recipe.prep_time.as_deref(), Some("30"));
        assert_eq!(recipe.cook_time, None);
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.media_type, MediaType::Audio);
        assert_eq!(recipe.media_url.as_deref(), Some("data:audio/mpeg;base64,AAAA"));
    }

    #[test]
    fn test_saves_append_in_order_and_roundtrip() {
        let store = MemoryStore::new();
        let recipes = book(&store);

        let first = recipes.save(&draft()).unwrap();
        let mut second_draft = draft();
        second_draft.title = "Lemon Tart".to_string();
        let second = recipes.save(&second_draft).unwrap();
        assert_ne!(first.id, second.id);

        // Reload through a fresh book: deep-equal to what was written.
        let reloaded = RecipeBook::new(&store).all().unwrap();
        assert_eq!(reloaded, vec![first, second]);
    }

    #[test]
    fn test_all_on_empty_store() {
        let store = MemoryStore::new();
        assert!(book(&store).all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_collection_surfaces_as_store_error() {
        let store = MemoryStore::new();
        store.set(RECIPES_KEY, "not json").unwrap();

        let err = book(&store).save(&draft()).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_filter_matches_title_description_and_tags() {
        let store = MemoryStore::new();
        let recipes = book(&store);
        recipes.save(&draft()).unwrap();
        let mut other = draft();
        other.title = "Beef Stew".to_string();
        other.description = "Slow-cooked winter comfort food.".to_string();
        other.tags = TagInput::from("Dinner, Hearty");
        recipes.save(&other).unwrap();
        let all = recipes.all().unwrap();

        let by_title = filter_recipes(&all, "beef");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Beef Stew");

        let by_tag = filter_recipes(&all, "CHOCOLATE");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Chocolate Cake");

        let by_description = filter_recipes(&all, "comfort");
        assert_eq!(by_description.len(), 1);

        assert_eq!(filter_recipes(&all, "").len(), 2);
        assert!(filter_recipes(&all, "sushi").is_empty());
    }
}
