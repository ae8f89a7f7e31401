//! # Domain models
//!
//! The record types persisted by the diary, plus the raw form payload used when
//! submitting a new recipe. The persisted types serialize with camelCase field
//! names so the stored JSON matches the original application's documents and
//! survives in place.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | One registered account, including the plain-text password (storing credentials securely is an explicit non-goal of this app). |
//! | [`CurrentSession`] | The single logged-in user's public profile projection, persisted separately from the account table and never carrying the password. |
//! | [`Recipe`] | One catalog entry, either seeded or user-submitted. |
//! | [`RecipeDraft`] | The add-recipe form as typed: free-text tags, newline-separated ingredients/instructions, optional uploaded media as data-URLs. |
//! | [`TagInput`] | Tag field input, either already split or a comma-separated string. |

use serde::{Deserialize, Serialize};

/// A registered account as stored in the account table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Creation timestamp in epoch milliseconds, doubling as the id.
    pub id: i64,
    pub username: String,
    /// Unique key of the account table (case-sensitive exact match).
    pub email: String,
    pub password: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// The logged-in user's projection, stored under its own key.
///
/// At most one exists at a time (single session per browser).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSession {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_logged_in: bool,
}

impl User {
    /// Project into the session record written at login.
    pub fn to_session(&self) -> CurrentSession {
        CurrentSession {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            is_logged_in: true,
        }
    }
}

/// How a recipe's content was captured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Text,
    Audio,
    Video,
}

impl MediaType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }
}

/// One catalog entry.
///
/// Seeded recipes carry only the core fields; the defaults keep older
/// documents without `instructions`/`mediaType`/… deserializing cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub source: String,
    pub image_url: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub media_type: MediaType,
    /// Data-URL of the uploaded audio/video content, when present.
    #[serde(default)]
    pub media_url: Option<String>,
}

/// Tag field input: either a pre-split sequence or a comma-separated string.
#[derive(Clone, Debug, PartialEq)]
pub enum TagInput {
    Split(Vec<String>),
    Text(String),
}

impl Default for TagInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl TagInput {
    /// Normalize into an ordered sequence of trimmed, non-empty tags.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Split(tags) => tags
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            Self::Text(raw) => raw
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl From<&str> for TagInput {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

impl From<Vec<String>> for TagInput {
    fn from(tags: Vec<String>) -> Self {
        Self::Split(tags)
    }
}

/// The add-recipe form as submitted, before normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    /// Empty means "no source given"; defaults to `"Personal Recipe"` on save.
    pub source: String,
    pub tags: TagInput,
    /// Explicit image URL field; may be empty.
    pub image_url: String,
    /// Data-URL of a locally uploaded image. Wins over `image_url`.
    pub uploaded_image: Option<String>,
    pub media_type: MediaType,
    /// Data-URL of the uploaded audio/video file.
    pub media_content: Option<String>,
    /// One step per line.
    pub instructions: String,
    /// One ingredient per line.
    pub ingredients: String,
    pub prep_time: String,
    pub cook_time: String,
    /// Raw form value; parsed to an integer on save.
    pub servings: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_input_splits_and_trims() {
        let tags = TagInput::from("Dessert, Chocolate, Easy").normalize();
        assert_eq!(tags, vec!["Dessert", "Chocolate", "Easy"]);
    }

    #[test]
    fn test_tag_input_drops_empty_segments() {
        assert!(TagInput::from("").normalize().is_empty());
        assert!(TagInput::from("  ,  ,").normalize().is_empty());
        assert_eq!(TagInput::from("a,,b").normalize(), vec!["a", "b"]);
    }

    #[test]
    fn test_tag_input_pre_split_preserves_order() {
        let tags = TagInput::from(vec![" Italian ".to_string(), "Pasta".to_string()]).normalize();
        assert_eq!(tags, vec!["Italian", "Pasta"]);
    }

    #[test]
    fn test_user_session_projection_drops_password() {
        let user = User {
            id: 42,
            username: "julia".to_string(),
            email: "julia@example.com".to_string(),
            password: "bonappetit".to_string(),
            created_at: "2024-05-01T12:00:00.000Z".to_string(),
        };
        let session = user.to_session();
        assert_eq!(session.id, 42);
        assert_eq!(session.email, "julia@example.com");
        assert!(session.is_logged_in);
        // The session JSON must never leak the password.
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("bonappetit"));
        assert!(json.contains("\"isLoggedIn\":true"));
    }

    #[test]
    fn test_recipe_wire_format_is_camel_case() {
        let recipe = Recipe {
            id: 1,
            title: "Toast".to_string(),
            description: "Bread, but better.".to_string(),
            source: "Personal Recipe".to_string(),
            image_url: "https://example.com/toast.jpg".to_string(),
            tags: vec!["Breakfast".to_string()],
            instructions: vec![],
            ingredients: vec![],
            prep_time: None,
            cook_time: None,
            servings: Some(1),
            media_type: MediaType::Text,
            media_url: None,
        };
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"mediaType\":\"text\""));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_recipe_deserializes_seed_shaped_documents() {
        // Seeded entries have no instructions/ingredients/media fields.
        let json = r#"{
            "id": 1,
            "title": "Classic Spaghetti Carbonara",
            "description": "A traditional Italian pasta dish.",
            "source": "Food Network",
            "imageUrl": "https://example.com/carbonara.jpg",
            "tags": ["Italian", "Pasta", "Quick"]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.instructions.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.media_type, MediaType::Text);
        assert_eq!(recipe.servings, None);
    }
}
