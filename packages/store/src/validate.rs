//! Form-level validation rules.
//!
//! These checks run before the core operations are invoked, so the auth service
//! and recipe book only ever see field values of acceptable length and format.
//! Each failure carries the user-facing message the form renders next to the
//! field.

use url::Url;

use crate::models::RecipeDraft;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Title must be at least 3 characters long")]
    TitleTooShort,
    #[error("Description must be at least 10 characters long")]
    DescriptionTooShort,
    #[error("Please enter a valid image URL")]
    InvalidImageUrl,
}

/// Validate the registration form fields.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if username.trim().chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Minimal email syntax check: one `@` with a dotted, non-empty domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(' ') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

impl RecipeDraft {
    /// Validate the add-recipe form fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().chars().count() < 3 {
            return Err(ValidationError::TitleTooShort);
        }
        if self.description.trim().chars().count() < 10 {
            return Err(ValidationError::DescriptionTooShort);
        }
        // The URL field is optional; when present it must at least parse.
        let image_url = self.image_url.trim();
        if !image_url.is_empty() && Url::parse(image_url).is_err() {
            return Err(ValidationError::InvalidImageUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_rules() {
        assert_eq!(
            validate_registration("jo", "jo@example.com", "longenough"),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate_registration("julia", "not-an-email", "longenough"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration("julia", "julia@example.com", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_registration("julia", "julia@example.com", "longenough"),
            Ok(())
        );
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("spaces in@local.com"));
    }

    #[test]
    fn test_recipe_draft_rules() {
        let mut draft = RecipeDraft {
            title: "Pancakes".to_string(),
            description: "Fluffy weekend pancakes.".to_string(),
            ..RecipeDraft::default()
        };
        assert_eq!(draft.validate(), Ok(()));

        draft.title = "ab".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::TitleTooShort));
        draft.title = "Pancakes".to_string();

        draft.description = "too short".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::DescriptionTooShort));
        draft.description = "Fluffy weekend pancakes.".to_string();

        draft.image_url = "not a url".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidImageUrl));

        // Empty and well-formed URLs are both fine.
        draft.image_url = String::new();
        assert_eq!(draft.validate(), Ok(()));
        draft.image_url = "https://example.com/p.jpg".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }
}
