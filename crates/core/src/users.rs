//! Account registration rules.

use serde::Deserialize;
use validator::Validate;

use crate::validation::{derived_errors, FieldErrors};

/// Registration form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterInput {
    #[serde(default)]
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// A validated registration. The email is case-folded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Canonical form of an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl RegisterInput {
    pub fn into_registration(self) -> Result<Registration, FieldErrors> {
        let mut errors = derived_errors(&self);
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match");
        }
        let name = self.name.trim().to_string();
        let email = normalize_email(&self.email);
        let password = self.password;
        errors.finish(|| Registration {
            name,
            email,
            password,
        })
    }
}
