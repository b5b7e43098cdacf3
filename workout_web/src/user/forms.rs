//! Login, registration and profile form input
//!
//! Forms keep the raw submitted strings so a failed submission can be shown
//! again. Passwords are never rendered back; the pages only read the other fields.

use serde::Deserialize;

use super::types::{Credentials, NewUser, ProfileUpdate};
use crate::validation::{FormErrors, check_length, is_email_shaped};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const EMAIL_MIN: usize = 5;
pub const EMAIL_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 72;
pub const BIO_MAX: usize = 500;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::new();
        let username = self.username.trim();
        if username.is_empty() {
            errors.add("username", "Username is required.");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required.");
        }
        errors.into_result()?;

        Ok(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub bio: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<NewUser, FormErrors> {
        let mut errors = FormErrors::new();
        let username = self.username.trim();
        let email = self.email.trim();
        let bio = self.bio.trim();

        validate_username(&mut errors, username);

        check_length(&mut errors, "email", "Email", email, EMAIL_MIN, EMAIL_MAX);
        if !errors.has("email") && !is_email_shaped(email) {
            errors.add("email", "Email must be a valid email address.");
        }

        check_length(
            &mut errors,
            "password",
            "Password",
            &self.password,
            PASSWORD_MIN,
            PASSWORD_MAX,
        );

        validate_bio(&mut errors, bio);
        errors.into_result()?;

        Ok(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            bio: bio.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, FormErrors> {
        let mut errors = FormErrors::new();
        let username = self.username.trim();
        let bio = self.bio.trim();

        validate_username(&mut errors, username);
        validate_bio(&mut errors, bio);
        errors.into_result()?;

        Ok(ProfileUpdate {
            username: username.to_string(),
            bio: bio.to_string(),
        })
    }
}

fn validate_username(errors: &mut FormErrors, username: &str) {
    check_length(
        errors,
        "username",
        "Username",
        username,
        USERNAME_MIN,
        USERNAME_MAX,
    );
}

fn validate_bio(errors: &mut FormErrors, bio: &str) {
    if bio.chars().count() > BIO_MAX {
        errors.add("bio", format!("Bio must be at most {BIO_MAX} characters."));
    }
}
