use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = crate::model::schema::users, treat_none_as_null = true)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

lazy_static! {
    static ref USER_NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]{3,100}$").unwrap();
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct RegisterUserSchema {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
    #[validate(regex(
        path = "USER_NAME_RE",
        message = "Username must be 3-100 characters of letters, numbers, '_', '.' or '-'"
    ))]
    pub username: String,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 500))]
    pub avatar_url: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::model::schema::users)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl NewUser {
    pub fn from_registration(schema: RegisterUserSchema, hashed_password: String) -> Self {
        NewUser {
            email: schema.email,
            username: schema.username,
            hashed_password,
            first_name: schema.first_name,
            last_name: schema.last_name,
            avatar_url: schema.avatar_url,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserSchema {
    #[validate(email(message = "Must be a valid email"))]
    pub email: Option<String>,
    #[validate(regex(
        path = "USER_NAME_RE",
        message = "Username must be 3-100 characters of letters, numbers, '_', '.' or '-'"
    ))]
    pub username: Option<String>,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 500))]
    pub avatar_url: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: Option<String>,
}

impl UpdateUserSchema {
    /// Profile fields only; the password is hashed and applied by the caller.
    pub fn merge_into(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if self.first_name.is_some() {
            user.first_name = self.first_name.clone();
        }
        if self.last_name.is_some() {
            user.last_name = self.last_name.clone();
        }
        if self.avatar_url.is_some() {
            user.avatar_url = self.avatar_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_rules() {
        let good: RegisterUserSchema = serde_json::from_str(
            r#"{"email": "fan@example.com", "username": "scrum_half", "password": "longenough"}"#,
        )
        .unwrap();
        assert!(good.validate().is_ok());

        let short_password = RegisterUserSchema {
            password: "short".to_string(),
            ..good.clone()
        };
        assert!(short_password.validate().is_err());

        let bad_email = RegisterUserSchema {
            email: "not-an-email".to_string(),
            ..good
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn hashed_password_is_never_serialized() {
        let user = User {
            id: 1,
            email: "fan@example.com".to_string(),
            username: "fan".to_string(),
            hashed_password: "$argon2id$secret".to_string(),
            first_name: None,
            last_name: None,
            avatar_url: None,
            is_active: true,
            is_verified: false,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("hashed_password"));
    }
}
