use crate::model::response::{FilteredUser, ListParams};
use crate::model::user::{NewUser, RegisterUserSchema, UpdateUserSchema, User};
use crate::repository::database::Database;
use crate::service::error::ServiceError;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use rand_core::OsRng;
use validator::Validate;

const EMAIL_TAKEN: &str = "Email already registered";
const USERNAME_TAKEN: &str = "Username already taken";

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hashed)
}

/// Fails when `email` or `username` belongs to a user other than `current`.
async fn ensure_unique(
    db: &Database,
    email: Option<&str>,
    username: Option<&str>,
    current: Option<i32>,
) -> Result<(), ServiceError> {
    if let Some(email) = email {
        if let Some(existing) = db.find_user_by_email(email).await? {
            if Some(existing.id) != current {
                return Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()));
            }
        }
    }
    if let Some(username) = username {
        if let Some(existing) = db.find_user_by_username(username).await? {
            if Some(existing.id) != current {
                return Err(ServiceError::Conflict(USERNAME_TAKEN.to_string()));
            }
        }
    }
    Ok(())
}

pub async fn list_users_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<FilteredUser>, ServiceError> {
    let users = db.list_active_users(params).await?;
    Ok(users.into_iter().map(FilteredUser::from).collect())
}

async fn find_user(db: &Database, user_id: i32) -> Result<User, ServiceError> {
    db.find_user(user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User"))
}

pub async fn get_user_service(db: &Database, user_id: i32) -> Result<FilteredUser, ServiceError> {
    Ok(find_user(db, user_id).await?.into())
}

pub async fn create_user_service(
    db: &Database,
    new_user: RegisterUserSchema,
) -> Result<FilteredUser, ServiceError> {
    new_user.validate()?;
    ensure_unique(db, Some(&new_user.email), Some(&new_user.username), None).await?;

    let hashed_password = hash_password(&new_user.password)?;
    let user = db
        .insert_user(&NewUser::from_registration(new_user, hashed_password))
        .await?;
    Ok(user.into())
}

pub async fn update_user_service(
    db: &Database,
    user_id: i32,
    changes: UpdateUserSchema,
) -> Result<FilteredUser, ServiceError> {
    changes.validate()?;
    let mut user = find_user(db, user_id).await?;
    ensure_unique(
        db,
        changes.email.as_deref(),
        changes.username.as_deref(),
        Some(user.id),
    )
    .await?;

    changes.merge_into(&mut user);
    if let Some(password) = &changes.password {
        user.hashed_password = hash_password(password)?;
    }
    user.updated_at = Utc::now();
    Ok(db.save_user(&user).await?.into())
}

pub async fn delete_user_service(db: &Database, user_id: i32) -> Result<(), ServiceError> {
    let mut user = find_user(db, user_id).await?;
    user.is_active = false;
    user.updated_at = Utc::now();
    db.save_user(&user).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("correct horse").unwrap();
        let second = hash_password("correct horse").unwrap();
        assert_ne!(first, second);

        let parsed = PasswordHash::new(&first).unwrap();
        assert!(Argon2::default()
            .verify_password(b"correct horse", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"battery staple", &parsed)
            .is_err());
    }
}
