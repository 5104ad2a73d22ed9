//! Authentication gate - registration and login over the `users` table.
//!
//! Passwords are salted with a random per-user value and hashed with SHA-256; the
//! plaintext never reaches the database. Login succeeds only for an exact
//! (mobile, password) match.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use sha2::{Digest, Sha256};
use tracing::{info, instrument, warn};

/// Details submitted on the registration screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Display name
    pub name: String,
    /// Postal address
    pub address: Option<String>,
    /// Mobile number, used as the login name
    pub mobile: String,
    /// Chosen password
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Finds a user by mobile number.
pub async fn get_user_by_mobile(
    db: &DatabaseConnection,
    mobile: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Mobile.eq(mobile))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates an account.
///
/// # Errors
/// - [`Error::Validation`] if name, mobile or password is blank
/// - [`Error::PasswordMismatch`] if the confirmation differs
/// - [`Error::DuplicateMobile`] if the mobile number is already registered
#[instrument(skip(db, registration), fields(mobile = %registration.mobile))]
pub async fn register_user(
    db: &DatabaseConnection,
    registration: Registration,
) -> Result<user::Model> {
    if registration.name.trim().is_empty() {
        return Err(Error::validation("name", "Name is a required field"));
    }
    if registration.mobile.trim().is_empty() {
        return Err(Error::validation("mobile", "Mobile number is a required field"));
    }
    if registration.password.is_empty() {
        return Err(Error::validation("password", "Password is a required field"));
    }
    if registration.password != registration.confirm_password {
        return Err(Error::PasswordMismatch);
    }

    let mobile = registration.mobile.trim().to_string();
    if get_user_by_mobile(db, &mobile).await?.is_some() {
        warn!("Registration rejected: mobile already taken");
        return Err(Error::DuplicateMobile { mobile });
    }

    let salt = uuid::Uuid::new_v4().simple().to_string();
    let user = user::ActiveModel {
        name: Set(registration.name.trim().to_string()),
        address: Set(registration.address),
        mobile: Set(mobile),
        password_hash: Set(hash_password(&salt, &registration.password)),
        password_salt: Set(salt),
        ..Default::default()
    };

    let created = user.insert(db).await?;
    info!(user_id = created.id, "User registered");
    Ok(created)
}

/// Checks a (mobile, password) pair. Returns the account on success, `None` otherwise.
#[instrument(skip(db, password))]
pub async fn login(
    db: &DatabaseConnection,
    mobile: &str,
    password: &str,
) -> Result<Option<user::Model>> {
    let Some(user) = get_user_by_mobile(db, mobile.trim()).await? else {
        info!("Login failed: unknown mobile");
        return Ok(None);
    };

    if hash_password(&user.password_salt, password) == user.password_hash {
        info!(user_id = user.id, "Login succeeded");
        Ok(Some(user))
    } else {
        info!("Login failed: wrong password");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::test_utils::*;

    fn registration(mobile: &str, password: &str, confirm: &str) -> Registration {
        Registration {
            name: "Office Admin".to_string(),
            address: Some("Andheri East, Mumbai".to_string()),
            mobile: mobile.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() -> Result<()> {
        let db = setup_test_db().await?;
        let user = register_user(&db, registration("9000000001", "s3cret", "s3cret")).await?;

        let logged_in = login(&db, "9000000001", "s3cret").await?.unwrap();
        assert_eq!(logged_in.id, user.id);
        assert_eq!(logged_in.name, "Office Admin");
        Ok(())
    }

    #[tokio::test]
    async fn test_login_requires_exact_pair() -> Result<()> {
        let db = setup_test_db().await?;
        register_user(&db, registration("9000000001", "s3cret", "s3cret")).await?;

        assert!(login(&db, "9000000001", "S3CRET").await?.is_none());
        assert!(login(&db, "9000000001", "").await?.is_none());
        assert!(login(&db, "9000000002", "s3cret").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plaintext() -> Result<()> {
        let db = setup_test_db().await?;
        let user = register_user(&db, registration("9000000001", "s3cret", "s3cret")).await?;
        assert_ne!(user.password_hash, "s3cret");
        assert!(!user.password_hash.contains("s3cret"));
        assert_eq!(user.password_hash.len(), 64);
        Ok(())
    }

    #[tokio::test]
    async fn test_same_password_gets_different_hashes() -> Result<()> {
        let db = setup_test_db().await?;
        let a = register_user(&db, registration("9000000001", "same", "same")).await?;
        let b = register_user(&db, registration("9000000002", "same", "same")).await?;
        assert_ne!(a.password_hash, b.password_hash);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_mobile_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        register_user(&db, registration("9000000001", "one", "one")).await?;

        let result = register_user(&db, registration("9000000001", "two", "two")).await;
        match result {
            Err(Error::DuplicateMobile { mobile }) => assert_eq!(mobile, "9000000001"),
            other => panic!("expected DuplicateMobile, got {other:?}"),
        }
        assert!(login(&db, "9000000001", "one").await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_password_mismatch_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let result = register_user(&db, registration("9000000001", "one", "uno")).await;
        assert!(matches!(result, Err(Error::PasswordMismatch)));
        assert!(get_user_by_mobile(&db, "9000000001").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_fields_are_validation_errors() -> Result<()> {
        let db = setup_test_db().await?;

        let mut blank_name = registration("9000000001", "pw", "pw");
        blank_name.name = "  ".to_string();
        assert!(matches!(
            register_user(&db, blank_name).await,
            Err(Error::Validation { field: "name", .. })
        ));

        assert!(matches!(
            register_user(&db, registration("", "pw", "pw")).await,
            Err(Error::Validation { field: "mobile", .. })
        ));
        assert!(matches!(
            register_user(&db, registration("9000000001", "", "")).await,
            Err(Error::Validation { field: "password", .. })
        ));
        Ok(())
    }
}
