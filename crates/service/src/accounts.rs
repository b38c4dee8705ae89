//! Registration, login, profile edits, and demo data.

use chrono::{Duration, Utc};
use hivemind_core::error::CoreError;
use hivemind_core::lifecycle::user as user_rules;
use hivemind_core::models::user::UpdateProfile;
use hivemind_core::models::{Badge, User};
use hivemind_core::types::new_id;
use hivemind_core::validation::{
    normalize_email, required_text, validate_password_strength, MAX_NAME_LENGTH,
};
use hivemind_db::repositories::UserRepo;
use hivemind_db::Collection;
use serde::Deserialize;

use crate::password::{hash_password, verify_password};
use crate::{DomainService, ServiceResult};

/// Message for every failed login, whatever the cause.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Credentials of the seeded demo account.
pub const DEMO_EMAIL: &str = "demo@hivemind.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Input for [`DomainService::register`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl DomainService {
    /// Create an account and sign it in.
    pub async fn register(&self, input: RegisterUser) -> ServiceResult<User> {
        let email = normalize_email(&input.email)?;
        let name = required_text("Name", &input.name, MAX_NAME_LENGTH)?;
        validate_password_strength(&input.password)?;

        let _guard = self
            .lock([(Collection::Users, format!("email:{email}"))])
            .await;
        if UserRepo::find_by_email(self.store(), &email).await?.is_some() {
            return Err(CoreError::Conflict(format!(
                "An account with email {email} already exists"
            ))
            .into());
        }

        let user = User {
            id: new_id(),
            email,
            password_hash: hash_password(&input.password)?,
            name,
            bio: String::new(),
            points: 0,
            badges: Vec::new(),
            joined_date: Utc::now(),
        };
        let user = UserRepo::save(self.store(), &user).await?;
        tracing::info!(user_id = %user.id, "User registered");

        self.sessions().sign_in(&user.id).await
    }

    /// Check credentials and sign the user in.
    ///
    /// Unknown emails and wrong passwords fail with the same message.
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<User> {
        let email = email.trim().to_lowercase();
        let Some(user) = UserRepo::find_by_email(self.store(), &email).await? else {
            tracing::debug!("Login for unknown email");
            return Err(CoreError::Unauthenticated(INVALID_CREDENTIALS.into()).into());
        };
        if !verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Login with wrong password");
            return Err(CoreError::Unauthenticated(INVALID_CREDENTIALS.into()).into());
        }
        self.sessions().sign_in(&user.id).await
    }

    pub async fn logout(&self) -> ServiceResult<()> {
        self.sessions().sign_out().await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        changes: UpdateProfile,
    ) -> ServiceResult<User> {
        let _guard = self.lock([(Collection::Users, user_id.to_string())]).await;
        let user = self.load_user(user_id).await?;
        let user = user_rules::update_profile(user, changes)?;
        let user = UserRepo::save(self.store(), &user).await?;
        tracing::info!(user_id, "Profile updated");
        Ok(user)
    }

    /// Insert the demo account when there are no users yet.
    ///
    /// Returns `true` if the demo account was created.
    pub async fn seed_demo_data(&self) -> ServiceResult<bool> {
        if !UserRepo::is_empty(self.store()).await? {
            return Ok(false);
        }
        let now = Utc::now();
        let demo = User {
            id: new_id(),
            email: DEMO_EMAIL.into(),
            password_hash: hash_password(DEMO_PASSWORD)?,
            name: "Demo User".into(),
            bio: "Passionate project leader and team player".into(),
            points: 1250,
            badges: vec![
                Badge {
                    id: "team-leader".into(),
                    name: "Team Leader".into(),
                    description: "Led 5 successful projects".into(),
                    icon: "👑".into(),
                    earned_date: now,
                },
                Badge {
                    id: "collaborator".into(),
                    name: "Collaborator".into(),
                    description: "Worked on 10+ projects".into(),
                    icon: "🤝".into(),
                    earned_date: now,
                },
            ],
            joined_date: now - Duration::days(90),
        };
        UserRepo::save(self.store(), &demo).await?;
        tracing::info!(email = DEMO_EMAIL, "Seeded demo account");
        Ok(true)
    }
}
