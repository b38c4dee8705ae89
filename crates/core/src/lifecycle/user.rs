//! User transitions: crediting points and editing the profile.

use crate::badges::newly_earned;
use crate::error::CoreError;
use crate::models::user::UpdateProfile;
use crate::models::User;
use crate::types::Timestamp;
use crate::validation::{required_text, MAX_NAME_LENGTH};

/// Credit `points` to the user and append any badges reached by the new total.
pub fn award_points(mut user: User, points: u32, now: Timestamp) -> User {
    user.points = user.points.saturating_add(u64::from(points));
    let earned = newly_earned(&user, now);
    user.badges.extend(earned);
    user
}

/// Apply a profile edit. A provided name must not be blank.
pub fn update_profile(mut user: User, changes: UpdateProfile) -> Result<User, CoreError> {
    if let Some(name) = changes.name {
        user.name = required_text("Name", &name, MAX_NAME_LENGTH)?;
    }
    if let Some(bio) = changes.bio {
        user.bio = bio.trim().to_string();
    }
    Ok(user)
}
