use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bazaar_auth::Role;
use bazaar_core::{BusinessId, DomainError, DomainResult, Entity, UserId};

/// Input payload for user creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    /// Optional; the empty string means "no email".
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

/// A user account.
///
/// # Invariants
/// - Belongs to exactly one business (`business_id` is immutable after creation).
/// - The role is fixed at creation; there is no role-change operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub business_id: BusinessId,
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl User {
    /// Create a user in the given business, normalizing its input.
    pub fn create(business_id: BusinessId, input: NewUser, now: DateTime<Utc>) -> DomainResult<Self> {
        let username = input.username.trim().to_string();
        if username.is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }

        let email = input.email.trim().to_string();
        let display_name = {
            let trimmed = input.display_name.trim();
            if trimmed.is_empty() {
                username.clone()
            } else {
                trimmed.to_string()
            }
        };

        Ok(Self {
            id: UserId::new(),
            username,
            email,
            display_name,
            role: input.role,
            business_id,
            created_at: now,
        })
    }

    /// Case-insensitive uniqueness key for the username.
    pub fn username_key(&self) -> String {
        self.username.to_lowercase()
    }

    /// Case-insensitive uniqueness key for the email, if one is set.
    pub fn email_key(&self) -> Option<String> {
        if self.email.is_empty() {
            None
        } else {
            Some(self.email.to_lowercase())
        }
    }

    /// Guard for the deletion workflow: users never delete themselves.
    pub fn ensure_deletable_by(&self, actor_id: UserId) -> DomainResult<()> {
        if self.id == actor_id {
            return Err(DomainError::SelfDeletionForbidden);
        }
        Ok(())
    }
}
