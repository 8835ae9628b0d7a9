use thiserror::Error;

use bazaar_core::{BusinessId, DomainError};

use crate::{Action, Actor, CapabilityMatrix};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role lacks capability '{0}'")]
    Forbidden(Action),

    #[error("business mismatch")]
    BusinessMismatch,
}

impl From<AuthzError> for DomainError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::Forbidden(_) => DomainError::Unauthorized,
            AuthzError::BusinessMismatch => DomainError::CrossTenant,
        }
    }
}

/// Authorize an actor for an action under the given matrix.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(matrix: &CapabilityMatrix, actor: &Actor, action: Action) -> Result<(), AuthzError> {
    if matrix.allows(actor.role, action) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(action))
    }
}

/// Check that a per-business resource belongs to the actor's business.
///
/// Applies to every role: admins administer their own business, they are not
/// global operators.
pub fn ensure_same_business(actor: &Actor, resource_business: BusinessId) -> Result<(), AuthzError> {
    if actor.business_id == resource_business {
        Ok(())
    } else {
        Err(AuthzError::BusinessMismatch)
    }
}
