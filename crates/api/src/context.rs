use bazaar_auth::{Actor, Role};
use bazaar_core::{BusinessId, UserId};

/// Business context for a request.
///
/// This is immutable and must be present for all authenticated routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BusinessContext {
    business_id: BusinessId,
}

impl BusinessContext {
    pub fn new(business_id: BusinessId) -> Self {
        Self { business_id }
    }

    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }
}

/// Actor context for a request (authenticated identity + role).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ActorContext {
    user_id: UserId,
    role: Role,
}

impl ActorContext {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Combine with the business context into the domain-level actor.
    pub fn actor(&self, business: BusinessContext) -> Actor {
        Actor::new(self.user_id, self.role, business.business_id())
    }
}
