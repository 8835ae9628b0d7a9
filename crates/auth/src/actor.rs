use serde::{Deserialize, Serialize};

use bazaar_core::{BusinessId, UserId};

use crate::Role;

/// The identity performing an operation.
///
/// Every service operation takes an `Actor` explicitly — there is no ambient
/// "current session user" anywhere below the HTTP layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
    pub business_id: BusinessId,
}

impl Actor {
    pub fn new(user_id: UserId, role: Role, business_id: BusinessId) -> Self {
        Self {
            user_id,
            role,
            business_id,
        }
    }
}
