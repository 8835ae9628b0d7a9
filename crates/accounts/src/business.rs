use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bazaar_core::{BusinessId, DomainError, DomainResult, Entity};

/// A business: the tenant boundary. Owns users and products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Business {
    type Id = BusinessId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Business {
    pub fn create(name: impl Into<String>, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("business name cannot be empty"));
        }

        Ok(Self {
            id: BusinessId::new(),
            name,
            created_at: now,
        })
    }

    /// Case-insensitive uniqueness key for the business name.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}
