use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bazaar_core::{BusinessId, DomainError, DomainResult, Entity, ProductId, UserId};

/// Product status lifecycle.
///
/// Linearly ordered: `draft → pending_approval → approved`. Status only ever
/// advances forward through [`Product::submit_for_approval`] and
/// [`Product::approve`]; there is no reverse transition and no
/// rejected/archived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    PendingApproval,
    Approved,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::PendingApproval => "pending_approval",
            ProductStatus::Approved => "approved",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProductStatus::Draft),
            "pending_approval" => Ok(ProductStatus::PendingApproval),
            "approved" => Ok(ProductStatus::Approved),
            other => Err(DomainError::validation(format!("unknown status '{other}'"))),
        }
    }
}

/// Input payload for product creation.
///
/// Carries no status: products always start in `draft` regardless of what the
/// caller sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    /// Price in minor currency units (cents). Unsigned, so non-negativity
    /// holds by construction.
    pub price_cents: u64,
    pub image_url: String,
}

/// Partial update of product fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<u64>,
    pub image_url: Option<String>,
}

/// A catalog product.
///
/// # Invariants
/// - Belongs to exactly one business (`business_id` is immutable after creation).
/// - `approved_by` is set exactly when an approve transition commits, and
///   survives later edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub business_id: BusinessId,
    pub created_by: UserId,
    pub name: String,
    pub description: String,
    pub price_cents: u64,
    pub image_url: String,
    pub status: ProductStatus,
    pub approved_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Create a new product in `draft` status.
    pub fn create(
        business_id: BusinessId,
        created_by: UserId,
        input: NewProduct,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: ProductId::new(),
            business_id,
            created_by,
            name: input.name.trim().to_string(),
            description: input.description,
            price_cents: input.price_cents,
            image_url: input.image_url,
            status: ProductStatus::Draft,
            approved_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Transition `draft → pending_approval`.
    pub fn submit_for_approval(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.status {
            ProductStatus::Draft => {
                self.status = ProductStatus::PendingApproval;
                self.updated_at = now;
                Ok(())
            }
            other => Err(DomainError::illegal_transition(format!(
                "cannot submit a product in status '{other}'"
            ))),
        }
    }

    /// Transition `pending_approval → approved`, recording the approver.
    pub fn approve(&mut self, approver: UserId, now: DateTime<Utc>) -> DomainResult<()> {
        match self.status {
            ProductStatus::PendingApproval => {
                self.status = ProductStatus::Approved;
                self.approved_by = Some(approver);
                self.updated_at = now;
                Ok(())
            }
            other => Err(DomainError::illegal_transition(format!(
                "cannot approve a product in status '{other}'"
            ))),
        }
    }

    /// Apply a field update.
    ///
    /// Edits are legal in every status, including `approved`: they do not
    /// reset the status and keep `approved_by`.
    pub fn apply_update(&mut self, update: ProductUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price_cents) = update.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Tea".to_string(),
            description: "Loose-leaf green tea".to_string(),
            price_cents: 350,
            image_url: String::new(),
        }
    }

    fn create() -> Product {
        Product::create(BusinessId::new(), UserId::new(), new_product(), Utc::now()).unwrap()
    }

    #[test]
    fn created_product_starts_in_draft() {
        let product = create();
        assert_eq!(product.status, ProductStatus::Draft);
        assert_eq!(product.approved_by, None);
    }

    #[test]
    fn create_rejects_empty_name() {
        let input = NewProduct {
            name: "   ".to_string(),
            ..new_product()
        };
        let err = Product::create(BusinessId::new(), UserId::new(), input, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn submit_moves_draft_to_pending() {
        let mut product = create();
        product.submit_for_approval(Utc::now()).unwrap();
        assert_eq!(product.status, ProductStatus::PendingApproval);
    }

    #[test]
    fn submit_rejects_pending_and_approved() {
        let mut product = create();
        product.submit_for_approval(Utc::now()).unwrap();

        let err = product.submit_for_approval(Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));
        assert_eq!(product.status, ProductStatus::PendingApproval);

        product.approve(UserId::new(), Utc::now()).unwrap();
        let err = product.submit_for_approval(Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));
        assert_eq!(product.status, ProductStatus::Approved);
    }

    #[test]
    fn approve_requires_pending_status() {
        let mut product = create();

        // Approving a draft directly is an illegal transition.
        let err = product.approve(UserId::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));
        assert_eq!(product.status, ProductStatus::Draft);

        product.submit_for_approval(Utc::now()).unwrap();
        let approver = UserId::new();
        product.approve(approver, Utc::now()).unwrap();
        assert_eq!(product.status, ProductStatus::Approved);
        assert_eq!(product.approved_by, Some(approver));

        // And approving twice fails too.
        let err = product.approve(UserId::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition(_)));
        assert_eq!(product.approved_by, Some(approver));
    }

    #[test]
    fn edits_on_approved_products_keep_status_and_approver() {
        let mut product = create();
        product.submit_for_approval(Utc::now()).unwrap();
        let approver = UserId::new();
        product.approve(approver, Utc::now()).unwrap();

        let update = ProductUpdate {
            name: Some("Tea (large)".to_string()),
            price_cents: Some(500),
            ..ProductUpdate::default()
        };
        product.apply_update(update, Utc::now()).unwrap();

        assert_eq!(product.name, "Tea (large)");
        assert_eq!(product.price_cents, 500);
        assert_eq!(product.status, ProductStatus::Approved);
        assert_eq!(product.approved_by, Some(approver));
    }

    #[test]
    fn update_rejects_empty_name_without_touching_fields() {
        let mut product = create();
        let before = product.clone();

        let update = ProductUpdate {
            name: Some("  ".to_string()),
            price_cents: Some(999),
            ..ProductUpdate::default()
        };
        let err = product.apply_update(update, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(product, before);
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ProductStatus::Draft,
            ProductStatus::PendingApproval,
            ProductStatus::Approved,
        ] {
            assert_eq!(status.as_str().parse::<ProductStatus>().unwrap(), status);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn status_rank(status: ProductStatus) -> u8 {
            match status {
                ProductStatus::Draft => 0,
                ProductStatus::PendingApproval => 1,
                ProductStatus::Approved => 2,
            }
        }

        #[derive(Debug, Clone, Copy)]
        enum Op {
            Submit,
            Approve,
            Edit,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![Just(Op::Submit), Just(Op::Approve), Just(Op::Edit)]
        }

        proptest! {
            /// Property: no sequence of operations ever moves status backward,
            /// and failed operations leave the product untouched.
            #[test]
            fn status_is_forward_only(ops in proptest::collection::vec(op_strategy(), 0..32)) {
                let mut product = create();

                for op in ops {
                    let rank_before = status_rank(product.status);
                    let snapshot = product.clone();
                    let now = Utc::now();

                    let result = match op {
                        Op::Submit => product.submit_for_approval(now),
                        Op::Approve => product.approve(UserId::new(), now),
                        Op::Edit => product.apply_update(
                            ProductUpdate { price_cents: Some(100), ..ProductUpdate::default() },
                            now,
                        ),
                    };

                    if result.is_err() {
                        prop_assert_eq!(&product, &snapshot);
                    }
                    prop_assert!(status_rank(product.status) >= rank_before);
                }
            }
        }
    }
}
