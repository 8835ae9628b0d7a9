use serde::{Deserialize, Serialize};

/// Action identifier used by the capability matrix.
///
/// Actions are a closed set: every operation the service layer exposes maps to
/// exactly one of these before any state is touched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    CreateProduct,
    EditProduct,
    SubmitProduct,
    ApproveProduct,
    DeleteProduct,
    ManageUsers,
    ViewBusinessProducts,
    ViewPublicCatalog,
}

impl Action {
    /// All actions, for exhaustive policy checks.
    pub const ALL: [Action; 8] = [
        Action::CreateProduct,
        Action::EditProduct,
        Action::SubmitProduct,
        Action::ApproveProduct,
        Action::DeleteProduct,
        Action::ManageUsers,
        Action::ViewBusinessProducts,
        Action::ViewPublicCatalog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateProduct => "create_product",
            Action::EditProduct => "edit_product",
            Action::SubmitProduct => "submit_product",
            Action::ApproveProduct => "approve_product",
            Action::DeleteProduct => "delete_product",
            Action::ManageUsers => "manage_users",
            Action::ViewBusinessProducts => "view_business_products",
            Action::ViewPublicCatalog => "view_public_catalog",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
