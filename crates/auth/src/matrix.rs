use std::collections::HashSet;

use crate::{Action, Role};

/// Role × action capability matrix.
///
/// The matrix is an explicit, swappable table rather than conditionals spread
/// through the service layer: two variants of the policy have been observed in
/// the wild, and which one is active is configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityMatrix {
    grants: HashSet<(Role, Action)>,
}

/// Grants of the strict (default) policy variant.
const STRICT_GRANTS: &[(Role, &[Action])] = &[
    (
        Role::Admin,
        &[
            Action::CreateProduct,
            Action::EditProduct,
            Action::SubmitProduct,
            Action::ApproveProduct,
            Action::DeleteProduct,
            Action::ManageUsers,
            Action::ViewBusinessProducts,
            Action::ViewPublicCatalog,
        ],
    ),
    (
        Role::Editor,
        &[
            Action::CreateProduct,
            Action::EditProduct,
            Action::SubmitProduct,
            Action::DeleteProduct,
            Action::ViewBusinessProducts,
            Action::ViewPublicCatalog,
        ],
    ),
    (
        Role::Approver,
        &[
            Action::ApproveProduct,
            Action::ViewBusinessProducts,
            Action::ViewPublicCatalog,
        ],
    ),
    (Role::Viewer, &[Action::ViewPublicCatalog]),
];

/// Grants of the looser observed variant: the approver also holds the
/// product-management capabilities.
const PERMISSIVE_GRANTS: &[(Role, &[Action])] = &[
    (
        Role::Admin,
        &[
            Action::CreateProduct,
            Action::EditProduct,
            Action::SubmitProduct,
            Action::ApproveProduct,
            Action::DeleteProduct,
            Action::ManageUsers,
            Action::ViewBusinessProducts,
            Action::ViewPublicCatalog,
        ],
    ),
    (
        Role::Editor,
        &[
            Action::CreateProduct,
            Action::EditProduct,
            Action::SubmitProduct,
            Action::DeleteProduct,
            Action::ViewBusinessProducts,
            Action::ViewPublicCatalog,
        ],
    ),
    (
        Role::Approver,
        &[
            Action::CreateProduct,
            Action::EditProduct,
            Action::SubmitProduct,
            Action::ApproveProduct,
            Action::DeleteProduct,
            Action::ViewBusinessProducts,
            Action::ViewPublicCatalog,
        ],
    ),
    (Role::Viewer, &[Action::ViewPublicCatalog]),
];

impl CapabilityMatrix {
    /// Build a matrix from an explicit grants table.
    pub fn from_grants(grants: &[(Role, &[Action])]) -> Self {
        let grants = grants
            .iter()
            .flat_map(|(role, actions)| actions.iter().map(move |a| (*role, *a)))
            .collect();
        Self { grants }
    }

    /// The strict policy variant (default).
    pub fn strict() -> Self {
        Self::from_grants(STRICT_GRANTS)
    }

    /// The looser policy variant (approver may also manage products).
    pub fn permissive() -> Self {
        Self::from_grants(PERMISSIVE_GRANTS)
    }

    /// Pure allow/deny decision for a role attempting an action.
    pub fn allows(&self, role: Role, action: Action) -> bool {
        self.grants.contains(&(role, action))
    }
}

impl Default for CapabilityMatrix {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The strict matrix, row by row, exactly as specified.
    #[test]
    fn strict_matrix_matches_capability_table() {
        use Action::*;
        use Role::*;

        let matrix = CapabilityMatrix::strict();

        // (action, admin, editor, approver, viewer)
        let table = [
            (CreateProduct, true, true, false, false),
            (EditProduct, true, true, false, false),
            (SubmitProduct, true, true, false, false),
            (ApproveProduct, true, false, true, false),
            (DeleteProduct, true, true, false, false),
            (ManageUsers, true, false, false, false),
            (ViewBusinessProducts, true, true, true, false),
            (ViewPublicCatalog, true, true, true, true),
        ];

        for (action, admin, editor, approver, viewer) in table {
            assert_eq!(matrix.allows(Admin, action), admin, "admin × {action}");
            assert_eq!(matrix.allows(Editor, action), editor, "editor × {action}");
            assert_eq!(matrix.allows(Approver, action), approver, "approver × {action}");
            assert_eq!(matrix.allows(Viewer, action), viewer, "viewer × {action}");
        }
    }

    #[test]
    fn permissive_variant_extends_approver_only() {
        let strict = CapabilityMatrix::strict();
        let permissive = CapabilityMatrix::permissive();

        for role in Role::ALL {
            for action in Action::ALL {
                if role == Role::Approver {
                    // Approver gains product management; never user management.
                    if strict.allows(role, action) {
                        assert!(permissive.allows(role, action));
                    }
                    assert!(!permissive.allows(Role::Approver, Action::ManageUsers));
                } else {
                    assert_eq!(strict.allows(role, action), permissive.allows(role, action));
                }
            }
        }
    }

    #[test]
    fn default_is_strict() {
        assert_eq!(CapabilityMatrix::default(), CapabilityMatrix::strict());
    }

    #[test]
    fn viewer_is_never_granted_a_mutating_action() {
        use Action::*;
        for matrix in [CapabilityMatrix::strict(), CapabilityMatrix::permissive()] {
            for action in [CreateProduct, EditProduct, SubmitProduct, ApproveProduct, DeleteProduct, ManageUsers] {
                assert!(!matrix.allows(Role::Viewer, action));
            }
        }
    }
}
