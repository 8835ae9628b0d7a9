use chrono::Utc;

use bazaar_accounts::{NewUser, User};
use bazaar_auth::{authorize, ensure_same_business, Action, Actor, CapabilityMatrix};
use bazaar_core::{DomainError, DomainResult, UserId};

use crate::store::UserStore;

/// User management within a business.
pub struct DirectoryService<S> {
    store: S,
    matrix: CapabilityMatrix,
}

impl<S: UserStore> DirectoryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            matrix: CapabilityMatrix::default(),
        }
    }

    pub fn with_matrix(store: S, matrix: CapabilityMatrix) -> Self {
        Self { store, matrix }
    }

    /// Create a user in the actor's business.
    ///
    /// Username and email are globally unique, case-insensitive.
    pub fn create_user(&self, actor: &Actor, input: NewUser) -> DomainResult<User> {
        authorize(&self.matrix, actor, Action::ManageUsers)?;

        let user = User::create(actor.business_id, input, Utc::now())?;

        if self.store.find_by_username(&user.username_key()).is_some() {
            return Err(DomainError::conflict(
                "a user with this username already exists",
            ));
        }
        if let Some(email_key) = user.email_key() {
            if self.store.find_by_email(&email_key).is_some() {
                return Err(DomainError::conflict("a user with this email already exists"));
            }
        }

        self.store.upsert(user.clone());
        tracing::info!(user_id = %user.id, role = %user.role, "user created");
        Ok(user)
    }

    /// Delete a user in the actor's business. Never the actor themselves.
    pub fn delete_user(&self, actor: &Actor, user_id: UserId) -> DomainResult<()> {
        authorize(&self.matrix, actor, Action::ManageUsers)?;

        let user = self.store.get(user_id).ok_or(DomainError::NotFound)?;
        ensure_same_business(actor, user.business_id)?;
        user.ensure_deletable_by(actor.user_id)?;

        self.store.remove(user_id);
        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }

    /// List the users of the actor's business.
    pub fn list_users(&self, actor: &Actor) -> DomainResult<Vec<User>> {
        authorize(&self.matrix, actor, Action::ManageUsers)?;

        let mut users = self.store.list_business(actor.business_id);
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;
    use bazaar_auth::Role;
    use bazaar_core::BusinessId;

    fn service() -> DirectoryService<InMemoryUserStore> {
        DirectoryService::new(InMemoryUserStore::new())
    }

    fn actor(role: Role, business_id: BusinessId) -> Actor {
        Actor::new(UserId::new(), role, business_id)
    }

    fn new_user(username: &str, role: Role) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            display_name: String::new(),
            role,
        }
    }

    #[test]
    fn admin_creates_users_in_own_business() {
        let svc = service();
        let admin = actor(Role::Admin, BusinessId::new());

        let user = svc
            .create_user(&admin, new_user("new_editor", Role::Editor))
            .unwrap();
        assert_eq!(user.business_id, admin.business_id);
        assert_eq!(user.role, Role::Editor);
    }

    #[test]
    fn non_admin_roles_cannot_manage_users() {
        let svc = service();
        let biz = BusinessId::new();
        for role in [Role::Editor, Role::Approver, Role::Viewer] {
            let err = svc
                .create_user(&actor(role, biz), new_user("x", Role::Viewer))
                .unwrap_err();
            assert_eq!(err, DomainError::Unauthorized);
            assert_eq!(svc.list_users(&actor(role, biz)).unwrap_err(), DomainError::Unauthorized);
        }
    }

    #[test]
    fn duplicate_username_is_a_conflict_case_insensitively() {
        let svc = service();
        let admin = actor(Role::Admin, BusinessId::new());

        svc.create_user(&admin, new_user("dave", Role::Editor)).unwrap();
        let err = svc
            .create_user(&admin, new_user("DAVE", Role::Viewer))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let svc = service();
        let admin = actor(Role::Admin, BusinessId::new());

        svc.create_user(&admin, new_user("dave", Role::Editor)).unwrap();
        let input = NewUser {
            username: "dave2".to_string(),
            email: "Dave@Example.com".to_string(),
            display_name: String::new(),
            role: Role::Viewer,
        };
        let err = svc.create_user(&admin, input).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn self_deletion_always_fails() {
        let svc = service();
        let biz = BusinessId::new();
        let mut admin = actor(Role::Admin, biz);

        let stored = svc
            .create_user(&admin, new_user("root", Role::Admin))
            .unwrap();
        // Act as the stored admin.
        admin.user_id = stored.id;

        let err = svc.delete_user(&admin, admin.user_id).unwrap_err();
        assert_eq!(err, DomainError::SelfDeletionForbidden);
        assert!(svc.store.get(stored.id).is_some());
    }

    #[test]
    fn admin_deletes_other_users_but_not_cross_business() {
        let svc = service();
        let admin = actor(Role::Admin, BusinessId::new());
        let foreign_admin = actor(Role::Admin, BusinessId::new());

        let user = svc
            .create_user(&admin, new_user("temp", Role::Viewer))
            .unwrap();

        let err = svc.delete_user(&foreign_admin, user.id).unwrap_err();
        assert_eq!(err, DomainError::CrossTenant);

        svc.delete_user(&admin, user.id).unwrap();
        assert!(svc.store.get(user.id).is_none());
    }

    #[test]
    fn deleting_unknown_user_is_not_found() {
        let svc = service();
        let admin = actor(Role::Admin, BusinessId::new());
        assert_eq!(
            svc.delete_user(&admin, UserId::new()).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn listing_is_scoped_to_the_actors_business() {
        let svc = service();
        let admin_a = actor(Role::Admin, BusinessId::new());
        let admin_b = actor(Role::Admin, BusinessId::new());

        svc.create_user(&admin_a, new_user("a1", Role::Editor)).unwrap();
        svc.create_user(&admin_a, new_user("a2", Role::Viewer)).unwrap();
        svc.create_user(&admin_b, new_user("b1", Role::Editor)).unwrap();

        assert_eq!(svc.list_users(&admin_a).unwrap().len(), 2);
        assert_eq!(svc.list_users(&admin_b).unwrap().len(), 1);
    }
}
