use crate::{AuthError, ReloadPolicy, Result as AuthErrorResult, TapisClient};

use tapis_core::{
    FALLBACK_ROLE_SLUG, NewUser, PERSONAL_OWNER_ROLE, PREFERRED_ROLE_SLUG, Project,
    ProjectRelation, Role, TapisIdentity, User,
};
use tapis_db::{
    DbError, ProjectRelationRepository, ProjectRepository, RoleRepository, UserRepository,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, error, info, warn};
use metrics::counter;
use uuid::Uuid;

/// Verifies credentials against Tapis and makes sure a matching local user
/// exists, creating the user with a personal project on first login.
///
/// Users are never updated after creation: whatever the first successful
/// login wrote stays, later logins only read it back.
pub struct TapisAuthBridge {
    client: TapisClient,
    users: UserRepository,
    roles: RoleRepository,
    projects: ProjectRepository,
    relations: ProjectRelationRepository,
    reload: ReloadPolicy,
}

impl TapisAuthBridge {
    pub fn new(
        client: TapisClient,
        users: UserRepository,
        roles: RoleRepository,
        projects: ProjectRepository,
        relations: ProjectRelationRepository,
        reload: ReloadPolicy,
    ) -> Self {
        Self {
            client,
            users,
            roles,
            projects,
            relations,
            reload,
        }
    }

    /// Returns the local user for valid Tapis credentials, `None` otherwise.
    ///
    /// Never fails: remote and storage errors are logged and reported as `None`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        match self.try_authenticate(username, password).await {
            Ok(user) => Some(user),
            Err(AuthError::IdentityRejected { status, .. }) => {
                warn!("Tapis rejected login for '{}' (HTTP {})", username, status);
                None
            }
            Err(AuthError::Provisioning { source, .. }) if source.is_conflict() => {
                warn!("'{}' was provisioned by a concurrent login, rejecting this one", username);
                None
            }
            Err(e) => {
                error!("Tapis login for '{}' failed [{}]: {}", username, e.kind(), e);
                None
            }
        }
    }

    pub async fn try_authenticate(&self, username: &str, password: &str) -> AuthErrorResult<User> {
        self.client.verify_credentials(username, password).await?;

        let identity = TapisIdentity::new(username);
        if let Some(user) = self.users.find_by_email(identity.email()).await? {
            debug!("Found existing user {} for '{}'", user.id, username);
            return Ok(user);
        }

        info!("No local user for '{}', provisioning {}", username, identity.email());

        let role = self.resolve_default_role().await?;
        let new_user = NewUser::for_tapis(&identity, password, role.as_ref());
        let user_id = self.provision(&identity, &new_user).await?;

        self.reload(user_id, role.is_some()).await
    }

    async fn resolve_default_role(&self) -> AuthErrorResult<Option<Role>> {
        if let Some(role) = self.roles.find_by_slug(PREFERRED_ROLE_SLUG).await? {
            return Ok(Some(role));
        }
        if let Some(role) = self.roles.find_by_slug(FALLBACK_ROLE_SLUG).await? {
            return Ok(Some(role));
        }

        warn!(
            "Neither '{}' nor '{}' exists, provisioning without a global role",
            PREFERRED_ROLE_SLUG, FALLBACK_ROLE_SLUG
        );
        Ok(None)
    }

    /// User, personal project and owner relation in one transaction.
    /// Dropping `tx` on an early return rolls everything back.
    async fn provision(&self, identity: &TapisIdentity, new_user: &NewUser) -> AuthErrorResult<Uuid> {
        let mut tx = self.users.begin().await?;

        let user = self.users.create_in_tx(&mut tx, new_user).await?;

        let project = Project::personal(identity.personal_project_name(), user.id);
        self.projects.create_in_tx(&mut tx, &project).await?;

        let relation = ProjectRelation::new(project.id, user.id, PERSONAL_OWNER_ROLE);
        self.relations.create_in_tx(&mut tx, &relation).await?;

        tx.commit().await.map_err(DbError::from)?;

        info!(
            "Provisioned user {} ({}) with personal project {}",
            user.id, new_user, project.id
        );
        counter!("tapis_bridge.provisioning.created").increment(1);
        Ok(user.id)
    }

    /// Re-read the user until it is visible with its role attached.
    async fn reload(&self, user_id: Uuid, expect_role: bool) -> AuthErrorResult<User> {
        let attempts = self.reload.effective_attempts();

        for attempt in 1..=attempts {
            if let Some(user) = self.users.find_by_id(user_id).await?
                && (!expect_role || user.role.is_some())
            {
                return Ok(user);
            }

            debug!("User {} not fully readable yet (attempt {}/{})", user_id, attempt, attempts);
            if attempt < attempts {
                tokio::time::sleep(self.reload.delay).await;
            }
        }

        Err(AuthError::NotVisible {
            user_id: user_id.to_string(),
            attempts,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
