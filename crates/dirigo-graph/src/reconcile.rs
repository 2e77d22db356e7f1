//! Lifecycle reconciliation for the directory user resource.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use dirigo_resource::{ResourceError, ResourceLifecycle, ResourceResult, UserRecord};

use crate::client::GraphClient;
use crate::config::DeletePolicy;
use crate::user::{GraphUser, PasswordProfile, USER_SELECT_FIELDS};

/// Directory user resource backed by Microsoft Graph.
///
/// One instance serves any number of reconciliation invocations; the client
/// handle is shared and each invocation owns its record exclusively.
#[derive(Debug)]
pub struct UserResource {
    client: Arc<GraphClient>,
    delete_policy: DeletePolicy,
}

impl UserResource {
    /// Creates a resource over the given client handle.
    pub fn new(client: Arc<GraphClient>, delete_policy: DeletePolicy) -> Self {
        Self {
            client,
            delete_policy,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.client.base_url())
    }

    fn object_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.client.base_url(), id)
    }

    // Remote call wrappers: exactly one verb each, no added logic, kept
    // separate so tests can exercise them against a substituted endpoint.

    /// Creates a user in the directory.
    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &GraphUser) -> ResourceResult<GraphUser> {
        self.client.post(&self.collection_url(), user).await
    }

    /// Fetches a user by ID with the fixed field projection.
    #[instrument(skip(self))]
    async fn fetch_user(&self, id: &str) -> ResourceResult<GraphUser> {
        let url = format!("{}?$select={}", self.object_url(id), USER_SELECT_FIELDS);
        match self.client.get(&url).await {
            Err(e) if e.is_not_found() => Err(ResourceError::not_found(id)),
            other => other,
        }
    }

    /// Applies a partial update to a user by ID.
    #[instrument(skip(self, user))]
    async fn update_user(&self, id: &str, user: &GraphUser) -> ResourceResult<()> {
        self.client.patch(&self.object_url(id), user).await
    }

    /// Deletes a user by ID.
    #[instrument(skip(self))]
    async fn delete_user(&self, id: &str) -> ResourceResult<()> {
        match self.client.delete(&self.object_url(id)).await {
            Err(e) if e.is_not_found() => Err(ResourceError::not_found(id)),
            other => other,
        }
    }
}

#[async_trait]
impl ResourceLifecycle for UserResource {
    async fn create(&self, record: &mut UserRecord) -> ResourceResult<()> {
        let mut user = GraphUser::from_record(record);
        user.password_profile = Some(PasswordProfile::generate());

        let created = self.create_user(&user).await?;
        let id = created
            .id
            .ok_or_else(|| ResourceError::Decode("created user carried no id".to_string()))?;

        info!("User created with ID: {id}");
        record.id = Some(id.clone());

        // Read back so remote-derived fields (mail) land in the record.
        let fetched = self.fetch_user(&id).await?;
        fetched.apply_to(record);
        Ok(())
    }

    async fn read(&self, record: &mut UserRecord) -> ResourceResult<()> {
        let id = record.require_id("read")?.to_string();

        match self.fetch_user(&id).await {
            Ok(fetched) => {
                fetched.apply_to(record);
                Ok(())
            }
            // Terminal absence: clear the identity so the host recreates the
            // resource on its next apply. Transient and fatal failures keep
            // the identity so a retry can still find the object.
            Err(e) if e.is_not_found() => {
                info!("User {id} no longer exists remotely, clearing identity");
                record.clear_id();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn update(&self, record: &mut UserRecord) -> ResourceResult<()> {
        let id = record.require_id("update")?.to_string();

        let user = GraphUser::from_record(record);
        self.update_user(&id, &user).await?;
        info!("User updated: {id}");

        // Refresh from authoritative remote state after the write.
        let fetched = self.fetch_user(&id).await?;
        fetched.apply_to(record);
        Ok(())
    }

    async fn delete(&self, record: &mut UserRecord) -> ResourceResult<()> {
        let id = record.require_id("delete")?.to_string();

        let outcome = self.delete_user(&id).await;
        match (self.delete_policy, outcome) {
            (_, Ok(())) => {
                info!("User deleted: {id}");
                record.clear_id();
                Ok(())
            }
            (DeletePolicy::BestEffort, Err(e)) => {
                warn!("Discarding delete failure for user {id}: {e}");
                record.clear_id();
                Ok(())
            }
            // Already gone counts as a successful teardown.
            (DeletePolicy::Strict, Err(e)) if e.is_not_found() => {
                info!("User {id} already absent remotely");
                record.clear_id();
                Ok(())
            }
            (DeletePolicy::Strict, Err(e)) => Err(e),
        }
    }
}
