//! Microsoft Graph backend for the dirigo user resource
//!
//! Implements the `dirigo-resource` lifecycle for directory users via the
//! Microsoft Graph API: the declarative record is translated to a Graph user
//! object, pushed through one CRUD verb per operation, and refreshed from
//! the authoritative remote state afterwards.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use dirigo_graph::{GraphClient, GraphConfig, GraphCredentials, UserResource};
//! use dirigo_resource::{ResourceLifecycle, UserRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GraphConfig::builder()
//!     .tenant_id("your-tenant-id")
//!     .build()?;
//!
//! let credentials = GraphCredentials {
//!     client_id: "your-client-id".to_string(),
//!     client_secret: "your-client-secret".to_string().into(),
//! };
//!
//! let client = Arc::new(GraphClient::new(&config, credentials)?);
//! let resource = UserResource::new(client, config.delete_policy);
//!
//! let mut record = UserRecord::new("u@example.com", "U", "u", true);
//! resource.create(&mut record).await?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod reconcile;
mod user;

// Re-exports
pub use auth::TokenCache;
pub use client::GraphClient;
pub use config::{DeletePolicy, GraphConfig, GraphConfigBuilder, GraphCredentials};
pub use reconcile::UserResource;
pub use user::{GraphUser, PasswordProfile, USER_SELECT_FIELDS};
