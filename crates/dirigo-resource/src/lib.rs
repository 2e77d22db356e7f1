//! # Resource Framework
//!
//! Core abstractions for reconciling declarative resource records against a
//! remote directory service.
//!
//! The orchestration host persists a [`UserRecord`] between runs and drives
//! it through the [`ResourceLifecycle`] operations; an implementation crate
//! (such as `dirigo-graph`) supplies the remote side.
//!
//! ## Crate Organization
//!
//! - [`error`] - Error types with not-found/transient/fatal classification
//! - [`record`] - The typed attribute record the host persists
//! - [`schema`] - The fixed field schema declared once
//! - [`traits`] - Lifecycle operations implemented by resource backends
//!
//! [`UserRecord`]: record::UserRecord
//! [`ResourceLifecycle`]: traits::ResourceLifecycle

pub mod error;
pub mod record;
pub mod schema;
pub mod traits;

pub use error::{ErrorClass, ResourceError, ResourceResult};
pub use record::UserRecord;
pub use schema::{FieldKind, FieldSpec, UserSchema};
pub use traits::ResourceLifecycle;

// Re-export async_trait for lifecycle implementors
pub use async_trait::async_trait;
