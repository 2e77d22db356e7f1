//! Lifecycle traits for resource backends.
//!
//! The orchestration host drives a record through these four operations;
//! backends translate the record to remote calls. Each operation takes the
//! record mutably for its full duration and writes observed remote state
//! back before returning.

use async_trait::async_trait;

use crate::error::ResourceResult;
use crate::record::UserRecord;

/// CRUD lifecycle over one directory-user resource instance.
///
/// State machine per record: `absent` (no identity) to `present` (identity
/// plus synchronized fields) via [`create`](Self::create), and back to
/// `absent` via [`delete`](Self::delete) or a not-found
/// [`read`](Self::read).
#[async_trait]
pub trait ResourceLifecycle: Send + Sync {
    /// Create the remote object from the record, then populate the record
    /// with the authoritative remote state (identity included).
    ///
    /// On failure the record keeps no identity and the error is returned
    /// unchanged.
    async fn create(&self, record: &mut UserRecord) -> ResourceResult<()>;

    /// Fetch the remote object by identity and copy its fields back.
    ///
    /// A remote not-found clears the identity and returns `Ok(())` so the
    /// host recreates the resource on its next apply. Transient and fatal
    /// failures propagate unchanged with the identity left intact.
    async fn read(&self, record: &mut UserRecord) -> ResourceResult<()>;

    /// Push the record's writable fields to the remote object, then refresh
    /// the record from authoritative remote state.
    ///
    /// Fields absent from the record are omitted from the request so remote
    /// values the caller did not specify are never clobbered.
    async fn update(&self, record: &mut UserRecord) -> ResourceResult<()>;

    /// Delete the remote object by identity.
    ///
    /// Outcome handling is backend policy; see the implementing type for
    /// whether failures propagate or the delete is best-effort.
    async fn delete(&self, record: &mut UserRecord) -> ResourceResult<()>;
}
