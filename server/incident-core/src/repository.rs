//! Repository seam: supplies identified incident records.

use async_trait::async_trait;

use crate::error::RepositoryError;
use crate::types::Incident;

/// Read-only incident storage. Implementations derive ids from their own key
/// space and attach them before returning incidents; a record never carries
/// its key in the body.
#[async_trait]
pub trait IncidentRepository: Send + Sync {
  /// Full candidate scan, in storage iteration order.
  async fn find_all(&self) -> Result<Vec<Incident>, RepositoryError>;

  /// Lookup by id. Absence is `Ok(None)`, not an error.
  async fn find_by_id(&self, id: &str) -> Result<Option<Incident>, RepositoryError>;
}
