//! Link details source
//!
//! The link SDK owns deposit lookups. This trait is the narrow seam the
//! dashboard calls through; implementations build whatever chain provider the
//! SDK needs and must report a provider failure as an error.

use async_trait::async_trait;

use crate::domain::entities::LinkDetails;
use crate::shared::error::LinkError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkDetailsSource: Send + Sync {
    /// Deposit details for `link` on `chain_id`
    async fn link_details(&self, chain_id: u64, link: &str) -> Result<LinkDetails, LinkError>;
}
