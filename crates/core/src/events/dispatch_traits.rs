use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Answer of the event dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchStatus {
    Accepted,
    Rejected { reason: String },
}

/// Delivers events of type `E` to downstream consumers.
///
/// An `Err` and a `Rejected` answer are both treated as a failed delivery by
/// callers; `Err` is for transport failures, `Rejected` for a consumer that
/// refused the event.
#[async_trait]
pub trait EventDispatchServiceTrait<E: Send + Sync>: Send + Sync {
    async fn dispatch(&self, event: &E) -> Result<DispatchStatus>;
}
