//! Run identity and the references derived from it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal identifier of a single orchestration run.
///
/// Generated once when a run starts; the canonical message id and the
/// ledger reference are both derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrchestrationId(Uuid);

impl OrchestrationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// `MSG-<id>`, the id of the canonical ISO 20022 message.
    pub fn message_id(&self) -> String {
        format!("MSG-{}", self.0)
    }

    /// `LEDGER-<id>`, the reference of the simulated ledger posting.
    pub fn ledger_id(&self) -> String {
        format!("LEDGER-{}", self.0)
    }
}

impl Default for OrchestrationId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OrchestrationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for OrchestrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
