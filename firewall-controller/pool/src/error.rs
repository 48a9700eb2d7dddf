use std::fmt;

/// The mutation a sync pass was attempting when it was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyncAction {
    Create,
    Update,
    Delete,
}

/// A firewall mutation rejected because the network belongs to another
/// administrative entity.
///
/// `message` always names the attempted action and the rule, and is safe
/// to surface to an operator verbatim: the fix is to have the network
/// owner apply the rule out of band, not to retry.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FirewallSyncError {
    pub action: SyncAction,
    pub message: String,
}

// === impl SyncAction ===

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => "create".fmt(f),
            Self::Update => "update".fmt(f),
            Self::Delete => "delete".fmt(f),
        }
    }
}

// === impl FirewallSyncError ===

impl FirewallSyncError {
    pub(crate) fn forbidden(action: SyncAction, name: &str, cause: &str) -> Self {
        Self {
            action,
            message: format!(
                "firewall change required by network admin: could not {action} firewall rule \
                 {name:?} because the network is owned by another project; the rule must be \
                 applied out of band by the network owner: {cause}"
            ),
        }
    }
}
