use http::StatusCode;

/// Failures reported by a [`Firewalls`] provider.
///
/// The reconciler treats the variants differently: `NotFound` is expected
/// on first sync and after deletion, `Forbidden` is expected on shared
/// (XPN) networks where the caller cannot mutate resources it does not
/// own, and `Backend` is opaque and left to the caller's retry cadence.
///
/// [`Firewalls`]: crate::Firewalls
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The named resource does not exist.
    #[error("firewall rule {0:?} not found")]
    NotFound(String),

    /// The caller lacks permission to mutate the network owning the
    /// resource.
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Transport or server-side failure.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

// === impl ProviderError ===

impl ProviderError {
    /// Classifies an HTTP-shaped provider failure for the named rule.
    pub fn from_http(status: StatusCode, name: &str, message: impl ToString) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(name.to_string()),
            StatusCode::FORBIDDEN => Self::Forbidden(message.to_string()),
            _ => Self::Backend(anyhow::anyhow!("{} ({status})", message.to_string())),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}
