use crate::{error::ProviderError, resource::FirewallRule};
use ahash::AHashSet as HashSet;

/// The cloud firewall capability consumed by the reconciler.
///
/// Each operation addresses a single resource by name and may take an
/// arbitrary network round trip; callers impose timeouts by wrapping the
/// returned futures. Adapters are responsible for classifying raw API
/// failures into [`ProviderError`].
#[async_trait::async_trait]
pub trait Firewalls: Send + Sync {
    /// Fetches the current state of the named rule.
    async fn get_firewall(&self, name: &str) -> Result<FirewallRule, ProviderError>;

    /// Creates `rule`. Fails with [`ProviderError::Forbidden`] when the
    /// network belongs to another administrative entity.
    async fn create_firewall(&self, rule: &FirewallRule) -> Result<(), ProviderError>;

    /// Replaces the managed fields of the rule named `rule.name`.
    async fn update_firewall(&self, rule: &FirewallRule) -> Result<(), ProviderError>;

    /// Deletes the named rule.
    async fn delete_firewall(&self, name: &str) -> Result<(), ProviderError>;
}

#[async_trait::async_trait]
impl<T: Firewalls + ?Sized> Firewalls for std::sync::Arc<T> {
    async fn get_firewall(&self, name: &str) -> Result<FirewallRule, ProviderError> {
        (**self).get_firewall(name).await
    }

    async fn create_firewall(&self, rule: &FirewallRule) -> Result<(), ProviderError> {
        (**self).create_firewall(rule).await
    }

    async fn update_firewall(&self, rule: &FirewallRule) -> Result<(), ProviderError> {
        (**self).update_firewall(rule).await
    }

    async fn delete_firewall(&self, name: &str) -> Result<(), ProviderError> {
        (**self).delete_firewall(name).await
    }
}

/// Derives the name of the managed rule from cluster identity.
///
/// The name must be deterministic for the life of the process; the
/// reconciler captures it once at construction.
pub trait RuleNamer {
    fn firewall_rule_name(&self) -> String;
}

/// Maps node names to the provider's target selectors.
///
/// Pure with respect to cluster topology. Many-to-one is permitted:
/// distinct nodes may resolve to the same tag.
pub trait NodeTagger {
    fn host_tags(&self, nodes: &[String]) -> HashSet<String>;
}
