use crate::error::{FirewallSyncError, SyncAction};
use ahash::AHashSet as HashSet;
use anyhow::Result;
use firewall_controller_core::{
    l7_source_ranges, Allowed, FirewallRule, Firewalls, NodeTagger, Protocol, ProviderError,
    RuleNamer,
};

/// Reconciles one named cloud firewall rule.
///
/// A pool instance manages exactly one rule and must not be synced
/// concurrently for that rule: the read-diff-write sequence is not atomic,
/// so single-writer discipline falls on the caller. Remote state is never
/// cached; every pass re-fetches the rule.
pub struct FirewallPool<P, T> {
    provider: P,
    tagger: T,
    name: String,
    source_ranges: HashSet<String>,
}

impl<P, T> FirewallPool<P, T>
where
    P: Firewalls,
    T: NodeTagger,
{
    pub fn new(provider: P, namer: &impl RuleNamer, tagger: T) -> Self {
        Self {
            provider,
            tagger,
            name: namer.firewall_rule_name(),
            source_ranges: l7_source_ranges(),
        }
    }

    /// Drives the managed rule toward the state implied by `ports` and
    /// `nodes`, issuing at most one mutation.
    ///
    /// An empty `ports` set means the rule should not exist. Syncing an
    /// already converged rule performs no mutation, so repeated identical
    /// calls are free after the first.
    pub async fn sync(&self, ports: &[u64], nodes: &[String]) -> Result<()> {
        let ports: HashSet<String> = ports.iter().map(|p| p.to_string()).collect();

        let current = match self.provider.get_firewall(&self.name).await {
            Ok(rule) => Some(rule),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e.into()),
        };

        match current {
            None if ports.is_empty() => {
                tracing::debug!(rule = %self.name, "No ports to open and no rule to remove");
                Ok(())
            }
            None => {
                let desired = self.desired_rule(ports, nodes);
                tracing::info!(rule = %self.name, ports = desired.allowed.ports.len(), "Creating firewall rule");
                let res = self.provider.create_firewall(&desired).await;
                self.classify(SyncAction::Create, res)
            }
            Some(_) if ports.is_empty() => {
                tracing::info!(rule = %self.name, "No ports remain; removing firewall rule");
                self.delete_rule().await
            }
            Some(current) => {
                if !self.needs_update(&current, &ports) {
                    tracing::debug!(rule = %self.name, "Firewall rule already converged");
                    return Ok(());
                }
                let desired = self.desired_rule(ports, nodes);
                tracing::info!(rule = %self.name, ports = desired.allowed.ports.len(), "Updating firewall rule");
                let res = self.provider.update_firewall(&desired).await;
                self.classify(SyncAction::Update, res)
            }
        }
    }

    /// Removes the managed rule if it exists. Absence is success.
    pub async fn shutdown(&self) -> Result<()> {
        self.delete_rule().await
    }

    async fn delete_rule(&self) -> Result<()> {
        match self.provider.delete_firewall(&self.name).await {
            Err(e) if e.is_not_found() => {
                tracing::debug!(rule = %self.name, "Firewall rule already deleted");
                Ok(())
            }
            res => self.classify(SyncAction::Delete, res),
        }
    }

    // The authoritative update triggers are the managed ports and source
    // ranges. Target-tag drift alone is not one: several nodes may resolve
    // to a single tag, so a grown node list can leave the rule as-is.
    fn needs_update(&self, current: &FirewallRule, ports: &HashSet<String>) -> bool {
        current.allowed.ports != *ports || current.source_ranges != self.source_ranges
    }

    fn desired_rule(&self, ports: HashSet<String>, nodes: &[String]) -> FirewallRule {
        FirewallRule {
            name: self.name.clone(),
            allowed: Allowed {
                protocol: Protocol::Tcp,
                ports,
            },
            target_tags: self.tagger.host_tags(nodes),
            source_ranges: self.source_ranges.clone(),
        }
    }

    /// Wraps forbidden mutations with the attempted action so the failure
    /// names the phase that needs out-of-band intervention. Everything
    /// else propagates unchanged.
    fn classify(&self, action: SyncAction, res: Result<(), ProviderError>) -> Result<()> {
        match res {
            Ok(()) => Ok(()),
            Err(ProviderError::Forbidden(cause)) => {
                Err(FirewallSyncError::forbidden(action, &self.name, &cause).into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
