use ahash::AHashSet as HashSet;
use std::fmt;

/// CIDR blocks from which the L7 load-balancer infrastructure originates
/// traffic. Every managed rule admits exactly these ranges and no others.
pub const L7_SOURCE_RANGES: [&str; 2] = ["130.211.0.0/22", "35.191.0.0/16"];

/// The published L7 source ranges as an unordered set of CIDR strings.
pub fn l7_source_ranges() -> HashSet<String> {
    L7_SOURCE_RANGES.iter().map(|r| r.to_string()).collect()
}

/// Transport protocol of an [`Allowed`] entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

/// A single allowed-traffic entry: one protocol and the ports open to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allowed {
    pub protocol: Protocol,
    pub ports: HashSet<String>,
}

/// The managed cloud firewall resource.
///
/// `name` is immutable once the resource exists. The remaining fields are
/// owned by the reconciler: they are only ever the image of a desired
/// state it computed, and updates replace them wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirewallRule {
    pub name: String,
    pub allowed: Allowed,
    pub target_tags: HashSet<String>,
    pub source_ranges: HashSet<String>,
}

// === impl Protocol ===

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => "tcp".fmt(f),
            Self::Udp => "udp".fmt(f),
        }
    }
}
