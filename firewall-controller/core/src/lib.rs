#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Core types for the L7 load-balancer firewall controller: the managed
//! firewall resource model, the cloud capability it is reconciled through,
//! and the provider error taxonomy.

mod error;
mod provider;
mod resource;

pub use self::{
    error::ProviderError,
    provider::{Firewalls, NodeTagger, RuleNamer},
    resource::{l7_source_ranges, Allowed, FirewallRule, Protocol, L7_SOURCE_RANGES},
};
