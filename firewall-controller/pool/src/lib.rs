#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Reconciles the single cloud firewall rule that admits the L7
//! load-balancer source ranges to a cluster's node ports.
//!
//! [`FirewallPool::sync`] computes the desired rule from the currently
//! reachable ports and cluster nodes, fetches the remote state, and issues
//! at most one mutation per pass. On shared (XPN) networks mutations may be
//! permanently forbidden; those failures surface as [`FirewallSyncError`]
//! naming the attempted action so operators can apply the rule out of band.

mod error;
mod pool;


pub use self::{
    error::{FirewallSyncError, SyncAction},
    pool::FirewallPool,
};
