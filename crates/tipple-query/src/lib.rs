//! Query session engine for the tipple client.
//!
//! This crate turns user input into catalog lookups:
//! - Input collectors assembling criteria per query mode
//! - Mode binding (collector construction, vocabulary fetch)
//! - The query executor producing result sets
//! - The session state machine with stale-result rejection

pub mod collector;
pub mod executor;
pub mod modes;
pub mod session;

pub use collector::{Collector, FreeTextCollector, PickListCollector};
pub use executor::execute;
pub use modes::{bind, ModeBinding};
pub use session::{PendingSearch, QuerySession, SessionPhase};

#[cfg(test)]
pub(crate) mod mock;
