//! Entity store: the canonical, serializable portal state.

mod collection;
mod snapshot;

pub use collection::Collection;
pub use snapshot::{PortalSnapshot, VoteOutcome};
