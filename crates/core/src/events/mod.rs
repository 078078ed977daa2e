//! Events module - event lifecycle state and the dispatch contract.
//!
//! Events start out `Waiting` and end in exactly one terminal state once the
//! dispatcher has answered.

mod dispatch_traits;
mod event_status;

pub use dispatch_traits::{DispatchStatus, EventDispatchServiceTrait};
pub use event_status::EventStatus;
