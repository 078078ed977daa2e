use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Error, Result};

/// Delivery state of an outgoing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Waiting,
    Dispatched,
    Failed,
}

impl EventStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EventStatus::Waiting)
    }

    /// Validates a state change. Only `Waiting` may move, and only to a
    /// terminal state.
    pub fn transition(self, to: EventStatus) -> Result<EventStatus> {
        match (self, to) {
            (EventStatus::Waiting, EventStatus::Dispatched)
            | (EventStatus::Waiting, EventStatus::Failed) => Ok(to),
            (from, to) => Err(Error::InvalidEventTransition { from, to }),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStatus::Waiting => write!(f, "WAITING"),
            EventStatus::Dispatched => write!(f, "DISPATCHED"),
            EventStatus::Failed => write!(f, "FAILED"),
        }
    }
}
