//! Server lifecycle state machine.
//!
//! # States
//! ```text
//! Created → Serving → ShuttingDown → Stopped
//! ```
//!
//! # Design Decisions
//! - Transitions only move forward, one step at a time
//! - Stopped is terminal; there is no restart

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Where the server is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Created,
    Serving,
    ShuttingDown,
    Stopped,
}

impl ServerState {
    /// The only state reachable from this one.
    pub fn next(self) -> Option<Self> {
        match self {
            ServerState::Created => Some(ServerState::Serving),
            ServerState::Serving => Some(ServerState::ShuttingDown),
            ServerState::ShuttingDown => Some(ServerState::Stopped),
            ServerState::Stopped => None,
        }
    }
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerState::Created => "created",
            ServerState::Serving => "serving",
            ServerState::ShuttingDown => "shutting_down",
            ServerState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Shared lifecycle state.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    tx: Arc<watch::Sender<ServerState>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ServerState::Created);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> ServerState {
        *self.tx.borrow()
    }

    /// Move to `to` if it directly follows the current state.
    ///
    /// Returns whether the transition happened.
    pub fn advance(&self, to: ServerState) -> bool {
        let mut from = None;
        let moved = self.tx.send_if_modified(|state| {
            if state.next() == Some(to) {
                from = Some(*state);
                *state = to;
                true
            } else {
                false
            }
        });

        match from {
            Some(from) => tracing::debug!(from = %from, to = %to, "Lifecycle transition"),
            None => tracing::warn!(current = %self.current(), to = %to, "Rejected lifecycle transition"),
        }
        moved
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_forward_to_stopped() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.current(), ServerState::Created);

        assert!(lifecycle.advance(ServerState::Serving));
        assert!(lifecycle.advance(ServerState::ShuttingDown));
        assert!(lifecycle.advance(ServerState::Stopped));
        assert_eq!(lifecycle.current(), ServerState::Stopped);
        assert_eq!(ServerState::Stopped.next(), None);
    }

    #[test]
    fn rejects_skips_and_restarts() {
        let lifecycle = Lifecycle::new();
        assert!(!lifecycle.advance(ServerState::ShuttingDown));
        assert!(!lifecycle.advance(ServerState::Stopped));
        assert_eq!(lifecycle.current(), ServerState::Created);

        lifecycle.advance(ServerState::Serving);
        lifecycle.advance(ServerState::ShuttingDown);
        lifecycle.advance(ServerState::Stopped);
        assert!(!lifecycle.advance(ServerState::Serving));
        assert!(!lifecycle.advance(ServerState::Created));
    }
}
