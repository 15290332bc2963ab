//! Session change events
//!
//! Workers enqueue events without blocking; the presentation layer drains
//! them and re-reads state snapshots.

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

/// Something in the repository state changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The revision list was replaced
    RevisionsUpdated,
    /// The local change list was replaced
    ChangesUpdated,
    /// Affected items of a revision arrived
    AffectedItemsUpdated { revision: u64 },
    /// Children of a tree node were replaced
    TreeUpdated { path: String },
    /// New entries were added to the error list
    Errors,
}

/// Sending half of the bounded event channel
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: SyncSender<SessionEvent>,
}

impl EventSender {
    /// Enqueue an event, never blocking the caller
    ///
    /// When the channel is full the event is dropped: consumers redraw
    /// from a fresh snapshot anyway.
    pub fn notify(&self, event: SessionEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "event channel full, dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

/// Create a bounded event channel
pub fn channel(capacity: usize) -> (EventSender, Receiver<SessionEvent>) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (EventSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (tx, rx) = channel(4);
        tx.notify(SessionEvent::RevisionsUpdated);
        tx.notify(SessionEvent::ChangesUpdated);

        assert_eq!(rx.try_recv().unwrap(), SessionEvent::RevisionsUpdated);
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::ChangesUpdated);
    }

    #[test]
    fn test_full_channel_drops_instead_of_blocking() {
        let (tx, rx) = channel(1);
        tx.notify(SessionEvent::Errors);
        tx.notify(SessionEvent::ChangesUpdated);

        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Errors);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_disconnected_receiver_is_ignored() {
        let (tx, rx) = channel(1);
        drop(rx);
        tx.notify(SessionEvent::RevisionsUpdated);
    }
}
