//! Push-style notification of the resolved selection

use domain::RouteSelection;
#[cfg(test)]
use mockall::automock;
use tokio::sync::mpsc;

/// Port notified with a fresh snapshot after every endpoint transition
#[cfg_attr(test, automock)]
pub trait SelectionObserver: Send + Sync {
    /// Receive the current selection
    fn on_selection(&self, selection: &RouteSelection);
}

/// Observer that forwards every snapshot into an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<RouteSelection>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RouteSelection>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SelectionObserver for ChannelObserver {
    fn on_selection(&self, selection: &RouteSelection) {
        // A dropped receiver means nobody is listening any more
        let _ = self.tx.send(selection.clone());
    }
}
