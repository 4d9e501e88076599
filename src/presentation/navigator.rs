//! Navigator that forwards screen transitions to the console loop.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::ports::{NavigatorPort, Route};

/// Navigation request observed by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Open a screen.
    Navigate(Route),
    /// Close the current screen.
    PopBackStack,
}

/// Sends navigation requests over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<NavigationEvent>,
}

impl ChannelNavigator {
    /// Creates navigator sending to `tx`.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: NavigationEvent) {
        if self.tx.send(event).is_err() {
            warn!("Navigation receiver dropped");
        }
    }
}

impl NavigatorPort for ChannelNavigator {
    fn navigate(&self, route: Route) {
        debug!(route = route.name(), "Navigating");
        self.send(NavigationEvent::Navigate(route));
    }

    fn pop_back_stack(&self) {
        debug!("Popping back stack");
        self.send(NavigationEvent::PopBackStack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_forwards_events_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let navigator = ChannelNavigator::new(tx);

        navigator.navigate(Route::About);
        navigator.pop_back_stack();

        assert_eq!(
            rx.recv().await,
            Some(NavigationEvent::Navigate(Route::About))
        );
        assert_eq!(rx.recv().await, Some(NavigationEvent::PopBackStack));
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        ChannelNavigator::new(tx).navigate(Route::LoadError);
    }
}
