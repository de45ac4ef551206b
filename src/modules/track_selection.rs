use tokio::sync::watch;

/// # the selected calendar round
/// the one piece of app-wide mutable state. reads and writes go through this
/// accessor; interested parties subscribe to the watch channel and get
/// notified on every change. `None` means no round is highlighted.
pub struct TrackSelection {
    sender: watch::Sender<Option<u32>>,
    receiver: watch::Receiver<Option<u32>>,
}

impl TrackSelection {
    pub fn new() -> TrackSelection {
        let (sender, receiver) = watch::channel(None);

        TrackSelection { sender, receiver }
    }

    pub fn selected_round(&self) -> Option<u32> {
        *self.receiver.borrow()
    }

    pub fn select_round(&self, round: Option<u32>) {
        // the receiver half lives inside self, so the channel is never closed
        let _ = self.sender.send(round);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<u32>> {
        self.sender.subscribe()
    }
}

impl Default for TrackSelection {
    fn default() -> Self {
        TrackSelection::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_a_selection() {
        let selection = TrackSelection::new();

        assert_eq!(selection.selected_round(), None);
    }

    #[test]
    fn writes_are_visible_through_the_accessor() {
        let selection = TrackSelection::new();

        selection.select_round(Some(7));
        assert_eq!(selection.selected_round(), Some(7));

        selection.select_round(None);
        assert_eq!(selection.selected_round(), None);
    }

    #[rocket::async_test]
    async fn subscribers_are_notified_of_changes() {
        let selection = TrackSelection::new();
        let mut subscriber = selection.subscribe();

        selection.select_round(Some(3));

        subscriber.changed().await.unwrap();
        assert_eq!(*subscriber.borrow(), Some(3));
    }
}
