// Channel observer - hands progress over to the caller's own task

use tokio::sync::mpsc;

use crate::ports::ProgressObserver;

/// Notification as seen on the receiving side
#[derive(Debug, Clone, PartialEq)]
pub enum ClipEvent {
    Progress(f64),
    Complete { success: bool, message: String },
}

impl ClipEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClipEvent::Complete { .. })
    }
}

/// Observer that forwards every notification into an unbounded channel.
///
/// The worker never blocks on the consumer; the receiving task applies the
/// events on its own context.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<ClipEvent>,
}

impl ChannelObserver {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ClipEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, ratio: f64) {
        // A departed receiver only means nobody is watching any more
        let _ = self.sender.send(ClipEvent::Progress(ratio));
    }

    fn on_complete(&self, success: bool, message: &str) {
        let _ = self.sender.send(ClipEvent::Complete {
            success,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (observer, mut events) = ChannelObserver::channel();
        observer.on_progress(0.25);
        observer.on_progress(0.5);
        observer.on_complete(true, "done");
        drop(observer);

        let mut received = Vec::new();
        while let Some(event) = events.recv().await {
            received.push(event);
        }
        assert_eq!(
            received,
            vec![
                ClipEvent::Progress(0.25),
                ClipEvent::Progress(0.5),
                ClipEvent::Complete {
                    success: true,
                    message: "done".to_string()
                },
            ]
        );
        assert!(received[2].is_terminal());
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (observer, events) = ChannelObserver::channel();
        drop(events);
        observer.on_progress(0.1);
        observer.on_complete(false, "boom");
    }
}
