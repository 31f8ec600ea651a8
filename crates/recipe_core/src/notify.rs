type Subscriber = Box<dyn FnMut(&str)>;

/// Fan-out point for user-facing change messages. Explicitly constructed
/// and owned by the store's context rather than living behind a global.
///
/// Delivery is synchronous and in subscription order. There is no
/// unsubscribe and no replay of messages published before a subscription.
#[derive(Default)]
pub struct NotificationService {
    subscribers: Vec<Subscriber>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&str) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn notify(&mut self, message: &str) {
        for subscriber in &mut self.subscribers {
            subscriber(message);
        }
    }
}
