//! In-process login/logout broadcast.
//!
//! The bus is created once at the composition root and handed to whoever
//! needs it; there is no global instance.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    Login,
    Logout,
}

pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(AuthEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, Listener)>,
}

#[derive(Clone, Default)]
pub struct AuthBus {
    inner: Arc<Mutex<BusInner>>,
}

impl std::fmt::Debug for AuthBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthBus")
            .field("listeners", &self.lock().listeners.len())
            .finish()
    }
}

impl AuthBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscribe(&self, listener: impl Fn(AuthEvent) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(sid, _)| *sid != id);
    }

    pub fn publish(&self, event: AuthEvent) {
        // Listeners may subscribe/unsubscribe while being notified.
        let listeners: Vec<Listener> = self.lock().listeners.iter().map(|(_, l)| l.clone()).collect();
        log::debug!("auth event {:?} -> {} listener(s)", event, listeners.len());
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_subscribers() {
        let bus = AuthBus::new();
        let logins = Arc::new(AtomicUsize::new(0));
        let counter = logins.clone();
        bus.subscribe(move |e| {
            if e == AuthEvent::Login {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        bus.publish(AuthEvent::Login);
        bus.publish(AuthEvent::Logout);
        assert_eq!(logins.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = AuthBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let id = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(bus.listener_count(), 1);

        bus.unsubscribe(id);
        bus.publish(AuthEvent::Logout);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let bus = AuthBus::new();
        let inner_bus = bus.clone();
        let id = Arc::new(Mutex::new(0));
        let id_for_listener = id.clone();
        let sid = bus.subscribe(move |_| {
            inner_bus.unsubscribe(*id_for_listener.lock().unwrap());
        });
        *id.lock().unwrap() = sid;

        bus.publish(AuthEvent::Logout);
        assert_eq!(bus.listener_count(), 0);
    }
}
