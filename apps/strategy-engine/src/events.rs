//! Leg event registry.
//!
//! Cross-component "add leg" signaling done as an explicit observer
//! registry instead of a module-level singleton set of listeners: the
//! bus is an owned value, registration hands back an id, and listener
//! lifecycle is visible at the call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::position::Position;

/// A change to the caller's working set of legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegEvent {
    /// A leg was added.
    AddLeg {
        /// The added leg.
        position: Position,
    },
    /// A leg was removed.
    RemoveLeg {
        /// Id of the removed leg.
        id: String,
    },
}

/// Handle identifying one subscription on a [`LegEventBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type LegListener = Box<dyn Fn(&LegEvent) + Send>;

/// Observer registry for [`LegEvent`]s.
///
/// Listeners run synchronously, in subscription order, on the caller's
/// thread. No global state is involved: drop the bus and every
/// subscription goes with it.
#[derive(Default)]
pub struct LegEventBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, LegListener)>,
}

impl LegEventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; the returned id unsubscribes it later.
    pub fn subscribe(&mut self, listener: impl Fn(&LegEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "registered leg event listener");
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub_id, _)| *sub_id != id);
        self.listeners.len() < before
    }

    /// Deliver an event to every registered listener, in subscription
    /// order.
    pub fn publish(&self, event: &LegEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for LegEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegEventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{OptionType, PositionAction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn add_leg_event() -> LegEvent {
        LegEvent::AddLeg {
            position: Position {
                id: "pos-1".to_string(),
                option_type: OptionType::Call,
                action: PositionAction::Buy,
                strike: dec!(100),
                premium: dec!(5),
                quantity: 1,
                expiry: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
                strategy: None,
            },
        }
    }

    #[test]
    fn listeners_receive_published_events() {
        let mut bus = LegEventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(&add_leg_event());
        bus.publish(&LegEvent::RemoveLeg {
            id: "pos-1".to_string(),
        });

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut bus = LegEventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        let id = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(&add_leg_event());
        assert!(bus.unsubscribe(id));
        bus.publish(&add_leg_event());

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_unknown_id_returns_false() {
        let mut bus = LegEventBus::new();
        let id = bus.subscribe(|_| {});
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let mut bus = LegEventBus::new();
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            bus.subscribe(move |_| {
                order.lock().unwrap().push(tag);
            });
        }

        bus.publish(&add_leg_event());
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn leg_event_serde_roundtrip() {
        let event = add_leg_event();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"add_leg\""));
        let parsed: LegEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
