//! Vitality events and synchronous observer dispatch
//!
//! Observers are called inline, in registration order, before the mutating
//! call returns. They only ever see an immutable event, never the state
//! that produced it.

use body_core::{ColliderId, DamageType, LimbType, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Payload for blood / VFX consumers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageDealt {
    pub position: Vec3,
    pub direction: Vec3,
    pub amount: f64,
    pub damage_type: DamageType,
    pub target: LimbType,
    pub is_critical: bool,
    pub contact: Option<ColliderId>,
}

/// Something observable happened to a character's vitality
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VitalityEvent {
    /// A non-torso limb's health changed
    LimbHealthChanged {
        limb: LimbType,
        current: f64,
        max: f64,
        /// Signed change (negative for damage)
        delta: f64,
    },
    TorsoHealthChanged { current: f64, max: f64, delta: f64 },
    AggregateHealthChanged { previous: f64, current: f64 },
    DamageDealt(DamageDealt),
    Died,
}

impl VitalityEvent {
    pub fn is_death(&self) -> bool {
        matches!(self, VitalityEvent::Died)
    }
}

/// Receives vitality events
pub trait VitalityObserver {
    fn on_event(&mut self, event: &VitalityEvent);
}

impl<F: FnMut(&VitalityEvent)> VitalityObserver for F {
    fn on_event(&mut self, event: &VitalityEvent) {
        self(event)
    }
}

/// Handle returned by [`EventDispatcher::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of observers for one character
#[derive(Default)]
pub struct EventDispatcher {
    observers: Vec<(ObserverId, Box<dyn VitalityObserver>)>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl VitalityObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn dispatch(&mut self, event: VitalityEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Observer that keeps every event it sees.
///
/// Clones share the same buffer, so one clone can be subscribed while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<VitalityEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<VitalityEvent> {
        self.events.borrow().clone()
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<VitalityEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn count(&self, predicate: impl Fn(&VitalityEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl VitalityObserver for EventRecorder {
    fn on_event(&mut self, event: &VitalityEvent) {
        self.events.borrow_mut().push(*event);
    }
}
