//! Busy flag guard for the exchange state machine.

use std::sync::atomic::{AtomicBool, Ordering};

use wayfarer_common::{ConversationEvent, EventBus, ExchangeState};

/// Holds the controller in `AwaitingReply`.
///
/// Dropping the guard always returns to `Idle` and announces it, including
/// when the submitting future is cancelled mid-flight.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
    events: &'a EventBus,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to set the busy flag. Returns `None` if already set.
    pub(crate) fn acquire(flag: &'a AtomicBool, events: &'a EventBus) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(Self { flag, events })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.events
            .publish(ConversationEvent::StateChanged(ExchangeState::Idle));
    }
}
