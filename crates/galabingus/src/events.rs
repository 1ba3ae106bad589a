//! # Game Events
//!
//! Scene-to-observer notifications over a bounded crossbeam channel.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │    Scene    │─────>│  EventBus   │─────>│  Observers  │
//! │  (update)   │      │  (bounded)  │      │ (HUD, logs) │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! Sending never blocks the frame: a full channel drops the event.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use galabingus_core::{EntityHandle, StoreError};
use tracing::trace;

/// Events emitted by the scene.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A game object finished construction.
    EntitySpawned {
        /// Where the object lives in the store.
        handle: EntityHandle,
        /// Asset the object was built from.
        asset: String,
    },

    /// A queued component patch was rejected; the old value was kept.
    StoreFault {
        /// Entity the patch addressed.
        handle: EntityHandle,
        /// Raw kind the patch named.
        kind: u8,
        /// Why the store refused it.
        error: StoreError,
    },

    /// A frame finished.
    FrameCompleted {
        /// Frame number.
        frame: u64,
        /// Draw calls produced by the frame.
        draw_calls: usize,
    },
}

/// Event bus connecting the scene to its observers.
///
/// Pre-allocates a bounded channel so event traffic cannot grow memory
/// without limit.
pub struct EventBus {
    /// Sender end - held by the scene.
    sender: Sender<GameEvent>,
    /// Receiver end - held by observers.
    receiver: Receiver<GameEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight before new ones are dropped.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender and receiver.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<GameEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the event was dropped.
    #[inline]
    pub fn send(&self, event: GameEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                trace!(?event, "event bus full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<GameEvent>,
}

impl EventReceiver {
    /// Receives every pending event without blocking.
    #[inline]
    pub fn drain(&self) -> Vec<GameEvent> {
        self.receiver.try_iter().collect()
    }
}
